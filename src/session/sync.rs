use serde::{
    Deserialize,
    Serialize,
};

use super::{
    accumulator::SessionAccumulator,
    stats::PointValues,
};
use crate::{
    core::RemticaError,
    habitica::types::UserStats,
};

/// How pending points reach Habitica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PushMode {
    /// Re-fetch remote stats and PUT absolute hp/exp values.
    Reconcile,
    /// Send reward-type deltas through the score endpoints; the remote does
    /// its own clamping.
    Reward,
}

impl Default for PushMode {
    fn default() -> Self {
        Self::Reconcile
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDirection {
    Up,
    Down,
}

/// The single seam to the remote service. Presentation of failures happens
/// at the call site, not here.
pub trait StatsRemote {
    async fn fetch_stats(&self) -> Result<UserStats, RemticaError>;

    async fn push_absolute(&self, hp: f64, exp: f64) -> Result<(), RemticaError>;

    async fn score_reward(
        &self,
        direction: ScoreDirection,
        amount: f64,
        notes: &str,
    ) -> Result<(), RemticaError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    NothingPending,
    Pushed {
        xp_added: f64,
        hp_change: f64,
        /// Absolute HP after the push, known only in reconcile mode.
        new_hp: Option<f64>,
    },
}

/// Reconciles the accumulator against the remote. A sync either fully
/// succeeds (counters reset, cache updated) or fully fails (everything
/// retained so the next trigger retries the same totals). Retries are
/// at-least-once: a push whose acknowledgment is lost will be applied again.
pub struct SyncEngine<R> {
    remote: R,
    cached_stats: Option<UserStats>,
}

impl<R: StatsRemote> SyncEngine<R> {
    pub fn new(remote: R) -> Self {
        Self { remote, cached_stats: None }
    }

    /// Last stats seen from the remote. None means "stats unknown", never
    /// zero.
    pub fn cached_stats(&self) -> Option<&UserStats> {
        self.cached_stats.as_ref()
    }

    pub fn set_cached_stats(&mut self, stats: UserStats) {
        self.cached_stats = Some(stats);
    }

    pub async fn refresh_stats(&mut self) -> Result<UserStats, RemticaError> {
        let stats = self.remote.fetch_stats().await?;
        self.cached_stats = Some(stats.clone());
        Ok(stats)
    }

    pub async fn sync(
        &mut self,
        accumulator: &mut SessionAccumulator,
        values: &PointValues,
        mode: PushMode,
    ) -> Result<SyncOutcome, RemticaError> {
        let pending_xp = accumulator.pending_xp(values);
        let pending_hp = accumulator.pending_hp_reduction(values);

        if pending_xp <= 0.0 && pending_hp >= 0.0 {
            return Ok(SyncOutcome::NothingPending);
        }

        let outcome = match mode {
            PushMode::Reconcile => {
                // Reconcile against fresh remote state, never the cache.
                let remote = self.remote.fetch_stats().await?;
                let new_exp = remote.exp + pending_xp;
                let new_hp = (remote.hp + pending_hp).clamp(0.0, remote.max_health);
                let hp_change = new_hp - remote.hp;

                self.remote.push_absolute(new_hp, new_exp).await?;

                let mut updated = remote;
                updated.exp = new_exp;
                updated.hp = new_hp;
                self.cached_stats = Some(updated);

                SyncOutcome::Pushed { xp_added: pending_xp, hp_change, new_hp: Some(new_hp) }
            }
            PushMode::Reward => {
                if pending_xp > 0.0 {
                    self.remote
                        .score_reward(ScoreDirection::Up, pending_xp, "Flashcard session reward")
                        .await?;
                }
                if pending_hp < 0.0 {
                    self.remote
                        .score_reward(
                            ScoreDirection::Down,
                            pending_hp.abs(),
                            "Failed flashcard penalty",
                        )
                        .await?;
                }

                SyncOutcome::Pushed { xp_added: pending_xp, hp_change: pending_hp, new_hp: None }
            }
        };

        accumulator.reset();
        Ok(outcome)
    }
}

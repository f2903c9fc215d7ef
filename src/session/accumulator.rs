use std::time::Instant;

use super::stats::{
    PointValues,
    ReviewGrade,
    SessionStats,
};

/// Pending point state for the current session. One instance lives inside
/// the worker task; event handlers never touch it directly.
#[derive(Debug)]
pub struct SessionAccumulator {
    stats: SessionStats,
    pub(crate) last_sync: Instant,
}

impl Default for SessionAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionAccumulator {
    pub fn new() -> Self {
        Self { stats: SessionStats::default(), last_sync: Instant::now() }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn apply_review(&mut self, grade: ReviewGrade) {
        self.stats.record_review(grade);
    }

    pub fn apply_creation(&mut self) {
        self.stats.record_creation();
    }

    /// XP owed under the current weights. Never negative for sanitized
    /// weights.
    pub fn pending_xp(&self, values: &PointValues) -> f64 {
        self.stats.reviewed_easy as f64 * values.xp_easy
            + self.stats.reviewed_good as f64 * values.xp_good
            + self.stats.reviewed_hard as f64 * values.xp_hard
            + self.stats.cards_created as f64 * values.xp_per_created
    }

    /// HP owed for failed reviews. Zero or negative.
    pub fn pending_hp_reduction(&self, values: &PointValues) -> f64 {
        self.stats.reviewed_fail as f64 * values.hp_fail.min(0.0)
    }

    pub fn has_pending(&self, values: &PointValues) -> bool {
        self.pending_xp(values) > 0.0 || self.pending_hp_reduction(values) < 0.0
    }

    /// Frequency 0 means sync on every trigger.
    pub fn should_sync_now(&self, frequency_mins: f64) -> bool {
        if frequency_mins <= 0.0 {
            return true;
        }

        self.minutes_since_last_sync() >= frequency_mins
    }

    pub fn minutes_since_last_sync(&self) -> f64 {
        self.last_sync.elapsed().as_secs_f64() / 60.0
    }

    pub fn reset(&mut self) {
        self.stats = SessionStats::default();
        self.last_sync = Instant::now();
    }
}

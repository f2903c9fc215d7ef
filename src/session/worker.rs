use std::time::Duration;

use tokio::{
    sync::mpsc,
    time::interval,
};
use uuid::Uuid;

use super::{
    accumulator::SessionAccumulator,
    stats::{
        PointValues,
        ReviewGrade,
    },
    sync::{
        PushMode,
        StatsRemote,
        SyncEngine,
        SyncOutcome,
    },
};
use crate::host::types::{
    HostEvent,
    StatsSnapshot,
    WorkerMessage,
};

pub const SYNC_CHECK_INTERVAL_SECS: u64 = 60;

/// Creation events older than this are change notifications for existing
/// content, not new cards.
pub const CREATION_RECENCY_MS: i64 = 1_000;

const COUNTABLE_KINDS: &[&str] = &["concept", "descriptor"];

/// Owns the accumulator and the sync engine. Everything reaches it through
/// one channel, so there is exactly one mutator of session state.
pub struct Worker<R: StatsRemote> {
    rx: mpsc::Receiver<WorkerMessage>,
    accumulator: SessionAccumulator,
    engine: SyncEngine<R>,
    values: PointValues,
    sync_frequency_mins: f64,
    push_mode: PushMode,
}

impl<R: StatsRemote> Worker<R> {
    pub fn new(
        rx: mpsc::Receiver<WorkerMessage>,
        engine: SyncEngine<R>,
        values: PointValues,
        sync_frequency_mins: f64,
        push_mode: PushMode,
    ) -> Self {
        Self {
            rx,
            accumulator: SessionAccumulator::new(),
            engine,
            values,
            sync_frequency_mins,
            push_mode,
        }
    }

    /// Runs until every event sender is gone.
    pub async fn run(mut self) {
        let mut ticker = interval(Duration::from_secs(SYNC_CHECK_INTERVAL_SECS));

        loop {
            tokio::select! {
                message = self.rx.recv() => {
                    match message {
                        Some(message) => self.handle_message(message).await,
                        None => break,
                    }
                }
                _ = ticker.tick() => self.handle_tick().await,
            }
        }

        println!("[SYNC] Event channel closed, worker stopping");
    }

    async fn handle_message(&mut self, message: WorkerMessage) {
        let WorkerMessage { event, reply } = message;

        match event {
            HostEvent::CardReviewed { grade, score, .. } => {
                let Some(grade) = ReviewGrade::resolve(grade.as_deref(), score) else {
                    // Unrecognized grades contribute neither points nor a
                    // counted review.
                    return;
                };

                self.accumulator.apply_review(grade);

                let xp = self.values.xp_for(grade);
                let hp = self.values.hp_for(grade);
                if xp > 0.0 {
                    println!("[SYNC] Card reviewed ({:?}): +{} XP pending", grade, xp);
                    notice(reply.as_ref(), format!("Card reviewed: +{} XP pending", xp)).await;
                }
                if hp < 0.0 {
                    println!("[SYNC] Card review failed: {} HP pending", hp);
                    notice(reply.as_ref(), format!("Card review failed: {} HP pending", hp)).await;
                }

                self.sync_if_due(reply.as_ref()).await;
            }
            HostEvent::ContentCreated { kind, created_at, .. } => {
                if !is_countable_creation(kind.as_deref(), created_at) {
                    return;
                }

                self.accumulator.apply_creation();

                let xp = self.values.xp_per_created;
                println!("[SYNC] Card created: +{} XP pending", xp);
                notice(reply.as_ref(), format!("Card created: +{} XP pending", xp)).await;

                self.sync_if_due(reply.as_ref()).await;
            }
            HostEvent::SyncNow => {
                self.run_sync(reply.as_ref()).await;
            }
            HostEvent::StatsRequest { message_id } => {
                self.send_snapshot(message_id, reply.as_ref()).await;
            }
            HostEvent::SettingsChanged { values, sync_frequency_mins } => {
                if let Some(values) = values {
                    self.values = values.sanitized();
                    println!("[SYNC] Point weights updated");
                }
                if let Some(frequency) = sync_frequency_mins {
                    self.sync_frequency_mins = frequency.max(0.0);
                    println!("[SYNC] Sync frequency set to {} min", self.sync_frequency_mins);
                }
            }
        }
    }

    async fn handle_tick(&mut self) {
        if self.accumulator.should_sync_now(self.sync_frequency_mins)
            && self.accumulator.has_pending(&self.values)
        {
            self.run_sync(None).await;
        }
    }

    async fn sync_if_due(&mut self, reply: Option<&mpsc::Sender<String>>) {
        if self.accumulator.should_sync_now(self.sync_frequency_mins) {
            self.run_sync(reply).await;
            return;
        }

        let pending_xp = self.accumulator.pending_xp(&self.values);
        let pending_hp = self.accumulator.pending_hp_reduction(&self.values);
        println!(
            "[SYNC] Pending: {} XP, {} HP (sync due within {} min)",
            pending_xp, pending_hp, self.sync_frequency_mins
        );
        notice(reply, format!("Pending sync: {} XP, {} HP", pending_xp, pending_hp)).await;
    }

    async fn run_sync(&mut self, reply: Option<&mpsc::Sender<String>>) {
        let result =
            self.engine.sync(&mut self.accumulator, &self.values, self.push_mode).await;

        match result {
            Ok(SyncOutcome::NothingPending) => {
                println!("[SYNC] No pending changes to sync");
            }
            Ok(SyncOutcome::Pushed { xp_added, hp_change, new_hp }) => {
                if xp_added > 0.0 {
                    println!("[SYNC] Added {} XP to Habitica", xp_added);
                    notice(reply, format!("Added {} XP to Habitica!", xp_added)).await;
                }
                if hp_change < 0.0 {
                    match (new_hp, self.engine.cached_stats()) {
                        (Some(new_hp), Some(stats)) => {
                            println!(
                                "[SYNC] HP is now {:.0}/{:.0} in Habitica",
                                new_hp, stats.max_health
                            );
                            notice(
                                reply,
                                format!(
                                    "HP is now {:.0}/{:.0} in Habitica",
                                    new_hp, stats.max_health
                                ),
                            )
                            .await;
                        }
                        _ => {
                            println!("[SYNC] Reduced HP by {} in Habitica", hp_change.abs());
                        }
                    }
                }
            }
            Err(e) => {
                // Accumulator untouched; the next eligible trigger retries
                // the same totals.
                eprintln!("[SYNC] Sync failed: {}", e);
                notice(reply, "Error updating Habitica stats".to_string()).await;
            }
        }
    }

    async fn send_snapshot(
        &mut self,
        message_id: Option<String>,
        reply: Option<&mpsc::Sender<String>>,
    ) {
        // Show current remote truth when it is reachable; otherwise fall
        // back to whatever was cached last.
        if let Err(e) = self.engine.refresh_stats().await {
            eprintln!("[SYNC] Could not refresh Habitica stats: {}", e);
        }

        let snapshot = StatsSnapshot {
            message_id: message_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            session: *self.accumulator.stats(),
            pending_xp: self.accumulator.pending_xp(&self.values),
            pending_hp_reduction: self.accumulator.pending_hp_reduction(&self.values),
            minutes_since_last_sync: self.accumulator.minutes_since_last_sync(),
            remote: self.engine.cached_stats().cloned(),
        };

        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                if let Some(tx) = reply {
                    if let Err(e) = tx.send(json).await {
                        eprintln!("[SYNC] Failed to send stats snapshot: {}", e);
                    }
                } else {
                    println!("[SYNC] Stats snapshot: {}", json);
                }
            }
            Err(e) => eprintln!("[SYNC] Failed to serialize stats snapshot: {}", e),
        }
    }
}

pub(crate) fn is_countable_creation(kind: Option<&str>, created_at: Option<i64>) -> bool {
    let countable = matches!(kind, Some(kind) if COUNTABLE_KINDS.contains(&kind));
    if !countable {
        return false;
    }

    match created_at {
        // The host re-emits change events for old content; only count fresh
        // creations. A slightly-ahead host clock still counts.
        Some(ms) => chrono::Utc::now().timestamp_millis() - ms <= CREATION_RECENCY_MS,
        None => true,
    }
}

async fn notice(reply: Option<&mpsc::Sender<String>>, text: String) {
    let Some(tx) = reply else {
        return;
    };

    let json = serde_json::json!({ "notice": text }).to_string();
    if let Err(e) = tx.send(json).await {
        eprintln!("[SYNC] Failed to send notice: {}", e);
    }
}

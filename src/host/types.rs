use serde::{
    Deserialize,
    Serialize,
};
use tokio::sync::mpsc;

use crate::{
    habitica::types::UserStats,
    session::stats::{
        PointValues,
        SessionStats,
    },
};

/// One JSON text frame from the note-taking host, tagged by event name.
///
/// Payload fields are all optional: the host is trusted for shape no further
/// than presence checks, and a frame missing what we need becomes a no-op.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HostEvent {
    #[serde(rename_all = "camelCase")]
    CardReviewed {
        #[serde(default)]
        card_id: Option<String>,
        #[serde(default)]
        grade: Option<String>,
        #[serde(default)]
        score: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    ContentCreated {
        #[serde(default)]
        content_id: Option<String>,
        #[serde(default)]
        kind: Option<String>,
        /// Milliseconds since the epoch, host clock.
        #[serde(default)]
        created_at: Option<i64>,
    },
    SyncNow,
    #[serde(rename_all = "camelCase")]
    StatsRequest {
        #[serde(default)]
        message_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SettingsChanged {
        #[serde(default)]
        values: Option<PointValues>,
        #[serde(default)]
        sync_frequency_mins: Option<f64>,
    },
}

/// A parsed event plus the channel back to the connection it arrived on,
/// for notices and stats replies.
#[derive(Debug)]
pub struct WorkerMessage {
    pub event: HostEvent,
    pub reply: Option<mpsc::Sender<String>>,
}

/// Reply to a stats-request: session counters, pending deltas under the
/// current weights, and the last stats seen from Habitica (None when the
/// remote has not been reachable yet).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub message_id: String,
    pub session: SessionStats,
    pub pending_xp: f64,
    pub pending_hp_reduction: f64,
    pub minutes_since_last_sync: f64,
    pub remote: Option<UserStats>,
}

use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::RemticaError,
    habitica::{
        api::DEFAULT_API_URL,
        types::Credentials,
    },
    persistence,
    session::{
        stats::PointValues,
        sync::PushMode,
    },
};


pub const SETTINGS_FILE: &str = "settings.json";

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8767";

/// Everything the user can configure, persisted as one JSON file under the
/// app data dir. Unknown or missing fields fall back to defaults so old
/// settings files keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub habitica_user_id: String,
    pub habitica_api_key: String,
    pub api_url: String,
    pub listen_addr: String,
    pub xp_easy: f64,
    pub xp_good: f64,
    pub xp_hard: f64,
    pub hp_fail: f64,
    pub xp_per_created: f64,
    pub sync_frequency_mins: f64,
    pub push_mode: PushMode,
}

impl Default for SettingsData {
    fn default() -> Self {
        let values = PointValues::default();
        Self {
            habitica_user_id: String::new(),
            habitica_api_key: String::new(),
            api_url: DEFAULT_API_URL.to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            xp_easy: values.xp_easy,
            xp_good: values.xp_good,
            xp_hard: values.xp_hard,
            hp_fail: values.hp_fail,
            xp_per_created: values.xp_per_created,
            sync_frequency_mins: 5.0,
            push_mode: PushMode::Reconcile,
        }
    }
}

impl SettingsData {
    /// Loads the settings file, writing the defaults on first run so the
    /// user has something to edit.
    pub fn load() -> Result<Self, RemticaError> {
        if !persistence::data_file_exists(SETTINGS_FILE) {
            let defaults = Self::default();
            defaults.save()?;
            return Ok(defaults);
        }

        persistence::load_json(SETTINGS_FILE)
    }

    pub fn save(&self) -> Result<(), RemticaError> {
        persistence::save_json(self, SETTINGS_FILE)
    }

    /// Checked before any network call; an empty id or key never leaves the
    /// process.
    pub fn credentials(&self) -> Result<Credentials, RemticaError> {
        if self.habitica_user_id.trim().is_empty() || self.habitica_api_key.trim().is_empty() {
            return Err(RemticaError::MissingCredentials);
        }

        Ok(Credentials {
            user_id: self.habitica_user_id.trim().to_string(),
            api_key: self.habitica_api_key.trim().to_string(),
        })
    }

    /// Weights as applied to the session, sanitized.
    pub fn point_values(&self) -> PointValues {
        PointValues {
            xp_easy: self.xp_easy,
            xp_good: self.xp_good,
            xp_hard: self.xp_hard,
            hp_fail: self.hp_fail,
            xp_per_created: self.xp_per_created,
        }
        .sanitized()
    }
}

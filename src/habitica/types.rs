use serde::{
    Deserialize,
    Serialize,
};

use crate::core::RemticaError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub user_id: String,
    pub api_key: String,
}

/// Habitica wraps every payload in `{success, data, message}`.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, RemticaError> {
        let data = self.ensure_success_with_data()?;
        data.ok_or_else(|| RemticaError::RemoteRejected("response missing data".to_string()))
    }

    /// For writes where the payload itself is not interesting.
    pub fn ensure_success(self) -> Result<(), RemticaError> {
        self.ensure_success_with_data().map(|_| ())
    }

    fn ensure_success_with_data(self) -> Result<Option<T>, RemticaError> {
        if !self.success {
            return Err(RemticaError::RemoteRejected(
                self.message.unwrap_or_else(|| "no message in response".to_string()),
            ));
        }
        Ok(self.data)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub hp: f64,
    pub exp: f64,
    pub lvl: u32,
    pub max_health: f64,
    pub to_next_level: f64,
    #[serde(default)]
    pub gp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    pub profile: Profile,
    pub stats: UserStats,
}

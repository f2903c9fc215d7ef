use reqwest::Client;
use serde_json::json;

use super::types::{
    ApiResponse,
    Credentials,
    UserData,
};
use crate::core::RemticaError;

pub const DEFAULT_API_URL: &str = "https://habitica.com/api/v3";

const API_USER_HEADER: &str = "x-api-user";
const API_KEY_HEADER: &str = "x-api-key";

pub async fn get_user(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
) -> Result<UserData, RemticaError> {
    let response: ApiResponse<UserData> = client
        .get(format!("{}/user", base_url))
        .header(API_USER_HEADER, &creds.user_id)
        .header(API_KEY_HEADER, &creds.api_key)
        .send()
        .await?
        .json()
        .await?;

    response.into_result()
}

/// Writes absolute values for both fields in one request, the way the
/// Habitica v3 API expects flattened stat paths.
pub async fn update_stats(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    hp: f64,
    exp: f64,
) -> Result<(), RemticaError> {
    let body = json!({
        "stats.hp": hp,
        "stats.exp": exp,
    });

    let response: ApiResponse<serde_json::Value> = client
        .put(format!("{}/user", base_url))
        .header(API_USER_HEADER, &creds.user_id)
        .header(API_KEY_HEADER, &creds.api_key)
        .json(&body)
        .send()
        .await?
        .json()
        .await?;

    response.ensure_success()
}

pub async fn score_up(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    amount: f64,
    notes: &str,
) -> Result<(), RemticaError> {
    score(client, base_url, creds, "up", amount, notes).await
}

pub async fn score_down(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    amount: f64,
    notes: &str,
) -> Result<(), RemticaError> {
    score(client, base_url, creds, "down", amount, notes).await
}

async fn score(
    client: &Client,
    base_url: &str,
    creds: &Credentials,
    direction: &str,
    amount: f64,
    notes: &str,
) -> Result<(), RemticaError> {
    let body = json!({
        "type": "reward",
        "scoreNotes": notes,
        "amount": amount,
    });

    let response: ApiResponse<serde_json::Value> = client
        .post(format!("{}/user/score/{}", base_url, direction))
        .header(API_USER_HEADER, &creds.user_id)
        .header(API_KEY_HEADER, &creds.api_key)
        .json(&body)
        .send()
        .await?
        .json()
        .await?;

    response.ensure_success()
}

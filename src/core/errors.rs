use thiserror::Error;
use tokio::sync::mpsc::error::SendError;
use tokio_tungstenite::tungstenite;

#[derive(Error, Debug)]
pub enum RemticaError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tungstenite::Error>),

    #[error("Channel send error: {0}")]
    ChannelSend(String),

    #[error("Habitica credentials are not configured")]
    MissingCredentials,

    #[error("Habitica rejected the request: {0}")]
    RemoteRejected(String),

    #[error("RemticaError: {0}")]
    Custom(String),
}

impl<T> From<SendError<T>> for RemticaError {
    fn from(error: SendError<T>) -> Self {
        RemticaError::ChannelSend(error.to_string())
    }
}

impl From<std::io::Error> for RemticaError {
    fn from(error: std::io::Error) -> Self {
        RemticaError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for RemticaError {
    fn from(error: reqwest::Error) -> Self {
        RemticaError::Reqwest(Box::new(error))
    }
}

impl From<tungstenite::Error> for RemticaError {
    fn from(error: tungstenite::Error) -> Self {
        RemticaError::WebSocket(Box::new(error))
    }
}

use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("websocket connect failed: {0}")]
    Connect(#[source] tungstenite::Error),

    #[error("websocket transport error: {0}")]
    Transport(#[source] tungstenite::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}

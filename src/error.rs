use thiserror::Error;

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("callback error: {0}")]
    Callback(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid update: {0}")]
    InvalidUpdate(String),

    #[error("Serde JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("BSON: {0}")]
    Bson(#[from] bson::error::Error),
}

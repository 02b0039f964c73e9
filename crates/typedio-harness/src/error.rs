//! Harness error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("{function}: {message}")]
    BadArgument { function: String, message: String },
    #[error("unknown flavor '{0}', expected runtime|inline|both")]
    UnknownFlavor(String),
    #[error("no fixture cases found in {0}")]
    NoFixtures(String),
}

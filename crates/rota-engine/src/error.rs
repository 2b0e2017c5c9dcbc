use rota_core::types::EventId;
use thiserror::Error;

/// Engine layer errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Consistency error: record references event {found}, expected event {expected}")]
    ConsistencyError { expected: EventId, found: EventId },

    #[error(transparent)]
    CoreError(#[from] rota_core::error::CoreError),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;

use thiserror::Error;

/// Top-level error type for the planlis editing kernel.
#[derive(Debug, Error)]
pub enum PlanlisError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the plan store.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// Errors related to editing operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`PlanlisError`].
pub type Result<T> = std::result::Result<T, PlanlisError>;

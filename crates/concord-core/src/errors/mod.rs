//! Error handling for Concord.
//! One error enum per subsystem, `thiserror` only, aggregated into [`ConcordError`].

pub mod collaborator_error;
pub mod config_error;
pub mod statement_error;

pub use collaborator_error::CollaboratorError;
pub use config_error::ConfigError;
pub use statement_error::StatementError;

/// Top-level error for every fallible Concord operation.
#[derive(Debug, thiserror::Error)]
pub enum ConcordError {
    #[error("malformed statement: {0}")]
    MalformedStatement(#[from] StatementError),

    #[error("collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across the workspace.
pub type ConcordResult<T> = Result<T, ConcordError>;

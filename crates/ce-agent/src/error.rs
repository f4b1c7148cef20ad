use ce_core::CoreError;
use thiserror::Error;

/// Errors produced by `ce-agent`.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("illegal {disease} transition {from} -> {to}")]
    IllegalTransition {
        disease: &'static str,
        from:    &'static str,
        to:      &'static str,
    },

    #[error("population configuration error: {0}")]
    Config(String),

    #[error("population parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AgentResult<T> = Result<T, AgentError>;

use thiserror::Error;

use ce_agent::AgentError;
use ce_core::CoreError;

#[derive(Debug, Error)]
pub enum DiseaseError {
    #[error("disease configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type DiseaseResult<T> = Result<T, DiseaseError>;

use thiserror::Error;

use ce_agent::AgentError;
use ce_core::CoreError;
use ce_disease::DiseaseError;
use ce_network::NetworkError;
use ce_partnership::PartnershipError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Partnership(#[from] PartnershipError),

    #[error(transparent)]
    Disease(#[from] DiseaseError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SimResult<T> = Result<T, SimError>;

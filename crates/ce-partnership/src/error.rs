use thiserror::Error;

use ce_core::{AgentId, CoreError};
use ce_network::NetworkError;

#[derive(Debug, Error)]
pub enum PartnershipError {
    #[error("partnership configuration error: {0}")]
    Config(String),

    #[error("agent {agent} already has {degree} partners and cannot take another")]
    CapacityExceeded { agent: AgentId, degree: usize },

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type PartnershipResult<T> = Result<T, PartnershipError>;

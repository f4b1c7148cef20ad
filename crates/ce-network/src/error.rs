//! Contact-graph error type.
//!
//! Every variant is an invariant violation: the daily engines check before
//! mutating, so hitting one of these means a logic error upstream.

use thiserror::Error;

use ce_core::AgentId;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("agent {0} is not part of the graph")]
    UnknownAgent(AgentId),

    #[error("self-partnership rejected for {0}")]
    SelfLoop(AgentId),

    #[error("partnership {a} - {b} already exists")]
    DuplicatePartnership { a: AgentId, b: AgentId },

    #[error("no partnership between {a} and {b}")]
    MissingPartnership { a: AgentId, b: AgentId },
}

pub type NetworkResult<T> = Result<T, NetworkError>;

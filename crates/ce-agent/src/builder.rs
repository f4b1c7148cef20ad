//! Fluent builder for constructing an `AgentStore`.
//!
//! # Usage
//!
//! ```rust
//! use ce_agent::AgentStoreBuilder;
//! use ce_core::{Demographics, Gender};
//!
//! let store = AgentStoreBuilder::new()
//!     .agent(Demographics::new(30, Gender::Female, false))
//!     .agent(Demographics::new(32, Gender::Male, true))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(store.count, 2);
//! assert!(store.chronic[0].is_susceptible());
//! ```

use ce_core::Demographics;

use crate::{AgentError, AgentResult, AgentStore};

/// Fluent builder for [`AgentStore`].
///
/// Every agent starts fully susceptible to both diseases; seed infections
/// are applied afterwards with [`crate::seeding`].
#[derive(Default)]
pub struct AgentStoreBuilder {
    demographics: Vec<Demographics>,
}

impl AgentStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for `count` agents.
    pub fn with_capacity(count: usize) -> Self {
        Self { demographics: Vec::with_capacity(count) }
    }

    /// Append one agent; identities are assigned sequentially from 0.
    pub fn agent(mut self, demographics: Demographics) -> Self {
        self.demographics.push(demographics);
        self
    }

    /// Append every agent yielded by `iter`, in order.
    pub fn agents(mut self, iter: impl IntoIterator<Item = Demographics>) -> Self {
        self.demographics.extend(iter);
        self
    }

    pub fn len(&self) -> usize {
        self.demographics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.demographics.is_empty()
    }

    /// Construct the `AgentStore`.
    ///
    /// Fails on an empty population or one too large for `AgentId`.
    pub fn build(self) -> AgentResult<AgentStore> {
        if self.demographics.is_empty() {
            return Err(AgentError::Config(
                "population must contain at least one agent".into(),
            ));
        }
        if u32::try_from(self.demographics.len()).is_err() {
            return Err(AgentError::Config(format!(
                "population of {} exceeds the AgentId range",
                self.demographics.len()
            )));
        }
        Ok(AgentStore::new(self.demographics))
    }
}

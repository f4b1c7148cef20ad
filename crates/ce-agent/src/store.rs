//! Core agent storage: `AgentStore` (SoA data) and census snapshots.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let age = store.demographics[agent.index()].age;  // O(1), cache-friendly
//! ```

use ce_core::{AgentId, Demographics};

use crate::health::{AcuteState, AcuteStatus, ChronicState, ChronicStatus};

// ── Census ────────────────────────────────────────────────────────────────────

/// Chronic-disease compartment counts at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ChronicCensus {
    pub susceptible: usize,
    pub infected:    usize,
    pub recovered:   usize,
}

impl ChronicCensus {
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}

/// Acute-disease compartment counts at one instant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AcuteCensus {
    pub susceptible: usize,
    pub exposed:     usize,
    pub infectious:  usize,
    pub recovered:   usize,
}

impl AcuteCensus {
    pub fn total(&self) -> usize {
        self.susceptible + self.exposed + self.infectious + self.recovered
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for all agent state.
///
/// Demographics are immutable after construction; the two health arrays are
/// mutated in place every simulated day by `ce-disease`.  Agents are never
/// added or removed once the store is built.
///
/// Create via [`AgentStoreBuilder`][crate::AgentStoreBuilder] or
/// [`PopulationSpec::generate`][crate::PopulationSpec::generate].
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub demographics: Vec<Demographics>,

    pub chronic: Vec<ChronicState>,

    pub acute: Vec<AcuteState>,
}

impl AgentStore {
    pub(crate) fn new(demographics: Vec<Demographics>) -> Self {
        let count = demographics.len();
        Self {
            count,
            demographics,
            chronic: vec![ChronicState::default(); count],
            acute: vec![AcuteState::default(); count],
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `true` if `agent` indexes into this store.
    #[inline]
    pub fn contains(&self, agent: AgentId) -> bool {
        agent.index() < self.count
    }

    /// Iterator over all `AgentId`s in ascending index order (population order).
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn demographics(&self, agent: AgentId) -> &Demographics {
        &self.demographics[agent.index()]
    }

    #[inline]
    pub fn chronic(&self, agent: AgentId) -> &ChronicState {
        &self.chronic[agent.index()]
    }

    #[inline]
    pub fn chronic_mut(&mut self, agent: AgentId) -> &mut ChronicState {
        &mut self.chronic[agent.index()]
    }

    #[inline]
    pub fn acute(&self, agent: AgentId) -> &AcuteState {
        &self.acute[agent.index()]
    }

    #[inline]
    pub fn acute_mut(&mut self, agent: AgentId) -> &mut AcuteState {
        &mut self.acute[agent.index()]
    }

    pub fn chronic_census(&self) -> ChronicCensus {
        let mut census = ChronicCensus::default();
        for state in &self.chronic {
            match state.status() {
                ChronicStatus::Susceptible => census.susceptible += 1,
                ChronicStatus::Infected => census.infected += 1,
                ChronicStatus::Recovered => census.recovered += 1,
            }
        }
        census
    }

    pub fn acute_census(&self) -> AcuteCensus {
        let mut census = AcuteCensus::default();
        for state in &self.acute {
            match state.status() {
                AcuteStatus::Susceptible => census.susceptible += 1,
                AcuteStatus::Exposed => census.exposed += 1,
                AcuteStatus::Infectious => census.infectious += 1,
                AcuteStatus::Recovered => census.recovered += 1,
            }
        }
        census
    }

    /// Number of agents that have ever had the chronic infection.
    pub fn chronic_ever_infected(&self) -> usize {
        self.chronic.iter().filter(|s| s.ever_infected()).count()
    }

    /// Number of agents that have ever had the acute infection.
    pub fn acute_ever_infected(&self) -> usize {
        self.acute.iter().filter(|s| s.ever_infected()).count()
    }
}

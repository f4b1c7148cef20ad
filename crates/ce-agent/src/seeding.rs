//! Initial infections and per-disease resets.
//!
//! Seeds are drawn uniformly without replacement from the eligible
//! sub-population.  Asking for more seeds than there are eligible agents is
//! a configuration error, never a silent clamp.

use log::debug;

use ce_core::{AgentId, Day, SimRng};

use crate::{AgentError, AgentResult, AgentStore};
use crate::health::{AcuteState, ChronicState};

/// How many seed infections to place for each disease at day 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeedPlan {
    pub chronic_seeds:   usize,
    /// Chronic seeds are drawn from agents at least this old.
    pub chronic_min_age: u8,
    pub acute_seeds:     usize,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self { chronic_seeds: 20, chronic_min_age: 18, acute_seeds: 20 }
    }
}

/// Reset every agent's chronic state to fully susceptible.
pub fn clear_chronic(store: &mut AgentStore) {
    store.chronic.fill(ChronicState::default());
}

/// Reset every agent's acute state to fully susceptible.
pub fn clear_acute(store: &mut AgentStore) {
    store.acute.fill(AcuteState::default());
}

/// Infect `count` distinct susceptible agents aged `min_age` or older.
///
/// Returns the chosen agents in ascending order.
pub fn seed_chronic(
    store:   &mut AgentStore,
    count:   usize,
    min_age: u8,
    day:     Day,
    rng:     &mut SimRng,
) -> AgentResult<Vec<AgentId>> {
    let eligible: Vec<AgentId> = store
        .agent_ids()
        .filter(|&a| store.demographics(a).age >= min_age && store.chronic(a).is_susceptible())
        .collect();
    let mut chosen = pick(&eligible, count, rng, "chronic")?;
    chosen.sort_unstable();

    for &agent in &chosen {
        store.chronic_mut(agent).infect(day)?;
    }
    debug!("seeded {} chronic infections (age >= {min_age})", chosen.len());
    Ok(chosen)
}

/// Make `count` distinct susceptible agents of any age acutely infectious.
pub fn seed_acute(
    store: &mut AgentStore,
    count: usize,
    day:   Day,
    rng:   &mut SimRng,
) -> AgentResult<Vec<AgentId>> {
    let eligible: Vec<AgentId> = store
        .agent_ids()
        .filter(|&a| store.acute(a).is_susceptible())
        .collect();
    let mut chosen = pick(&eligible, count, rng, "acute")?;
    chosen.sort_unstable();

    for &agent in &chosen {
        store.acute_mut(agent).seed_infectious(day)?;
    }
    debug!("seeded {} acute infections", chosen.len());
    Ok(chosen)
}

fn pick(
    eligible: &[AgentId],
    count:    usize,
    rng:      &mut SimRng,
    disease:  &str,
) -> AgentResult<Vec<AgentId>> {
    if count > eligible.len() {
        return Err(AgentError::Config(format!(
            "{count} {disease} seeds requested but only {} agents are eligible",
            eligible.len()
        )));
    }
    Ok(rng
        .sample_indices(eligible.len(), count)
        .into_iter()
        .map(|i| eligible[i])
        .collect())
}

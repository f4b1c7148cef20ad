//! Chronic sexually transmitted infection: partner-only transmission and a
//! one-way progression to a long-term stage.

use log::trace;

use ce_agent::AgentStore;
use ce_core::error::check_probability;
use ce_core::{AgentId, Day, Gender, SimRng};
use ce_network::ContactGraph;

use crate::{DiseaseError, DiseaseResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChronicParams {
    /// Per-day transmission probability from an infected man to a female partner.
    pub male_to_female: f64,
    /// Per-day transmission probability from an infected woman to a male partner.
    pub female_to_male: f64,
    /// Factor applied when either partner is acutely infectious.
    pub coinfection_factor: f64,
    /// Days after infection at which an agent moves to the recovered stage.
    pub recovery_threshold_days: u32,
}

impl Default for ChronicParams {
    fn default() -> Self {
        Self {
            male_to_female:          1.0 / 1234.0,
            female_to_male:          1.0 / 2380.0,
            coinfection_factor:      2.0,
            recovery_threshold_days: 180,
        }
    }
}

impl ChronicParams {
    pub fn validate(&self) -> DiseaseResult<()> {
        check_probability("chronic male_to_female", self.male_to_female)?;
        check_probability("chronic female_to_male", self.female_to_male)?;
        if !self.coinfection_factor.is_finite() || self.coinfection_factor < 0.0 {
            return Err(DiseaseError::Config(format!(
                "coinfection_factor must be finite and non-negative, got {}",
                self.coinfection_factor
            )));
        }
        Ok(())
    }

    /// Base probability for an infector of the given gender.
    #[inline]
    pub fn base_rate(&self, infector: Gender) -> f64 {
        match infector {
            Gender::Male => self.male_to_female,
            Gender::Female => self.female_to_male,
        }
    }
}

/// One day of chronic transmission along partnerships; returns the number of
/// new infections.
///
/// Partnerships are visited in pair order and both directions are tried.
/// Infections are applied immediately, so an agent infected on an earlier
/// edge is already `Infected` when a later edge is evaluated.
pub fn transmit_chronic(
    agents: &mut AgentStore,
    graph:  &ContactGraph,
    day:    Day,
    params: &ChronicParams,
    rng:    &mut SimRng,
) -> DiseaseResult<usize> {
    let mut infected = 0;
    for p in graph.partnerships() {
        for (from, to) in [(p.a, p.b), (p.b, p.a)] {
            if !(agents.chronic(from).is_infected() && agents.chronic(to).is_susceptible()) {
                continue;
            }
            let mut prob = params.base_rate(agents.demographics(from).gender);
            if agents.acute(from).is_infectious() || agents.acute(to).is_infectious() {
                prob *= params.coinfection_factor;
            }
            if rng.gen_bool(prob) {
                agents.chronic_mut(to).infect(day)?;
                infected += 1;
                trace!("{day}: {from} -> {to} chronic infection");
            }
        }
    }
    Ok(infected)
}

/// Move every infected agent whose infection is at least
/// `recovery_threshold_days` old to the recovered stage; returns the count.
pub fn progress_chronic(
    agents: &mut AgentStore,
    day:    Day,
    params: &ChronicParams,
) -> DiseaseResult<usize> {
    let due: Vec<AgentId> = agents
        .agent_ids()
        .filter(|&a| {
            let c = agents.chronic(a);
            c.is_infected()
                && c.days_since_infection(day).is_some_and(|d| d >= params.recovery_threshold_days)
        })
        .collect();
    for &a in &due {
        agents.chronic_mut(a).recover(day)?;
    }
    Ok(due.len())
}

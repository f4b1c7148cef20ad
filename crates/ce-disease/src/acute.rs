//! Acute respiratory infection: SEIRS progression and two-channel transmission.

use std::collections::BTreeSet;

use log::trace;

use ce_agent::{AgentStore, AcuteStatus};
use ce_core::error::check_probability;
use ce_core::{AgentId, Day, SimRng};
use ce_network::ContactGraph;

use crate::{DiseaseError, DiseaseResult};

// ── Parameters ────────────────────────────────────────────────────────────────

/// Shortest immunity any recovered agent may be given.
pub const WANING_FLOOR_DAYS: u32 = 30;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcuteParams {
    /// Per-day exposure probability along an active partnership.
    pub edge_beta: f64,
    /// Risk multiplier for a susceptible who currently carries the chronic
    /// infection.
    pub hiv_multiplier: f64,
    /// Casual contacts drawn per infectious agent per day.
    pub community_contacts: usize,
    /// Per-contact exposure probability for casual contacts.
    pub community_beta: f64,
    /// Days from exposure to becoming infectious.
    pub incubation_period: u32,
    /// Days spent infectious before recovery.
    pub infectious_period: u32,
    /// Mean of the sampled immunity duration.
    pub immunity_days: u32,
    pub waning_sd: f64,
    /// Floor applied to every sampled immunity duration; never below
    /// [`WANING_FLOOR_DAYS`].
    pub min_waning_days: u32,
}

impl Default for AcuteParams {
    fn default() -> Self {
        Self {
            edge_beta:          0.15,
            hiv_multiplier:     2.0,
            community_contacts: 5,
            community_beta:     0.1,
            incubation_period:  4,
            infectious_period:  7,
            immunity_days:      180,
            waning_sd:          30.0,
            min_waning_days:    WANING_FLOOR_DAYS,
        }
    }
}

impl AcuteParams {
    pub fn validate(&self) -> DiseaseResult<()> {
        check_probability("acute edge_beta", self.edge_beta)?;
        check_probability("acute community_beta", self.community_beta)?;
        if !self.hiv_multiplier.is_finite() || self.hiv_multiplier < 0.0 {
            return Err(DiseaseError::Config(format!(
                "hiv_multiplier must be finite and non-negative, got {}",
                self.hiv_multiplier
            )));
        }
        if !self.waning_sd.is_finite() || self.waning_sd < 0.0 {
            return Err(DiseaseError::Config(format!(
                "waning_sd must be finite and non-negative, got {}",
                self.waning_sd
            )));
        }
        if self.min_waning_days < WANING_FLOOR_DAYS {
            return Err(DiseaseError::Config(format!(
                "min_waning_days must be at least {WANING_FLOOR_DAYS}, got {}",
                self.min_waning_days
            )));
        }
        Ok(())
    }

    /// Multiplier applied to a susceptible `target`'s exposure probability.
    #[inline]
    pub fn multiplier_for(&self, agents: &AgentStore, target: AgentId) -> f64 {
        if agents.chronic(target).is_infected() { self.hiv_multiplier } else { 1.0 }
    }
}

// ── Progression ───────────────────────────────────────────────────────────────

/// Transition counts from one [`progress_acute`] pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AcuteProgression {
    pub became_infectious: usize,
    pub recovered:         usize,
    pub waned:             usize,
}

/// Sample an individual immunity duration: `Normal(immunity_days, waning_sd)`
/// truncated to whole days and floored at `min_waning_days`.
pub fn sample_waning_days(params: &AcuteParams, rng: &mut SimRng) -> DiseaseResult<u32> {
    let draw = rng.normal(f64::from(params.immunity_days), params.waning_sd)?;
    // `as` saturates for out-of-range floats and truncates toward zero.
    let days = (draw as i64).max(i64::from(params.min_waning_days));
    Ok(u32::try_from(days).unwrap_or(u32::MAX))
}

/// Advance every agent's acute state machine by at most one step for `day`.
///
/// - E → I once `incubation_period` days have passed since exposure;
/// - I → R once `infectious_period` days have passed since becoming
///   infectious, sampling the agent's immunity duration;
/// - R → S once the agent's sampled immunity duration has passed.
pub fn progress_acute(
    agents: &mut AgentStore,
    day:    Day,
    params: &AcuteParams,
    rng:    &mut SimRng,
) -> DiseaseResult<AcuteProgression> {
    let mut out = AcuteProgression::default();
    let ids: Vec<AgentId> = agents.agent_ids().collect();

    for id in ids {
        let state = agents.acute(id);
        match state.status() {
            AcuteStatus::Exposed => {
                let Some(since) = state.infection_day().map(|d| day.since(d)) else { continue };
                if since >= params.incubation_period {
                    agents.acute_mut(id).become_infectious(day)?;
                    out.became_infectious += 1;
                }
            }
            AcuteStatus::Infectious => {
                let Some(start) = state.became_infectious_day().or(state.infection_day()) else {
                    continue;
                };
                if day.since(start) >= params.infectious_period {
                    let waning = sample_waning_days(params, rng)?;
                    agents.acute_mut(id).recover(day, waning)?;
                    out.recovered += 1;
                    trace!("{day}: {id} acute recovered, immune for {waning} days");
                }
            }
            AcuteStatus::Recovered => {
                let (Some(rec), Some(waning)) = (state.recovered_day(), state.waning_days()) else {
                    continue;
                };
                if day.since(rec) >= waning {
                    agents.acute_mut(id).wane()?;
                    out.waned += 1;
                }
            }
            AcuteStatus::Susceptible => {}
        }
    }

    Ok(out)
}

// ── Transmission ──────────────────────────────────────────────────────────────

/// One day of acute transmission; returns the number of new exposures.
///
/// 1. Edge channel: every partnership in pair order, both directions
///    (`lo → hi` then `hi → lo`).  An infectious partner exposes a susceptible
///    one with probability `edge_beta × multiplier`.
/// 2. Community channel: every infectious agent in population order draws up
///    to `community_contacts` distinct susceptibles uniformly from the whole
///    population, skipping itself and anyone already pending, and exposes each
///    with probability `community_beta × multiplier`.
///
/// Both channels feed one pending set that is applied once at the end, so no
/// agent is exposed twice on the same day.
pub fn transmit_acute(
    agents: &mut AgentStore,
    graph:  &ContactGraph,
    day:    Day,
    params: &AcuteParams,
    rng:    &mut SimRng,
) -> DiseaseResult<usize> {
    let mut pending: BTreeSet<AgentId> = BTreeSet::new();

    // ── Edge channel ──────────────────────────────────────────────────────
    for p in graph.partnerships() {
        for (from, to) in [(p.a, p.b), (p.b, p.a)] {
            if agents.acute(from).is_infectious()
                && agents.acute(to).is_susceptible()
                && !pending.contains(&to)
            {
                let prob = params.edge_beta * params.multiplier_for(agents, to);
                if rng.gen_bool(prob) {
                    pending.insert(to);
                    trace!("{day}: {from} -> {to} acute exposure (partner)");
                }
            }
        }
    }

    // ── Community channel ─────────────────────────────────────────────────
    let infectious: Vec<AgentId> =
        agents.agent_ids().filter(|&a| agents.acute(a).is_infectious()).collect();
    let susceptible: Vec<AgentId> =
        agents.agent_ids().filter(|&a| agents.acute(a).is_susceptible()).collect();

    if !susceptible.is_empty() && params.community_contacts > 0 {
        for infector in infectious {
            let pool: Vec<AgentId> = susceptible
                .iter()
                .copied()
                .filter(|&s| s != infector && !pending.contains(&s))
                .collect();
            if pool.is_empty() {
                continue;
            }
            for i in rng.sample_indices(pool.len(), params.community_contacts) {
                let contact = pool[i];
                let prob = params.community_beta * params.multiplier_for(agents, contact);
                if rng.gen_bool(prob) {
                    pending.insert(contact);
                    trace!("{day}: {infector} -> {contact} acute exposure (community)");
                }
            }
        }
    }

    for &agent in &pending {
        agents.acute_mut(agent).expose(day)?;
    }
    Ok(pending.len())
}

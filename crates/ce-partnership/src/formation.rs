//! Daily partnership formation.

use log::trace;

use ce_agent::AgentStore;
use ce_core::{AgentId, Day, SimRng};
use ce_network::ContactGraph;

use crate::{PartnershipConfig, PartnershipError, PartnershipResult};

/// Run one formation pass for `day` and return the number of partnerships
/// created.
///
/// For each agent in population order that is old enough and below its
/// capacity, flip a `formation_probability` coin; on success draw one partner
/// from [`eligible_partners`], weighting same-ethnicity candidates by
/// `homophily` and the rest by `1 - homophily`.  An empty pool, or a pool
/// whose weights are all zero, skips the agent for the day.
pub fn form_partnerships(
    agents: &AgentStore,
    graph:  &mut ContactGraph,
    config: &PartnershipConfig,
    day:    Day,
    rng:    &mut SimRng,
) -> PartnershipResult<usize> {
    let mut formed = 0;

    for person in agents.agent_ids() {
        let me = agents.demographics(person);
        if me.age < config.min_age {
            continue;
        }
        if !config.capacity.has_room(graph.degree(person)) {
            continue;
        }
        if !rng.gen_bool(config.formation_probability) {
            continue;
        }

        let pool = eligible_partners(agents, graph, config, person);
        if pool.is_empty() {
            continue;
        }
        let weights: Vec<f64> = pool
            .iter()
            .map(|&c| {
                if me.shares_ethnicity(agents.demographics(c)) {
                    config.homophily
                } else {
                    1.0 - config.homophily
                }
            })
            .collect();
        let Some(choice) = rng.choose_weighted(&weights) else {
            continue;
        };
        let partner = pool[choice];

        if graph.has_partnership(person, partner) {
            trace!("{day}: {person} and {partner} already partnered, skipping");
            continue;
        }
        let degree = graph.degree(partner);
        if !config.capacity.has_room(degree) {
            return Err(PartnershipError::CapacityExceeded { agent: partner, degree });
        }

        graph.add_partnership(person, partner, day)?;
        formed += 1;
        trace!("{day}: partnership formed {person} - {partner}");
    }

    Ok(formed)
}

/// Candidates `person` may partner with today, in population order.
///
/// Excludes `person` itself, same-gender agents, anyone outside
/// `max_age_gap`, anyone younger than `min_age`, and anyone already at
/// capacity in the live graph.
pub fn eligible_partners(
    agents: &AgentStore,
    graph:  &ContactGraph,
    config: &PartnershipConfig,
    person: AgentId,
) -> Vec<AgentId> {
    let me = agents.demographics(person);
    agents
        .agent_ids()
        .filter(|&c| {
            if c == person {
                return false;
            }
            let them = agents.demographics(c);
            them.gender == me.gender.opposite()
                && them.age >= config.min_age
                && me.age_gap(them) <= config.max_age_gap
                && config.capacity.has_room(graph.degree(c))
        })
        .collect()
}

//! Fluent builder for constructing a [`Sim`].

use log::info;

use ce_agent::{AgentStore, clear_acute, clear_chronic, seed_acute, seed_chronic};
use ce_core::{Day, SimClock, SimRng};
use ce_network::ContactGraph;

use crate::{DailySeries, ScenarioConfig, Sim, SimCounters, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`ScenarioConfig`] — days, seed, mode, parameter groups, seed plan
/// - [`AgentStore`] — from [`ce_agent::PopulationSpec::generate`],
///   [`ce_agent::load_population_csv`] or [`ce_agent::AgentStoreBuilder`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                    |
/// |-------------------|--------------------------------------------|
/// | `.rng(r)`         | `SimRng::new(config.seed)`                 |
/// | `.graph(g)`       | Edgeless graph over all agents             |
/// | `.skip_seeding()` | Seeds placed according to `config.seeding` |
///
/// # Example
///
/// ```rust,ignore
/// let mut rng = SimRng::new(config.seed);
/// let agents = PopulationSpec::bourke().generate(&mut rng)?;
/// let mut sim = SimBuilder::new(config, agents).rng(rng).build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:      ScenarioConfig,
    agents:      AgentStore,
    rng:         Option<SimRng>,
    graph:       Option<ContactGraph>,
    place_seeds: bool,
}

impl SimBuilder {
    pub fn new(config: ScenarioConfig, agents: AgentStore) -> Self {
        Self {
            config,
            agents,
            rng:         None,
            graph:       None,
            place_seeds: true,
        }
    }

    /// Continue an existing random stream, e.g. the one the population was
    /// drawn from, instead of starting a fresh one from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Start from an existing contact graph (must cover every agent).
    pub fn graph(mut self, graph: ContactGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Keep the agents' health state exactly as supplied.
    ///
    /// Disabled diseases are still cleared.
    pub fn skip_seeding(mut self) -> Self {
        self.place_seeds = false;
        self
    }

    /// Validate the scenario, reset and seed both diseases according to the
    /// mode, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        let config = self.config.normalized();
        config.validate()?;

        let agent_count = self.agents.count;
        if agent_count == 0 {
            return Err(SimError::Config("population is empty".into()));
        }

        let graph = match self.graph {
            Some(g) => {
                if g.agent_count() != agent_count {
                    return Err(SimError::AgentCountMismatch {
                        expected: agent_count,
                        got:      g.agent_count(),
                        what:     "contact graph",
                    });
                }
                g
            }
            None => ContactGraph::new(agent_count),
        };

        let mut rng = self.rng.unwrap_or_else(|| SimRng::new(config.seed));
        let mut agents = self.agents;

        // ── Seeding ───────────────────────────────────────────────────────
        let mode = config.mode;
        let plan = config.seeding;
        if !mode.runs_chronic() {
            clear_chronic(&mut agents);
        } else if self.place_seeds {
            clear_chronic(&mut agents);
            seed_chronic(&mut agents, plan.chronic_seeds, plan.chronic_min_age, Day::ZERO, &mut rng)?;
        }
        if !mode.runs_acute() {
            clear_acute(&mut agents);
        } else if self.place_seeds {
            clear_acute(&mut agents);
            seed_acute(&mut agents, plan.acute_seeds, Day::ZERO, &mut rng)?;
        }

        info!(
            "scenario ready: {agent_count} agents, {} days, mode {mode}, seed {}; \
             {} chronic and {} acute infections at start",
            config.days,
            config.seed,
            agents.chronic_census().infected,
            agents.acute_census().infectious,
        );

        let series = DailySeries::starting_from(&agents, &graph);
        Ok(Sim {
            clock:    SimClock::new(config.days),
            config,
            agents,
            graph,
            rng,
            counters: SimCounters::default(),
            series,
        })
    }
}

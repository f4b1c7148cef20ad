//! Plain data row types written by output backends.

use ce_agent::{AcuteStatus, AgentStore, ChronicStatus};
use ce_core::{Day, Gender};
use ce_network::ContactGraph;
use ce_sim::DayReport;

/// One row of the day-indexed series.
///
/// `step` 0 is the seeded initial state (all event counts zero); step
/// `d + 1` is the state at the end of simulated day `d`, so prevalence series
/// of length `days + 1` map one-to-one onto steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySummaryRow {
    pub step:                u32,
    pub chronic_prevalence:  usize,
    pub acute_prevalence:    usize,
    pub active_partnerships: usize,
    pub new_chronic:         usize,
    pub new_acute:           usize,
    pub formed:              usize,
    pub dissolved:           usize,
}

impl DaySummaryRow {
    /// The step-0 row for a freshly seeded run.
    pub fn initial(agents: &AgentStore, graph: &ContactGraph) -> Self {
        Self {
            step:                0,
            chronic_prevalence:  agents.chronic_census().infected,
            acute_prevalence:    agents.acute_census().infectious,
            active_partnerships: graph.partnership_count(),
            new_chronic:         0,
            new_acute:           0,
            formed:              0,
            dissolved:           0,
        }
    }
}

impl From<&DayReport> for DaySummaryRow {
    fn from(r: &DayReport) -> Self {
        Self {
            step:                r.day.0 + 1,
            chronic_prevalence:  r.chronic_prevalence,
            acute_prevalence:    r.acute_prevalence,
            active_partnerships: r.partnerships,
            new_chronic:         r.new_chronic,
            new_acute:           r.new_acute,
            formed:              r.formed,
            dissolved:           r.dissolved,
        }
    }
}

/// The final state of one agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentRow {
    pub agent_id:              u32,
    pub age:                   u8,
    pub gender:                Gender,
    pub is_indigenous:         bool,
    pub chronic_status:        ChronicStatus,
    pub chronic_infection_day: Option<Day>,
    pub chronic_recovery_day:  Option<Day>,
    pub chronic_ever_infected: bool,
    pub acute_status:          AcuteStatus,
    pub acute_infection_day:   Option<Day>,
    pub acute_waning_days:     Option<u32>,
    pub acute_ever_infected:   bool,
    /// Number of partners at the end of the run.
    pub degree:                usize,
}

impl AgentRow {
    /// One row per agent, in identity order.
    pub fn all(agents: &AgentStore, graph: &ContactGraph) -> Vec<AgentRow> {
        agents
            .agent_ids()
            .map(|a| {
                let d = agents.demographics(a);
                let c = agents.chronic(a);
                let f = agents.acute(a);
                AgentRow {
                    agent_id:              a.0,
                    age:                   d.age,
                    gender:                d.gender,
                    is_indigenous:         d.is_indigenous,
                    chronic_status:        c.status(),
                    chronic_infection_day: c.infection_day(),
                    chronic_recovery_day:  c.recovery_day(),
                    chronic_ever_infected: c.ever_infected(),
                    acute_status:          f.status(),
                    acute_infection_day:   f.infection_day(),
                    acute_waning_days:     f.waning_days(),
                    acute_ever_infected:   f.ever_infected(),
                    degree:                graph.degree(a),
                }
            })
            .collect()
    }
}

/// One standing partnership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartnershipRow {
    pub a:          u32,
    pub b:          u32,
    pub formed_day: u32,
}

impl PartnershipRow {
    /// Every partnership in pair order.
    pub fn all(graph: &ContactGraph) -> Vec<PartnershipRow> {
        graph
            .partnerships()
            .map(|p| PartnershipRow { a: p.a.0, b: p.b.0, formed_day: p.formed_day.0 })
            .collect()
    }
}

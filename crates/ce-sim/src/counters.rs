//! Lifetime counters, day-indexed series and per-day reports.

use ce_agent::AgentStore;
use ce_core::Day;
use ce_network::ContactGraph;

// ── SimCounters ───────────────────────────────────────────────────────────────

/// Monotone totals over one run.  Seed infections are not counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimCounters {
    pub relationships_formed:     u64,
    pub breakups:                 u64,
    pub chronic_total_infections: u64,
    pub acute_total_infections:   u64,
}

impl SimCounters {
    pub(crate) fn record(&mut self, report: &DayReport) {
        self.relationships_formed += report.formed as u64;
        self.breakups += report.dissolved as u64;
        self.chronic_total_infections += report.new_chronic as u64;
        self.acute_total_infections += report.new_acute as u64;
    }
}

// ── DayReport ─────────────────────────────────────────────────────────────────

/// What happened on one simulated day, as seen at the end of that day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayReport {
    pub day:                Day,
    pub formed:             usize,
    pub dissolved:          usize,
    pub new_chronic:        usize,
    pub new_acute:          usize,
    pub chronic_prevalence: usize,
    pub acute_prevalence:   usize,
    pub partnerships:       usize,
}

// ── DailySeries ───────────────────────────────────────────────────────────────

/// Day-indexed output series.
///
/// Prevalence and partnership series have one entry for the initial state
/// plus one per simulated day (`days + 1`); incidence series have one entry
/// per simulated day (`days`).  Acute prevalence counts `Infectious` agents
/// only; chronic prevalence counts `Infected` agents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySeries {
    pub chronic_prevalence:  Vec<usize>,
    pub acute_prevalence:    Vec<usize>,
    pub active_partnerships: Vec<usize>,
    pub chronic_incidence:   Vec<usize>,
    pub acute_incidence:     Vec<usize>,
}

impl DailySeries {
    /// A series holding only the initial (pre-day-0) snapshot.
    pub(crate) fn starting_from(agents: &AgentStore, graph: &ContactGraph) -> Self {
        Self {
            chronic_prevalence:  vec![agents.chronic_census().infected],
            acute_prevalence:    vec![agents.acute_census().infectious],
            active_partnerships: vec![graph.partnership_count()],
            chronic_incidence:   Vec::new(),
            acute_incidence:     Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, report: &DayReport) {
        self.chronic_prevalence.push(report.chronic_prevalence);
        self.acute_prevalence.push(report.acute_prevalence);
        self.active_partnerships.push(report.partnerships);
        self.chronic_incidence.push(report.new_chronic);
        self.acute_incidence.push(report.new_acute);
    }

    /// Number of simulated days recorded so far.
    pub fn days(&self) -> usize {
        self.chronic_incidence.len()
    }

    /// `(day index, value)` of the highest acute prevalence, first on ties.
    pub fn peak_acute(&self) -> Option<(usize, usize)> {
        self.acute_prevalence
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((i, v)),
            })
    }
}

// ── SimOutputs ────────────────────────────────────────────────────────────────

/// Everything a finished run hands to its caller.
#[derive(Clone, Debug)]
pub struct SimOutputs {
    pub final_day: Day,
    pub series:    DailySeries,
    pub counters:  SimCounters,
    pub agents:    AgentStore,
    pub graph:     ContactGraph,
}

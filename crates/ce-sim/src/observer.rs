//! Simulation observer trait for progress reporting and data collection.

use ce_agent::AgentStore;
use ce_core::Day;
use ce_network::ContactGraph;

use crate::DayReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// daily pipeline.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, report: &DayReport) {
///         if report.day.0 % self.interval == 0 {
///             println!("{}: {} acute, {} chronic", report.day,
///                      report.acute_prevalence, report.chronic_prevalence);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once before the first day is processed, with the seeded state.
    fn on_sim_start(&mut self, _agents: &AgentStore, _graph: &ContactGraph) {}

    /// Called at the very start of each day, before any stage runs.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called after the end-of-day snapshot has been recorded.
    fn on_day_end(&mut self, _report: &DayReport) {}

    /// Called every `config.snapshot_interval_days` days, after `on_day_end`.
    ///
    /// Provides read-only access to the full agent and graph state so output
    /// writers can record it without the sim knowing any output format.
    fn on_snapshot(&mut self, _day: Day, _agents: &AgentStore, _graph: &ContactGraph) {}

    /// Called once after the final day completes.
    fn on_sim_end(&mut self, _final_day: Day, _agents: &AgentStore, _graph: &ContactGraph) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

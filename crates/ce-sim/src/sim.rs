//! The `Sim` struct and its daily pipeline.

use log::{debug, info};

use ce_agent::AgentStore;
use ce_core::{Day, SimClock, SimRng};
use ce_disease::{progress_acute, progress_chronic, transmit_acute, transmit_chronic};
use ce_network::ContactGraph;
use ce_partnership::{dissolve_partnerships, form_partnerships};

use crate::{DailySeries, DayReport, ScenarioConfig, SimCounters, SimObserver, SimOutputs, SimResult};

/// The main simulation runner.
///
/// `Sim` owns all state of one run and drives the fixed daily pipeline:
///
/// ```text
/// for day in 0..config.days:
///   ① acute progression      E→I, I→R (sample immunity), R→S
///   ② partnership formation  one pass in population order
///   ③ acute transmission     edge + community channels, applied once
///   ④ chronic transmission   partner edges, applied immediately
///   ⑤ breakup                each edge independently
///   ⑥ chronic progression    I→R after the threshold
///   ⑦ snapshot               prevalence, incidence, edge count
/// ```
///
/// The order is part of the model: same-day progression is visible to
/// transmission, and partnerships formed today can transmit today.
/// Stages for a disease disabled by the scenario mode are skipped.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Validated, mode-normalised configuration.
    pub config: ScenarioConfig,

    pub clock: SimClock,

    pub agents: AgentStore,

    pub graph: ContactGraph,

    /// The run's single random stream.  Every stage draws from it in
    /// pipeline order.
    pub rng: SimRng,

    pub counters: SimCounters,

    pub series: DailySeries,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current day to the configured horizon.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!("running {} days from {}", self.clock.remaining(), self.clock.current_day);
        observer.on_sim_start(&self.agents, &self.graph);
        while !self.clock.is_finished() {
            self.observed_day(observer)?;
        }
        observer.on_sim_end(self.clock.current_day, &self.agents, &self.graph);
        info!(
            "run finished at {}: {} partnerships formed, {} breakups, \
             {} chronic and {} acute infections",
            self.clock.current_day,
            self.counters.relationships_formed,
            self.counters.breakups,
            self.counters.chronic_total_infections,
            self.counters.acute_total_infections,
        );
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores the horizon).
    ///
    /// Useful for tests and incremental stepping.  `on_sim_start` and
    /// `on_sim_end` are not called.
    pub fn run_days<O: SimObserver>(&mut self, n: u32, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_day(observer)?;
        }
        Ok(())
    }

    /// Process the current day without an observer and advance the clock.
    pub fn step_day(&mut self) -> SimResult<DayReport> {
        let day = self.clock.current_day;
        let report = self.process_day(day)?;
        self.clock.advance();
        Ok(report)
    }

    /// Consume the simulation and return its results.
    pub fn into_outputs(self) -> SimOutputs {
        SimOutputs {
            final_day: self.clock.current_day,
            series:    self.series,
            counters:  self.counters,
            agents:    self.agents,
            graph:     self.graph,
        }
    }

    // ── Core day processing ───────────────────────────────────────────────

    fn observed_day<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let day = self.clock.current_day;
        observer.on_day_start(day);
        let report = self.process_day(day)?;
        observer.on_day_end(&report);
        let interval = self.config.snapshot_interval_days;
        if interval > 0 && day.0.is_multiple_of(interval) {
            observer.on_snapshot(day, &self.agents, &self.graph);
        }
        self.clock.advance();
        Ok(())
    }

    fn process_day(&mut self, day: Day) -> SimResult<DayReport> {
        let mode = self.config.mode;
        let cfg = &self.config;

        // ── ① Acute progression ───────────────────────────────────────────
        if mode.runs_acute() {
            progress_acute(&mut self.agents, day, &cfg.acute, &mut self.rng)?;
        }

        // ── ② Partnership formation ───────────────────────────────────────
        let formed =
            form_partnerships(&self.agents, &mut self.graph, &cfg.partnership, day, &mut self.rng)?;

        // ── ③ Acute transmission ──────────────────────────────────────────
        let new_acute = if mode.runs_acute() {
            transmit_acute(&mut self.agents, &self.graph, day, &cfg.acute, &mut self.rng)?
        } else {
            0
        };

        // ── ④ Chronic transmission ────────────────────────────────────────
        let new_chronic = if mode.runs_chronic() {
            transmit_chronic(&mut self.agents, &self.graph, day, &cfg.chronic, &mut self.rng)?
        } else {
            0
        };

        // ── ⑤ Breakup ─────────────────────────────────────────────────────
        let dissolved = dissolve_partnerships(&mut self.graph, &cfg.partnership, day, &mut self.rng)?;

        // ── ⑥ Chronic progression ─────────────────────────────────────────
        if mode.runs_chronic() {
            progress_chronic(&mut self.agents, day, &cfg.chronic)?;
        }

        // ── ⑦ Snapshot ────────────────────────────────────────────────────
        let report = DayReport {
            day,
            formed,
            dissolved,
            new_chronic,
            new_acute,
            chronic_prevalence: self.agents.chronic_census().infected,
            acute_prevalence:   self.agents.acute_census().infectious,
            partnerships:       self.graph.partnership_count(),
        };
        self.counters.record(&report);
        self.series.push(&report);

        debug!(
            "{day}: +{formed}/-{dissolved} partnerships ({} active), \
             {new_acute} acute / {new_chronic} chronic new, prevalence {} acute / {} chronic",
            report.partnerships, report.acute_prevalence, report.chronic_prevalence,
        );
        Ok(report)
    }
}

//! Monte-Carlo ensembles: many independent seeds of one scenario.
//!
//! Run `i` uses seed `config.seed + i`.  Each run draws its population and
//! its whole simulation from its own `SimRng`, and owns its own registry and
//! graph, so the results do not depend on whether the runs execute
//! sequentially or (with the `parallel` feature) on Rayon's thread pool.

use log::{info, warn};

use ce_agent::AgentStore;
use ce_core::SimRng;

use crate::{DailySeries, NoopObserver, ScenarioConfig, SimBuilder, SimCounters, SimResult};

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// The retained result of one ensemble member.
#[derive(Clone, Debug)]
pub struct RunOutcome {
    pub seed:     u64,
    pub series:   DailySeries,
    pub counters: SimCounters,
}

/// Per-day mean and central 95% interval of one series across runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Band {
    pub mean: Vec<f64>,
    pub lo:   Vec<f64>,
    pub hi:   Vec<f64>,
}

impl Band {
    fn across(runs: &[RunOutcome], series: impl Fn(&DailySeries) -> &[usize]) -> Self {
        let len = runs.iter().map(|r| series(&r.series).len()).min().unwrap_or(0);
        let mut band = Band::default();
        for day in 0..len {
            let mut values: Vec<f64> = runs.iter().map(|r| series(&r.series)[day] as f64).collect();
            values.sort_by(f64::total_cmp);
            band.mean.push(values.iter().sum::<f64>() / values.len() as f64);
            band.lo.push(percentile(&values, 2.5));
            band.hi.push(percentile(&values, 97.5));
        }
        band
    }

    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

/// Linear-interpolated percentile `q` (0–100) of an ascending slice.
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = (q / 100.0).clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
        }
    }
}

/// Bands for every series of an ensemble.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EnsembleSummary {
    pub runs:               usize,
    pub chronic_prevalence: Band,
    pub acute_prevalence:   Band,
    pub chronic_incidence:  Band,
    pub acute_incidence:    Band,
}

impl EnsembleSummary {
    pub fn from_runs(runs: &[RunOutcome]) -> Self {
        Self {
            runs:               runs.len(),
            chronic_prevalence: Band::across(runs, |s| s.chronic_prevalence.as_slice()),
            acute_prevalence:   Band::across(runs, |s| s.acute_prevalence.as_slice()),
            chronic_incidence:  Band::across(runs, |s| s.chronic_incidence.as_slice()),
            acute_incidence:    Band::across(runs, |s| s.acute_incidence.as_slice()),
        }
    }
}

/// All members of a finished ensemble plus their summary.
#[derive(Clone, Debug)]
pub struct Ensemble {
    pub runs:    Vec<RunOutcome>,
    pub summary: EnsembleSummary,
}

impl Ensemble {
    /// Mean of one lifetime counter across runs (0 for an empty ensemble).
    pub fn mean_counter(&self, f: impl Fn(&SimCounters) -> u64) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        self.runs.iter().map(|r| f(&r.counters) as f64).sum::<f64>() / self.runs.len() as f64
    }
}

// ── Driver ────────────────────────────────────────────────────────────────────

/// Run `runs` independent replicates of `config`.
///
/// `population` builds each run's agents from that run's `SimRng` (e.g.
/// `|rng| spec.generate(rng).map_err(Into::into)`), so the population itself
/// varies with the seed when it is drawn, and is identical when it is loaded.
pub fn run_ensemble<F>(config: &ScenarioConfig, runs: usize, population: F) -> SimResult<Ensemble>
where
    F: Fn(&mut SimRng) -> SimResult<AgentStore> + Sync,
{
    if runs == 0 {
        warn!("ensemble of zero runs requested; returning an empty summary");
    }
    info!("ensemble: {runs} runs of {} days, seeds from {}", config.days, config.seed);

    let seeds: Vec<u64> = (0..runs as u64).map(|i| config.seed.wrapping_add(i)).collect();
    let run_one = |&seed: &u64| -> SimResult<RunOutcome> {
        let mut rng = SimRng::new(seed);
        let agents = population(&mut rng)?;
        let cfg = ScenarioConfig { seed, ..config.clone() };
        let mut sim = SimBuilder::new(cfg, agents).rng(rng).build()?;
        sim.run(&mut NoopObserver)?;
        let out = sim.into_outputs();
        Ok(RunOutcome { seed, series: out.series, counters: out.counters })
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<SimResult<RunOutcome>> = seeds.iter().map(run_one).collect();

    #[cfg(feature = "parallel")]
    let results: Vec<SimResult<RunOutcome>> = {
        use rayon::prelude::*;
        seeds.par_iter().map(run_one).collect()
    };

    let runs = results.into_iter().collect::<SimResult<Vec<_>>>()?;
    let summary = EnsembleSummary::from_runs(&runs);
    info!("ensemble finished: {} runs", runs.len());
    Ok(Ensemble { runs, summary })
}

//! bourke — chronic/acute co-epidemic in a remote Australian town.
//!
//! Draws (or loads) the town's 2,340 residents, seeds both infections and
//! runs the daily partnership/transmission pipeline for two years.  A single
//! run writes the daily series and the final agent and partnership tables;
//! `--runs N` runs an ensemble and writes per-day 95% bands instead.
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for per-day
//! summaries or `RUST_LOG=trace` for every infection and partnership event.

mod cli;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use ce_agent::{AgentStore, PopulationSpec, load_population_csv};
use ce_core::{Day, SimRng};
use ce_network::ContactGraph;
use ce_output::{CsvWriter, OutputWriter, SimOutputObserver, write_ensemble_csv};
use ce_sim::{DayReport, ScenarioConfig, SimBuilder, SimError, SimObserver, SimOutputs, run_ensemble};

use cli::Cli;

// ── Constants ─────────────────────────────────────────────────────────────────

const PROGRESS_INTERVAL_DAYS: u32 = 30;

// ── Population source ─────────────────────────────────────────────────────────

enum Population {
    Loaded(AgentStore),
    Drawn(PopulationSpec),
}

impl Population {
    fn draw(&self, rng: &mut SimRng) -> Result<AgentStore, SimError> {
        match self {
            Population::Loaded(store) => Ok(store.clone()),
            Population::Drawn(spec) => Ok(spec.generate(rng)?),
        }
    }
}

// ── Observer wrapper to report progress ──────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:       SimOutputObserver<W>,
    series_rows: usize,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, series_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for ProgressObserver<W> {
    fn on_sim_start(&mut self, agents: &AgentStore, graph: &ContactGraph) {
        self.series_rows += 1;
        self.inner.on_sim_start(agents, graph);
    }

    fn on_day_end(&mut self, report: &DayReport) {
        self.series_rows += 1;
        if report.day.0.is_multiple_of(PROGRESS_INTERVAL_DAYS) {
            info!(
                "{}: {} chronic infected, {} acute infectious, {} partnerships",
                report.day, report.chronic_prevalence, report.acute_prevalence, report.partnerships,
            );
        }
        self.inner.on_day_end(report);
    }

    fn on_sim_end(&mut self, final_day: Day, agents: &AgentStore, graph: &ContactGraph) {
        self.inner.on_sim_end(final_day, agents, graph);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // 1. Scenario configuration.
    let mut config = match &cli.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader::<_, ScenarioConfig>(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => ScenarioConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.mode = mode.into();
    }
    if let Some(days) = cli.days {
        config.days = days;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    // 2. Population.
    let population = match &cli.population {
        Some(path) => Population::Loaded(
            load_population_csv(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => Population::Drawn(PopulationSpec::bourke()),
    };

    println!("=== bourke — chronic/acute co-epidemic ===");
    println!(
        "Mode: {}  |  Days: {}  |  Seed: {}  |  Runs: {}",
        config.mode, config.days, config.seed, cli.runs
    );
    println!();

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    match cli.runs {
        0 => {
            warn!("--runs 0: nothing to do");
            Ok(())
        }
        1 => single_run(config, &population, &cli.output),
        n => ensemble(config, &population, n, &cli.output),
    }
}

// ── Single run ────────────────────────────────────────────────────────────────

fn single_run(config: ScenarioConfig, population: &Population, out_dir: &Path) -> Result<()> {
    let mut rng = SimRng::new(config.seed);
    let agents = population.draw(&mut rng)?;
    let mut sim = SimBuilder::new(config, agents).rng(rng).build()?;

    let adults = sim.agents.agent_ids().filter(|&a| sim.agents.demographics(a).age >= 18).count();
    println!("==== INITIALISATION ====");
    println!("Population: {} ({} adults)", sim.agents.count, adults);
    println!("Chronic infected at start: {}", sim.agents.chronic_census().infected);
    println!("Acute infectious at start: {}", sim.agents.acute_census().infectious);
    println!();

    let writer = CsvWriter::new(out_dir)?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    check_output(&mut obs.inner, out_dir)?;

    let rows = obs.series_rows;
    let out = sim.into_outputs();
    print_run_summary(&out, elapsed.as_secs_f64());
    println!();
    println!("Output written to {}", out_dir.display());
    println!("  daily_series.csv       : {rows} rows");
    println!("  final_agents.csv       : {} rows", out.agents.count);
    println!("  final_partnerships.csv : {} rows", out.graph.partnership_count());
    Ok(())
}

/// Fail with the first write error the output observer held back during the run.
fn check_output<W: OutputWriter>(obs: &mut SimOutputObserver<W>, out_dir: &Path) -> Result<()> {
    match obs.take_error() {
        Some(e) => Err(e).with_context(|| format!("writing output to {}", out_dir.display())),
        None => Ok(()),
    }
}

fn print_run_summary(out: &SimOutputs, secs: f64) {
    let chronic = out.agents.chronic_census();
    let acute = out.agents.acute_census();

    println!("==== RUNTIME ====");
    println!("Simulated {} days in {secs:.3} s", out.final_day.0);
    println!("Chronic infected now:          {}", chronic.infected);
    println!("Acute infectious now:          {}", acute.infectious);
    println!("Breakups:                      {}", out.counters.breakups);
    println!("Partnerships formed:           {}", out.counters.relationships_formed);
    println!();
    println!("==== END ====");
    println!("Chronic infections (run):      {}", out.counters.chronic_total_infections);
    println!("Chronic recovered stage:       {}", chronic.recovered);
    println!("Acute infections (run):        {}", out.counters.acute_total_infections);
    println!("Acute recovered (immune):      {}", acute.recovered);
    println!(
        "Agents: {}  |  partnerships: {}  |  max degree: {}",
        out.agents.count,
        out.graph.partnership_count(),
        out.graph.max_degree()
    );
    if let Some((step, peak)) = out.series.peak_acute() {
        println!("Peak acute prevalence:         {peak} at step {step}");
    }
}

// ── Ensemble ──────────────────────────────────────────────────────────────────

fn ensemble(config: ScenarioConfig, population: &Population, runs: usize, out_dir: &Path) -> Result<()> {
    let t0 = Instant::now();
    let ens = run_ensemble(&config, runs, |rng| population.draw(rng))?;
    let elapsed = t0.elapsed();

    let path = out_dir.join("ensemble_summary.csv");
    write_ensemble_csv(&path, &ens.summary)?;

    println!("==== ENSEMBLE ====");
    println!("{runs} runs in {:.3} s", elapsed.as_secs_f64());
    println!("Mean chronic infections:  {:.1}", ens.mean_counter(|c| c.chronic_total_infections));
    println!("Mean acute infections:   {:.1}", ens.mean_counter(|c| c.acute_total_infections));
    println!("Mean partnerships formed: {:.1}", ens.mean_counter(|c| c.relationships_formed));
    println!("Mean breakups:            {:.1}", ens.mean_counter(|c| c.breakups));
    if let Some(last) = ens.summary.acute_prevalence.len().checked_sub(1) {
        let band = &ens.summary.acute_prevalence;
        println!(
            "Final acute prevalence:   {:.1} (95% band {:.1} – {:.1})",
            band.mean[last], band.lo[last], band.hi[last]
        );
    }
    println!("Bands written to {}", path.display());
    Ok(())
}

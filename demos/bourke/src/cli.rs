//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use ce_sim::ScenarioMode;

#[derive(Parser, Debug)]
#[command(name = "bourke")]
#[command(about = "Chronic/acute co-epidemic over a dynamic partnership network in a remote town")]
pub struct Cli {
    /// Which infections to simulate
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Number of simulated days (overrides the config file)
    #[arg(long)]
    pub days: Option<u32>,

    /// Random seed; ensemble run i uses seed + i (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of independent runs; more than one writes ensemble bands
    #[arg(long, default_value_t = 1)]
    pub runs: usize,

    /// JSON scenario configuration; missing fields take default values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Population CSV (age,gender,is_indigenous); default draws the reference town
    #[arg(long)]
    pub population: Option<PathBuf>,

    /// Directory for the output CSV files
    #[arg(long, default_value = "output/bourke")]
    pub output: PathBuf,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Both,
    ChronicOnly,
    AcuteOnly,
}

impl From<ModeArg> for ScenarioMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Both => ScenarioMode::Both,
            ModeArg::ChronicOnly => ScenarioMode::ChronicOnly,
            ModeArg::AcuteOnly => ScenarioMode::AcuteOnly,
        }
    }
}

//! `ce-sim` — daily pipeline orchestrator for the coepi simulator.
//!
//! # Daily pipeline
//!
//! ```text
//! for day in 0..config.days:
//!   ① Acute progression    — E→I, I→R (sampling immunity), R→S.
//!   ② Formation            — one pass in population order, live capacity.
//!   ③ Acute transmission   — partner edges + community mixing into one
//!                             pending set, applied once.
//!   ④ Chronic transmission — partner edges only, applied immediately.
//!   ⑤ Breakup              — every edge dissolves independently.
//!   ⑥ Chronic progression  — I→R after the recovery threshold.
//!   ⑦ Snapshot             — prevalence, incidence and edge count.
//! ```
//!
//! Reordering the stages changes results.  The whole day is sequential and
//! draws from one `SimRng`; only whole runs are parallelised, by
//! [`run_ensemble`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs ensemble members on Rayon's thread pool.            |
//! | `serde`    | `Serialize`/`Deserialize` for configs and report types.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ce_agent::PopulationSpec;
//! use ce_core::SimRng;
//! use ce_sim::{NoopObserver, ScenarioConfig, SimBuilder};
//!
//! let config = ScenarioConfig::default();
//! let mut rng = SimRng::new(config.seed);
//! let agents = PopulationSpec::bourke().generate(&mut rng)?;
//! let mut sim = SimBuilder::new(config, agents).rng(rng).build()?;
//! sim.run(&mut NoopObserver)?;
//! let outputs = sim.into_outputs();
//! ```

pub mod builder;
pub mod config;
pub mod counters;
pub mod ensemble;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use config::{ScenarioConfig, ScenarioMode};
pub use counters::{DailySeries, DayReport, SimCounters, SimOutputs};
pub use ensemble::{Band, Ensemble, EnsembleSummary, RunOutcome, percentile, run_ensemble};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;

//! `ce-output` — simulation output writers for the coepi simulator.
//!
//! | Writer                 | Files created                                                   |
//! |------------------------|-----------------------------------------------------------------|
//! | [`CsvWriter`]          | `daily_series.csv`, `final_agents.csv`, `final_partnerships.csv` |
//! | [`write_ensemble_csv`] | one file of per-step mean / 2.5% / 97.5% bands                  |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ce_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ce_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::{CsvWriter, write_ensemble_csv};
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{AgentRow, DaySummaryRow, PartnershipRow};
pub use writer::OutputWriter;

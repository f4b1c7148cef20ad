//! `ce-disease` — transmission and progression for both infections.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`acute`]   | `AcuteParams`, `progress_acute`, `transmit_acute`                |
//! | [`chronic`] | `ChronicParams`, `transmit_chronic`, `progress_chronic`          |
//! | [`error`]   | `DiseaseError`, `DiseaseResult<T>`                               |
//!
//! Every function here is one stage of the daily pipeline.  Stages take the
//! agent store and contact graph by reference, draw from the run's single
//! [`SimRng`](ce_core::SimRng), and return how many transitions they made so
//! the caller can keep its counters.
//!
//! # Application discipline
//!
//! The acute stage collects exposures from both mixing channels into one
//! pending set and applies it at the end, so an agent is exposed at most once
//! per day.  The chronic stage applies each infection as soon as its coin
//! flip succeeds; a newly infected agent therefore cannot be infected again
//! the same day, but it *can* act as an infector for edges visited later in
//! the same pass.

pub mod acute;
pub mod chronic;
pub mod error;

#[cfg(test)]
mod tests;

pub use acute::{
    AcuteParams, AcuteProgression, WANING_FLOOR_DAYS, progress_acute, sample_waning_days,
    transmit_acute,
};
pub use chronic::{ChronicParams, progress_chronic, transmit_chronic};
pub use error::{DiseaseError, DiseaseResult};

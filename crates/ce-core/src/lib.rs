//! `ce-core` — foundational types for the `coepi` co-epidemic simulator.
//!
//! This crate is a dependency of every other `ce-*` crate.  It has no `ce-*`
//! dependencies and only a handful of external ones (`rand`, `rand_distr`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | [`ids`]           | `AgentId`                                           |
//! | [`time`]          | `Day`, `SimClock`                                   |
//! | [`rng`]           | `SimRng` (the single per-run random stream)         |
//! | [`demographics`]  | `Gender`, `Demographics`                            |
//! | [`error`]         | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod demographics;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use demographics::{Demographics, Gender};
pub use error::{CoreError, CoreResult};
pub use ids::AgentId;
pub use rng::SimRng;
pub use time::{Day, SimClock};

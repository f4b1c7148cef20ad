//! `ce-network` — the contact graph of active partnerships.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                 |
//! |-----------|----------------------------------------------------------|
//! | [`graph`] | `ContactGraph`, `Partnership`, `PairKey`                 |
//! | [`error`] | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Partnership`/`PairKey`. |

pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

pub use error::{NetworkError, NetworkResult};
pub use graph::{ContactGraph, PairKey, Partnership};

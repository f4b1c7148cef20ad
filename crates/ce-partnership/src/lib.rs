//! `ce-partnership` — relationship dynamics over the contact graph.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`config`]    | `PartnershipConfig`, `PartnerCapacity`                      |
//! | [`formation`] | `form_partnerships`, `eligible_partners`                    |
//! | [`breakup`]   | `dissolve_partnerships`                                     |
//! | [`error`]     | `PartnershipError`, `PartnershipResult<T>`                  |
//!
//! # Daily contract
//!
//! Formation is a single pass in population order.  Capacity is read from
//! the live graph at every selection, so an agent paired earlier in the same
//! pass is no longer a candidate once it is full.  Breakup is memoryless: each
//! edge dissolves independently with a fixed daily probability.

pub mod breakup;
pub mod config;
pub mod error;
pub mod formation;


pub use breakup::dissolve_partnerships;
pub use config::{PartnerCapacity, PartnershipConfig};
pub use error::{PartnershipError, PartnershipResult};
pub use formation::{eligible_partners, form_partnerships};

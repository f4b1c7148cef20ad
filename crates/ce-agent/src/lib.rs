//! `ce-agent` — the agent registry for the `coepi` simulator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`health`]      | `ChronicState`, `AcuteState` and their transition functions   |
//! | [`store`]       | `AgentStore` (SoA arrays), census snapshots                   |
//! | [`builder`]     | `AgentStoreBuilder` (fluent construction)                     |
//! | [`population`]  | `PopulationSpec`, `AgeBracket` — synthetic population draw    |
//! | [`seeding`]     | `SeedPlan`, seed / clear helpers for both diseases            |
//! | [`loader`]      | CSV population loader                                         |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types. |

pub mod builder;
pub mod error;
pub mod health;
pub mod loader;
pub mod population;
pub mod seeding;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use health::{AcuteState, AcuteStatus, ChronicState, ChronicStatus};
pub use loader::{load_population_csv, load_population_reader};
pub use population::{AgeBracket, PopulationSpec};
pub use seeding::{SeedPlan, clear_acute, clear_chronic, seed_acute, seed_chronic};
pub use store::{AcuteCensus, AgentStore, ChronicCensus};

//! Scenario configuration.

use std::fmt;
use std::str::FromStr;

use ce_agent::SeedPlan;
use ce_disease::{AcuteParams, ChronicParams};
use ce_partnership::PartnershipConfig;

use crate::{SimError, SimResult};

// ── ScenarioMode ──────────────────────────────────────────────────────────────

/// Which infections are simulated.
///
/// A disabled disease has its state cleared at build time, its stages are
/// skipped every day, and its series stay all-zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScenarioMode {
    #[default]
    Both,
    ChronicOnly,
    AcuteOnly,
}

impl ScenarioMode {
    #[inline]
    pub fn runs_chronic(self) -> bool {
        matches!(self, ScenarioMode::Both | ScenarioMode::ChronicOnly)
    }

    #[inline]
    pub fn runs_acute(self) -> bool {
        matches!(self, ScenarioMode::Both | ScenarioMode::AcuteOnly)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioMode::Both => "both",
            ScenarioMode::ChronicOnly => "chronic-only",
            ScenarioMode::AcuteOnly => "acute-only",
        }
    }
}

impl fmt::Display for ScenarioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioMode {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(ScenarioMode::Both),
            "chronic-only" | "chronic_only" => Ok(ScenarioMode::ChronicOnly),
            "acute-only" | "acute_only" => Ok(ScenarioMode::AcuteOnly),
            other => Err(SimError::Config(format!("unknown scenario mode {other:?}"))),
        }
    }
}

// ── ScenarioConfig ────────────────────────────────────────────────────────────

/// Everything one run needs besides the population itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScenarioConfig {
    /// Number of simulated days; days `0 .. days` are processed.
    pub days: u32,
    /// Seed for the run's single random stream.
    pub seed: u64,
    pub mode: ScenarioMode,
    /// Call `SimObserver::on_snapshot` every this many days (0 = never).
    pub snapshot_interval_days: u32,
    pub partnership: PartnershipConfig,
    pub chronic: ChronicParams,
    pub acute: AcuteParams,
    pub seeding: SeedPlan,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            days:                   730,
            seed:                   42,
            mode:                   ScenarioMode::Both,
            snapshot_interval_days: 30,
            partnership:            PartnershipConfig::default(),
            chronic:                ChronicParams::default(),
            acute:                  AcuteParams::default(),
            seeding:                SeedPlan::default(),
        }
    }
}

impl ScenarioConfig {
    /// Check every parameter group.  Seed counts are checked against the
    /// actual population later, by the builder.
    pub fn validate(&self) -> SimResult<()> {
        self.partnership.validate()?;
        self.chronic.validate()?;
        self.acute.validate()?;
        Ok(())
    }

    /// The configuration actually simulated under `mode`.
    ///
    /// `AcuteOnly` neutralises the chronic-infection risk multiplier so the
    /// acute epidemic runs as if no one carried the chronic infection.
    pub fn normalized(mut self) -> Self {
        if self.mode == ScenarioMode::AcuteOnly {
            self.acute.hiv_multiplier = 1.0;
        }
        self
    }
}

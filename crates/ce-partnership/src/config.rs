//! Relationship-dynamics parameters.

use ce_core::error::check_probability;

use crate::{PartnershipError, PartnershipResult};

/// How many simultaneous partners one agent may have.
///
/// Enforced at formation time only; lowering the cap mid-run does not break
/// existing partnerships.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PartnerCapacity {
    /// At most one partner.
    #[default]
    Monogamous,
    /// At most `n` partners.
    Limited(usize),
    Unlimited,
}

impl PartnerCapacity {
    /// The numeric cap, or `None` when unlimited.
    pub fn limit(self) -> Option<usize> {
        match self {
            PartnerCapacity::Monogamous => Some(1),
            PartnerCapacity::Limited(n) => Some(n),
            PartnerCapacity::Unlimited => None,
        }
    }

    /// `true` if an agent with `degree` partners may take one more.
    #[inline]
    pub fn has_room(self, degree: usize) -> bool {
        self.limit().is_none_or(|cap| degree < cap)
    }
}

/// Parameters for partnership formation and breakup.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PartnershipConfig {
    /// Per-agent daily probability of attempting to form a partnership.
    pub formation_probability: f64,
    /// Weight for a same-ethnicity candidate; other candidates get `1 - homophily`.
    pub homophily: f64,
    /// Neither partner may be younger than this.
    pub min_age: u8,
    /// Maximum absolute age difference between partners, in years.
    pub max_age_gap: u8,
    /// Per-edge daily dissolution probability.
    pub breakup_probability: f64,
    pub capacity: PartnerCapacity,
}

impl Default for PartnershipConfig {
    fn default() -> Self {
        Self {
            formation_probability: 0.1429,
            homophily:             0.7,
            min_age:               16,
            max_age_gap:           10,
            breakup_probability:   0.02,
            capacity:              PartnerCapacity::Monogamous,
        }
    }
}

impl PartnershipConfig {
    pub fn validate(&self) -> PartnershipResult<()> {
        check_probability("formation_probability", self.formation_probability)?;
        check_probability("homophily", self.homophily)?;
        check_probability("breakup_probability", self.breakup_probability)?;
        if self.capacity == PartnerCapacity::Limited(0) {
            return Err(PartnershipError::Config(
                "partner capacity Limited(0) would forbid every partnership; \
                 set formation_probability to 0 instead"
                    .into(),
            ));
        }
        Ok(())
    }
}

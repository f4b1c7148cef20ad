//! Immutable per-agent demographic attributes.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Binary gender category used by the heterosexual mixing model.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// The other category.
    #[inline]
    pub fn opposite(self) -> Gender {
        match self {
            Gender::Male => Gender::Female,
            Gender::Female => Gender::Male,
        }
    }

    /// Single-letter code used in CSV files.
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "M" | "m" | "male" | "Male" => Ok(Gender::Male),
            "F" | "f" | "female" | "Female" => Ok(Gender::Female),
            other => Err(CoreError::Parse(format!(
                "invalid gender {other:?}: expected \"M\" or \"F\""
            ))),
        }
    }
}

/// Attributes sampled once at population creation and never mutated.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Demographics {
    /// Age in whole years.
    pub age: u8,
    pub gender: Gender,
    /// Ethnicity category used for homophily weighting.
    pub is_indigenous: bool,
}

impl Demographics {
    pub fn new(age: u8, gender: Gender, is_indigenous: bool) -> Self {
        Self { age, gender, is_indigenous }
    }

    /// Absolute age difference in years.
    #[inline]
    pub fn age_gap(&self, other: &Demographics) -> u8 {
        self.age.abs_diff(other.age)
    }

    #[inline]
    pub fn shares_ethnicity(&self, other: &Demographics) -> bool {
        self.is_indigenous == other.is_indigenous
    }
}

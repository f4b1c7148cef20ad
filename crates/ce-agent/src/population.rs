//! Synthetic population bootstrap.
//!
//! Draw order per agent (all from the run's single `SimRng`):
//!
//! 1. an age bracket, weighted by `AgeBracket::weight`;
//! 2. a uniform integer age inside the bracket;
//! 3. gender (`Male` with probability `male_fraction`);
//! 4. ethnicity (`is_indigenous` with probability `indigenous_fraction`).

use log::debug;

use ce_core::error::check_probability;
use ce_core::{Demographics, Gender, SimRng};

use crate::{AgentError, AgentResult, AgentStore, AgentStoreBuilder};

/// An inclusive age range `[lo, hi]` with a relative sampling weight.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeBracket {
    pub lo:     u8,
    pub hi:     u8,
    pub weight: f64,
}

impl AgeBracket {
    pub const fn new(lo: u8, hi: u8, weight: f64) -> Self {
        Self { lo, hi, weight }
    }
}

/// Parameters for drawing a population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationSpec {
    pub size:                usize,
    pub age_brackets:        Vec<AgeBracket>,
    pub male_fraction:       f64,
    pub indigenous_fraction: f64,
}

const BOURKE_SIZE: usize = 2_340;

/// Census counts per five-year bracket for the reference community.
///
/// The counts total 2,353, not 2,340: the census age table and the headcount
/// disagree.  Counts are used directly as bracket weights, so ages are drawn
/// in proportion to the age table and the oldest bracket keeps its 34/2,353
/// share rather than being truncated to make probabilities sum to one.
const BOURKE_BRACKETS: [(u8, u8, u32); 18] = [
    (0, 4, 178),
    (5, 9, 172),
    (10, 14, 165),
    (15, 19, 134),
    (20, 24, 134),
    (25, 29, 150),
    (30, 34, 168),
    (35, 39, 148),
    (40, 44, 122),
    (45, 49, 128),
    (50, 54, 173),
    (55, 59, 164),
    (60, 64, 158),
    (65, 69, 102),
    (70, 74, 110),
    (75, 79, 67),
    (80, 84, 46),
    (85, 120, 34),
];
const BOURKE_MALES: usize = 1_164;
const BOURKE_INDIGENOUS: usize = 708;

impl PopulationSpec {
    /// The reference remote-town community: 2,340 residents.
    pub fn bourke() -> Self {
        let n = BOURKE_SIZE as f64;
        Self {
            size:                BOURKE_SIZE,
            age_brackets:        BOURKE_BRACKETS
                .iter()
                .map(|&(lo, hi, count)| AgeBracket::new(lo, hi, f64::from(count)))
                .collect(),
            male_fraction:       BOURKE_MALES as f64 / n,
            indigenous_fraction: BOURKE_INDIGENOUS as f64 / n,
        }
    }

    pub fn validate(&self) -> AgentResult<()> {
        if self.size == 0 {
            return Err(AgentError::Config("population size must be positive".into()));
        }
        if self.age_brackets.is_empty() {
            return Err(AgentError::Config("at least one age bracket is required".into()));
        }
        for b in &self.age_brackets {
            if b.lo > b.hi {
                return Err(AgentError::Config(format!(
                    "age bracket [{}, {}] has lo > hi",
                    b.lo, b.hi
                )));
            }
            if !b.weight.is_finite() || b.weight < 0.0 {
                return Err(AgentError::Config(format!(
                    "age bracket [{}, {}] has invalid weight {}",
                    b.lo, b.hi, b.weight
                )));
            }
        }
        if self.age_brackets.iter().map(|b| b.weight).sum::<f64>() <= 0.0 {
            return Err(AgentError::Config("age bracket weights sum to zero".into()));
        }
        check_probability("male_fraction", self.male_fraction)?;
        check_probability("indigenous_fraction", self.indigenous_fraction)?;
        Ok(())
    }

    /// Draw `size` agents, all fully susceptible.
    pub fn generate(&self, rng: &mut SimRng) -> AgentResult<AgentStore> {
        self.validate()?;

        let weights: Vec<f64> = self.age_brackets.iter().map(|b| b.weight).collect();
        let mut builder = AgentStoreBuilder::with_capacity(self.size);

        for _ in 0..self.size {
            let bracket = rng
                .choose_weighted(&weights)
                .map(|i| self.age_brackets[i])
                .ok_or_else(|| AgentError::Config("age bracket weights are degenerate".into()))?;
            let age = rng.gen_range(bracket.lo..=bracket.hi);
            let gender = if rng.gen_bool(self.male_fraction) {
                Gender::Male
            } else {
                Gender::Female
            };
            let is_indigenous = rng.gen_bool(self.indigenous_fraction);
            builder = builder.agent(Demographics::new(age, gender, is_indigenous));
        }

        let store = builder.build()?;
        debug!("generated population of {} agents", store.count);
        Ok(store)
    }
}

//! Per-disease health state machines.
//!
//! Each disease has a closed status enum and a fixed-schema state record.
//! Fields are private: the only way to change a status is through the
//! transition methods below, which reject any move the disease's state
//! diagram does not contain.  That keeps `ever_infected` monotone and makes
//! states such as "chronic Exposed" unrepresentable.
//!
//! ```text
//! chronic:  S ──infect──▶ I ──recover──▶ R
//! acute:    S ──expose──▶ E ──become_infectious──▶ I ──recover──▶ R ──wane──▶ S
//! ```

use std::fmt;

use ce_core::Day;

use crate::{AgentError, AgentResult};

// ── Chronic ───────────────────────────────────────────────────────────────────

/// Status for the chronic, sexually transmitted infection.
///
/// `Recovered` is a fixed long-term clinical stage, not immunity loss: there
/// is no transition back to `Susceptible`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChronicStatus {
    #[default]
    Susceptible,
    Infected,
    Recovered,
}

impl ChronicStatus {
    pub fn code(self) -> &'static str {
        match self {
            ChronicStatus::Susceptible => "S",
            ChronicStatus::Infected => "I",
            ChronicStatus::Recovered => "R",
        }
    }
}

impl fmt::Display for ChronicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChronicState {
    status:        ChronicStatus,
    infection_day: Option<Day>,
    recovery_day:  Option<Day>,
    ever_infected: bool,
}

impl ChronicState {
    #[inline]
    pub fn status(&self) -> ChronicStatus {
        self.status
    }

    #[inline]
    pub fn infection_day(&self) -> Option<Day> {
        self.infection_day
    }

    #[inline]
    pub fn recovery_day(&self) -> Option<Day> {
        self.recovery_day
    }

    #[inline]
    pub fn ever_infected(&self) -> bool {
        self.ever_infected
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.status == ChronicStatus::Susceptible
    }

    #[inline]
    pub fn is_infected(&self) -> bool {
        self.status == ChronicStatus::Infected
    }

    /// S → I.
    pub fn infect(&mut self, day: Day) -> AgentResult<()> {
        if self.status != ChronicStatus::Susceptible {
            return Err(self.illegal(ChronicStatus::Infected));
        }
        self.status = ChronicStatus::Infected;
        self.infection_day = Some(day);
        self.ever_infected = true;
        Ok(())
    }

    /// I → R.
    pub fn recover(&mut self, day: Day) -> AgentResult<()> {
        if self.status != ChronicStatus::Infected {
            return Err(self.illegal(ChronicStatus::Recovered));
        }
        self.status = ChronicStatus::Recovered;
        self.recovery_day = Some(day);
        Ok(())
    }

    /// Days since infection, or `None` if never infected.
    pub fn days_since_infection(&self, today: Day) -> Option<u32> {
        self.infection_day.map(|d| today.since(d))
    }

    fn illegal(&self, to: ChronicStatus) -> AgentError {
        AgentError::IllegalTransition {
            disease: "chronic",
            from:    self.status.code(),
            to:      to.code(),
        }
    }
}

// ── Acute ─────────────────────────────────────────────────────────────────────

/// Status for the acute respiratory infection (SEIRS).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AcuteStatus {
    #[default]
    Susceptible,
    Exposed,
    Infectious,
    Recovered,
}

impl AcuteStatus {
    pub fn code(self) -> &'static str {
        match self {
            AcuteStatus::Susceptible => "S",
            AcuteStatus::Exposed => "E",
            AcuteStatus::Infectious => "I",
            AcuteStatus::Recovered => "R",
        }
    }
}

impl fmt::Display for AcuteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcuteState {
    status:                AcuteStatus,
    infection_day:         Option<Day>,
    became_infectious_day: Option<Day>,
    recovered_day:         Option<Day>,
    /// Individually sampled immunity duration, set on I → R.
    waning_days:           Option<u32>,
    ever_infected:         bool,
}

impl AcuteState {
    #[inline]
    pub fn status(&self) -> AcuteStatus {
        self.status
    }

    #[inline]
    pub fn infection_day(&self) -> Option<Day> {
        self.infection_day
    }

    #[inline]
    pub fn became_infectious_day(&self) -> Option<Day> {
        self.became_infectious_day
    }

    #[inline]
    pub fn recovered_day(&self) -> Option<Day> {
        self.recovered_day
    }

    #[inline]
    pub fn waning_days(&self) -> Option<u32> {
        self.waning_days
    }

    #[inline]
    pub fn ever_infected(&self) -> bool {
        self.ever_infected
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.status == AcuteStatus::Susceptible
    }

    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.status == AcuteStatus::Infectious
    }

    /// S → E.
    pub fn expose(&mut self, day: Day) -> AgentResult<()> {
        if self.status != AcuteStatus::Susceptible {
            return Err(self.illegal(AcuteStatus::Exposed));
        }
        self.status = AcuteStatus::Exposed;
        self.infection_day = Some(day);
        self.ever_infected = true;
        Ok(())
    }

    /// E → I.
    pub fn become_infectious(&mut self, day: Day) -> AgentResult<()> {
        if self.status != AcuteStatus::Exposed {
            return Err(self.illegal(AcuteStatus::Infectious));
        }
        self.status = AcuteStatus::Infectious;
        self.became_infectious_day = Some(day);
        Ok(())
    }

    /// I → R, recording the sampled immunity duration.
    pub fn recover(&mut self, day: Day, waning_days: u32) -> AgentResult<()> {
        if self.status != AcuteStatus::Infectious {
            return Err(self.illegal(AcuteStatus::Recovered));
        }
        self.status = AcuteStatus::Recovered;
        self.recovered_day = Some(day);
        self.waning_days = Some(waning_days);
        Ok(())
    }

    /// R → S.  Infection timestamps are cleared so a later reinfection is
    /// tracked from scratch; `ever_infected` stays set.
    pub fn wane(&mut self) -> AgentResult<()> {
        if self.status != AcuteStatus::Recovered {
            return Err(self.illegal(AcuteStatus::Susceptible));
        }
        self.status = AcuteStatus::Susceptible;
        self.infection_day = None;
        self.became_infectious_day = None;
        Ok(())
    }

    /// S → I directly, used only for day-0 seed cases which start shedding
    /// immediately.
    pub fn seed_infectious(&mut self, day: Day) -> AgentResult<()> {
        if self.status != AcuteStatus::Susceptible {
            return Err(self.illegal(AcuteStatus::Infectious));
        }
        self.status = AcuteStatus::Infectious;
        self.infection_day = Some(day);
        self.became_infectious_day = Some(day);
        self.ever_infected = true;
        Ok(())
    }

    fn illegal(&self, to: AcuteStatus) -> AgentError {
        AgentError::IllegalTransition {
            disease: "acute",
            from:    self.status.code(),
            to:      to.code(),
        }
    }
}

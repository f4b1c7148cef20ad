//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `daily_series.csv`
//! - `final_agents.csv`
//! - `final_partnerships.csv`
//!
//! Ensemble bands go to a single file written by [`write_ensemble_csv`].
//! Absent timestamps are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use ce_sim::EnsembleSummary;

use crate::writer::OutputWriter;
use crate::{AgentRow, DaySummaryRow, OutputResult, PartnershipRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    series:       Writer<File>,
    agents:       Writer<File>,
    partnerships: Writer<File>,
    finished:     bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut series = Writer::from_path(dir.join("daily_series.csv"))?;
        series.write_record([
            "step",
            "chronic_prevalence",
            "acute_prevalence",
            "active_partnerships",
            "new_chronic",
            "new_acute",
            "formed",
            "dissolved",
        ])?;

        let mut agents = Writer::from_path(dir.join("final_agents.csv"))?;
        agents.write_record([
            "agent_id",
            "age",
            "gender",
            "is_indigenous",
            "chronic_status",
            "chronic_infection_day",
            "chronic_recovery_day",
            "chronic_ever_infected",
            "acute_status",
            "acute_infection_day",
            "acute_waning_days",
            "acute_ever_infected",
            "degree",
        ])?;

        let mut partnerships = Writer::from_path(dir.join("final_partnerships.csv"))?;
        partnerships.write_record(["a", "b", "formed_day"])?;

        Ok(Self {
            series,
            agents,
            partnerships,
            finished: false,
        })
    }
}

fn opt<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()> {
        self.series.write_record(&[
            row.step.to_string(),
            row.chronic_prevalence.to_string(),
            row.acute_prevalence.to_string(),
            row.active_partnerships.to_string(),
            row.new_chronic.to_string(),
            row.new_acute.to_string(),
            row.formed.to_string(),
            row.dissolved.to_string(),
        ])?;
        Ok(())
    }

    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()> {
        for row in rows {
            self.agents.write_record(&[
                row.agent_id.to_string(),
                row.age.to_string(),
                row.gender.code().to_string(),
                row.is_indigenous.to_string(),
                row.chronic_status.code().to_string(),
                opt(row.chronic_infection_day.map(|d| d.0)),
                opt(row.chronic_recovery_day.map(|d| d.0)),
                row.chronic_ever_infected.to_string(),
                row.acute_status.code().to_string(),
                opt(row.acute_infection_day.map(|d| d.0)),
                opt(row.acute_waning_days),
                row.acute_ever_infected.to_string(),
                row.degree.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_partnerships(&mut self, rows: &[PartnershipRow]) -> OutputResult<()> {
        for row in rows {
            self.partnerships.write_record(&[
                row.a.to_string(),
                row.b.to_string(),
                row.formed_day.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.series.flush()?;
        self.agents.flush()?;
        self.partnerships.flush()?;
        Ok(())
    }
}

/// Write per-step ensemble bands to `path`.
///
/// One row per step, as in `daily_series.csv`.  Incidence columns are empty
/// on step 0, which has no simulated day behind it.
pub fn write_ensemble_csv(path: &Path, summary: &EnsembleSummary) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record([
        "step",
        "chronic_prevalence_mean",
        "chronic_prevalence_lo",
        "chronic_prevalence_hi",
        "acute_prevalence_mean",
        "acute_prevalence_lo",
        "acute_prevalence_hi",
        "chronic_incidence_mean",
        "chronic_incidence_lo",
        "chronic_incidence_hi",
        "acute_incidence_mean",
        "acute_incidence_lo",
        "acute_incidence_hi",
    ])?;

    let steps = summary.chronic_prevalence.len().max(summary.acute_prevalence.len());
    let at = |v: &[f64], i: usize| opt(v.get(i));
    let before = |v: &[f64], step: usize| if step == 0 { String::new() } else { opt(v.get(step - 1)) };

    for step in 0..steps {
        let cp = &summary.chronic_prevalence;
        let ap = &summary.acute_prevalence;
        let ci = &summary.chronic_incidence;
        let ai = &summary.acute_incidence;
        w.write_record(&[
            step.to_string(),
            at(&cp.mean, step),
            at(&cp.lo, step),
            at(&cp.hi, step),
            at(&ap.mean, step),
            at(&ap.lo, step),
            at(&ap.hi, step),
            before(&ci.mean, step),
            before(&ci.lo, step),
            before(&ci.hi, step),
            before(&ai.mean, step),
            before(&ai.lo, step),
            before(&ai.hi, step),
        ])?;
    }
    w.flush()?;
    Ok(())
}

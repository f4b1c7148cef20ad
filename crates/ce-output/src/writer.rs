//! The `OutputWriter` trait implemented by backend writers.

use crate::{AgentRow, DaySummaryRow, OutputResult, PartnershipRow};

/// Trait implemented by output backends.
///
/// The observer never propagates these errors; they are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`](crate::SimOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one row of the day-indexed series.
    fn write_day_summary(&mut self, row: &DaySummaryRow) -> OutputResult<()>;

    /// Write the final state of every agent.
    fn write_agents(&mut self, rows: &[AgentRow]) -> OutputResult<()>;

    /// Write the partnerships standing at the end of the run.
    fn write_partnerships(&mut self, rows: &[PartnershipRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

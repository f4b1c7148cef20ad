//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use ce_agent::AgentStore;
use ce_core::Day;
use ce_network::ContactGraph;
use ce_sim::{DayReport, SimObserver};

use crate::row::{AgentRow, DaySummaryRow, PartnershipRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the daily series and the final agent and
/// partnership tables to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_sim_start(&mut self, agents: &AgentStore, graph: &ContactGraph) {
        let result = self.writer.write_day_summary(&DaySummaryRow::initial(agents, graph));
        self.store_err(result);
    }

    fn on_day_end(&mut self, report: &DayReport) {
        let result = self.writer.write_day_summary(&DaySummaryRow::from(report));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_day: Day, agents: &AgentStore, graph: &ContactGraph) {
        let result = self.writer.write_agents(&AgentRow::all(agents, graph));
        self.store_err(result);
        let result = self.writer.write_partnerships(&PartnershipRow::all(graph));
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}

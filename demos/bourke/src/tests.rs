//! Tests for the bourke application glue.

#[cfg(test)]
mod output_errors {
    use std::path::Path;

    use ce_agent::PopulationSpec;
    use ce_core::SimRng;
    use ce_output::{
        AgentRow, DaySummaryRow, OutputError, OutputResult, OutputWriter, PartnershipRow,
        SimOutputObserver,
    };
    use ce_sim::{ScenarioConfig, Sim, SimBuilder};

    use crate::check_output;

    struct StubWriter {
        fail: bool,
    }

    impl OutputWriter for StubWriter {
        fn write_day_summary(&mut self, _row: &DaySummaryRow) -> OutputResult<()> {
            if self.fail {
                Err(OutputError::Io(std::io::Error::other("disk full")))
            } else {
                Ok(())
            }
        }
        fn write_agents(&mut self, _rows: &[AgentRow]) -> OutputResult<()> {
            Ok(())
        }
        fn write_partnerships(&mut self, _rows: &[PartnershipRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    fn small_sim() -> Sim {
        let config = ScenarioConfig { days: 5, ..ScenarioConfig::default() };
        let mut rng = SimRng::new(config.seed);
        let agents = PopulationSpec { size: 120, ..PopulationSpec::bourke() }
            .generate(&mut rng)
            .unwrap();
        SimBuilder::new(config, agents).rng(rng).build().unwrap()
    }

    #[test]
    fn failed_write_fails_the_run() {
        let mut sim = small_sim();
        let mut obs = SimOutputObserver::new(StubWriter { fail: true });
        sim.run(&mut obs).unwrap();

        let err = check_output(&mut obs, Path::new("out")).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("writing output to out"));
        assert!(chain.contains("disk full"));
    }

    #[test]
    fn clean_run_passes() {
        let mut sim = small_sim();
        let mut obs = SimOutputObserver::new(StubWriter { fail: false });
        sim.run(&mut obs).unwrap();
        check_output(&mut obs, Path::new("out")).unwrap();
    }
}

//! Unit tests for ce-disease.

use ce_agent::{AgentStore, AgentStoreBuilder};
use ce_core::{Demographics, Gender};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `n` adults alternating male / female, starting with a man.
fn people(n: usize) -> AgentStore {
    AgentStoreBuilder::new()
        .agents((0..n).map(|i| {
            let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
            Demographics::new(30, gender, false)
        }))
        .build()
        .unwrap()
}

fn quiet_acute() -> crate::AcuteParams {
    crate::AcuteParams {
        edge_beta:          0.0,
        hiv_multiplier:     1.0,
        community_contacts: 0,
        community_beta:     0.0,
        ..Default::default()
    }
}

// ── Parameters ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod params {
    use ce_core::Gender;

    use crate::{AcuteParams, ChronicParams, WANING_FLOOR_DAYS};

    #[test]
    fn defaults_are_valid() {
        AcuteParams::default().validate().unwrap();
        ChronicParams::default().validate().unwrap();
    }

    #[test]
    fn bad_values_rejected() {
        let mut a = AcuteParams::default();
        a.edge_beta = 1.2;
        assert!(a.validate().is_err());

        let mut a = AcuteParams::default();
        a.waning_sd = -1.0;
        assert!(a.validate().is_err());

        let mut a = AcuteParams::default();
        a.hiv_multiplier = f64::NAN;
        assert!(a.validate().is_err());

        let mut c = ChronicParams::default();
        c.female_to_male = -0.5;
        assert!(c.validate().is_err());
    }

    #[test]
    fn waning_floor_cannot_be_lowered() {
        let mut a = AcuteParams::default();
        a.min_waning_days = WANING_FLOOR_DAYS - 1;
        assert!(a.validate().is_err());

        a.min_waning_days = 0;
        assert!(a.validate().is_err());

        a.min_waning_days = 60;
        a.validate().unwrap();
    }

    #[test]
    fn base_rate_depends_on_infector_gender() {
        let c = ChronicParams::default();
        assert_eq!(c.base_rate(Gender::Male), 1.0 / 1234.0);
        assert_eq!(c.base_rate(Gender::Female), 1.0 / 2380.0);
        assert!(c.base_rate(Gender::Male) > c.base_rate(Gender::Female));
    }
}

// ── Acute progression ─────────────────────────────────────────────────────────

#[cfg(test)]
mod acute_progression {
    use ce_agent::AcuteStatus;
    use ce_core::{AgentId, Day, SimRng};

    use super::*;
    use crate::{AcuteParams, progress_acute, sample_waning_days};

    #[test]
    fn waning_never_below_floor() {
        let params = AcuteParams { immunity_days: 0, waning_sd: 1_000.0, ..Default::default() };
        let mut rng = SimRng::new(1);
        for _ in 0..10_000 {
            assert!(sample_waning_days(&params, &mut rng).unwrap() >= 30);
        }
    }

    #[test]
    fn waning_centres_on_immunity_days() {
        let params = AcuteParams::default();
        let mut rng = SimRng::new(2);
        let n = 5_000;
        let total: u64 = (0..n).map(|_| u64::from(sample_waning_days(&params, &mut rng).unwrap())).sum();
        let mean = total as f64 / n as f64;
        assert!((mean - 180.0).abs() < 5.0, "mean {mean}");
    }

    #[test]
    fn full_seirs_cycle() {
        let mut agents = people(1);
        let a = AgentId(0);
        let params = AcuteParams::default();
        let mut rng = SimRng::new(3);
        agents.acute_mut(a).expose(Day(0)).unwrap();

        progress_acute(&mut agents, Day(3), &params, &mut rng).unwrap();
        assert_eq!(agents.acute(a).status(), AcuteStatus::Exposed);

        let step = progress_acute(&mut agents, Day(4), &params, &mut rng).unwrap();
        assert_eq!(step.became_infectious, 1);
        assert_eq!(agents.acute(a).status(), AcuteStatus::Infectious);
        assert_eq!(agents.acute(a).became_infectious_day(), Some(Day(4)));

        progress_acute(&mut agents, Day(10), &params, &mut rng).unwrap();
        assert!(agents.acute(a).is_infectious());

        let step = progress_acute(&mut agents, Day(11), &params, &mut rng).unwrap();
        assert_eq!(step.recovered, 1);
        assert_eq!(agents.acute(a).status(), AcuteStatus::Recovered);
        let waning = agents.acute(a).waning_days().unwrap();
        assert!(waning >= 30);

        progress_acute(&mut agents, Day(11).offset(waning - 1), &params, &mut rng).unwrap();
        assert_eq!(agents.acute(a).status(), AcuteStatus::Recovered);

        let step = progress_acute(&mut agents, Day(11).offset(waning), &params, &mut rng).unwrap();
        assert_eq!(step.waned, 1);
        assert!(agents.acute(a).is_susceptible());
        assert!(agents.acute(a).ever_infected());
        assert_eq!(agents.acute(a).infection_day(), None);
    }

    #[test]
    fn at_most_one_step_per_day() {
        let mut agents = people(1);
        let a = AgentId(0);
        let params = AcuteParams { incubation_period: 0, infectious_period: 0, ..Default::default() };
        let mut rng = SimRng::new(4);
        agents.acute_mut(a).expose(Day(5)).unwrap();

        progress_acute(&mut agents, Day(5), &params, &mut rng).unwrap();
        assert!(agents.acute(a).is_infectious());
        progress_acute(&mut agents, Day(5), &params, &mut rng).unwrap();
        assert_eq!(agents.acute(a).status(), AcuteStatus::Recovered);
    }

    #[test]
    fn susceptibles_are_untouched() {
        let mut agents = people(4);
        let mut rng = SimRng::new(5);
        let step = progress_acute(&mut agents, Day(100), &quiet_acute(), &mut rng).unwrap();
        assert_eq!(step, Default::default());
        assert_eq!(agents.acute_census().susceptible, 4);
    }
}

// ── Acute transmission ────────────────────────────────────────────────────────

#[cfg(test)]
mod acute_transmission {
    use ce_core::{AgentId, Day, SimRng};
    use ce_network::ContactGraph;

    use super::*;
    use crate::{AcuteParams, transmit_acute};

    #[test]
    fn certain_edge_exposure() {
        let mut agents = people(2);
        agents.acute_mut(AgentId(1)).seed_infectious(Day(0)).unwrap();
        let mut graph = ContactGraph::new(2);
        graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
        let params = AcuteParams { edge_beta: 1.0, ..quiet_acute() };

        let n = transmit_acute(&mut agents, &graph, Day(3), &params, &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(agents.acute(AgentId(0)).infection_day(), Some(Day(3)));
        assert!(agents.acute(AgentId(0)).ever_infected());
    }

    #[test]
    fn exposed_agents_do_not_transmit() {
        let mut agents = people(2);
        agents.acute_mut(AgentId(1)).expose(Day(0)).unwrap();
        let mut graph = ContactGraph::new(2);
        graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
        let params = AcuteParams { edge_beta: 1.0, community_beta: 1.0, community_contacts: 5, ..quiet_acute() };

        let n = transmit_acute(&mut agents, &graph, Day(1), &params, &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn chronic_infection_raises_risk() {
        // 0.5 × 2 = 1: the chronically infected partner is always exposed.
        let params = AcuteParams { edge_beta: 0.5, hiv_multiplier: 2.0, ..quiet_acute() };
        for seed in 0..20 {
            let mut agents = people(2);
            agents.acute_mut(AgentId(1)).seed_infectious(Day(0)).unwrap();
            agents.chronic_mut(AgentId(0)).infect(Day(0)).unwrap();
            let mut graph = ContactGraph::new(2);
            graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
            let n = transmit_acute(&mut agents, &graph, Day(1), &params, &mut SimRng::new(seed)).unwrap();
            assert_eq!(n, 1);
        }
    }

    #[test]
    fn one_exposure_per_agent_per_day() {
        // Agent 0 is partnered with two infectious agents and also reachable
        // through community mixing.
        let mut agents = people(3);
        agents.acute_mut(AgentId(1)).seed_infectious(Day(0)).unwrap();
        agents.acute_mut(AgentId(2)).seed_infectious(Day(0)).unwrap();
        let mut graph = ContactGraph::new(3);
        graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
        graph.add_partnership(AgentId(0), AgentId(2), Day(0)).unwrap();
        let params = AcuteParams {
            edge_beta: 1.0,
            community_beta: 1.0,
            community_contacts: 5,
            ..quiet_acute()
        };

        let n = transmit_acute(&mut agents, &graph, Day(1), &params, &mut SimRng::new(9)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(agents.acute_census().exposed, 1);
        assert_eq!(agents.acute_ever_infected(), 3);
    }

    #[test]
    fn community_contacts_cap_exposures() {
        let mut agents = people(10);
        agents.acute_mut(AgentId(0)).seed_infectious(Day(0)).unwrap();
        let graph = ContactGraph::new(10);
        let params = AcuteParams { community_beta: 1.0, community_contacts: 5, ..quiet_acute() };

        let n = transmit_acute(&mut agents, &graph, Day(1), &params, &mut SimRng::new(11)).unwrap();
        assert_eq!(n, 5);
        assert_eq!(agents.acute_census().exposed, 5);
    }

    #[test]
    fn community_pool_smaller_than_contacts() {
        let mut agents = people(4);
        agents.acute_mut(AgentId(2)).seed_infectious(Day(0)).unwrap();
        let graph = ContactGraph::new(4);
        let params = AcuteParams { community_beta: 1.0, community_contacts: 50, ..quiet_acute() };

        let n = transmit_acute(&mut agents, &graph, Day(1), &params, &mut SimRng::new(12)).unwrap();
        assert_eq!(n, 3);
        assert!(agents.acute(AgentId(2)).is_infectious());
    }

    #[test]
    fn no_infectious_means_no_draws() {
        let mut agents = people(5);
        let graph = ContactGraph::new(5);
        let params = AcuteParams { community_beta: 1.0, community_contacts: 5, ..quiet_acute() };
        let n = transmit_acute(&mut agents, &graph, Day(0), &params, &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 0);
    }
}

// ── Chronic ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod chronic {
    use ce_agent::ChronicStatus;
    use ce_core::{AgentId, Day, SimRng};
    use ce_network::ContactGraph;

    use super::*;
    use crate::{ChronicParams, progress_chronic, transmit_chronic};

    fn params(mtf: f64, ftm: f64) -> ChronicParams {
        ChronicParams { male_to_female: mtf, female_to_male: ftm, ..Default::default() }
    }

    #[test]
    fn direction_uses_infector_gender() {
        // Agent 1 (female) infected, agent 0 (male) susceptible.
        let mut agents = people(2);
        agents.chronic_mut(AgentId(1)).infect(Day(0)).unwrap();
        let mut graph = ContactGraph::new(2);
        graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();

        let n = transmit_chronic(&mut agents, &graph, Day(1), &params(1.0, 0.0), &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 0);
        let n = transmit_chronic(&mut agents, &graph, Day(1), &params(0.0, 1.0), &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 1);
        assert_eq!(agents.chronic(AgentId(0)).infection_day(), Some(Day(1)));
    }

    #[test]
    fn acute_coinfection_doubles_risk() {
        for seed in 0..20 {
            let mut agents = people(2);
            agents.chronic_mut(AgentId(0)).infect(Day(0)).unwrap();
            agents.acute_mut(AgentId(1)).seed_infectious(Day(0)).unwrap();
            let mut graph = ContactGraph::new(2);
            graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
            let n = transmit_chronic(&mut agents, &graph, Day(1), &params(0.5, 0.0), &mut SimRng::new(seed))
                .unwrap();
            assert_eq!(n, 1);
        }
    }

    #[test]
    fn infections_apply_within_the_pass() {
        // 0 (M, infected) - 1 (F) - 2 (M): the pair (0, 1) is visited first,
        // so 1 is already infected when (1, 2) is evaluated.
        let mut agents = people(3);
        agents.chronic_mut(AgentId(0)).infect(Day(0)).unwrap();
        let mut graph = ContactGraph::new(3);
        graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
        graph.add_partnership(AgentId(1), AgentId(2), Day(0)).unwrap();

        let n = transmit_chronic(&mut agents, &graph, Day(2), &params(1.0, 1.0), &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 2);
        assert_eq!(agents.chronic_census().infected, 3);
    }

    #[test]
    fn recovered_agents_do_not_transmit() {
        let mut agents = people(2);
        agents.chronic_mut(AgentId(0)).infect(Day(0)).unwrap();
        agents.chronic_mut(AgentId(0)).recover(Day(1)).unwrap();
        let mut graph = ContactGraph::new(2);
        graph.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();

        let n = transmit_chronic(&mut agents, &graph, Day(2), &params(1.0, 1.0), &mut SimRng::new(0)).unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn recovery_after_threshold() {
        let mut agents = people(2);
        agents.chronic_mut(AgentId(0)).infect(Day(0)).unwrap();
        agents.chronic_mut(AgentId(1)).infect(Day(10)).unwrap();
        let p = ChronicParams::default();

        assert_eq!(progress_chronic(&mut agents, Day(179), &p).unwrap(), 0);
        assert_eq!(progress_chronic(&mut agents, Day(180), &p).unwrap(), 1);
        assert_eq!(agents.chronic(AgentId(0)).status(), ChronicStatus::Recovered);
        assert_eq!(agents.chronic(AgentId(0)).recovery_day(), Some(Day(180)));
        assert!(agents.chronic(AgentId(0)).ever_infected());
        assert!(agents.chronic(AgentId(1)).is_infected());

        assert_eq!(progress_chronic(&mut agents, Day(190), &p).unwrap(), 1);
        assert_eq!(agents.chronic_census().recovered, 2);
    }
}

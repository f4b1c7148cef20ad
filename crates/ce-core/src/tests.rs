//! Unit tests for ce-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(AgentId(0) < AgentId(1));
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{Day, SimClock};

    #[test]
    fn day_arithmetic() {
        let d = Day(10);
        assert_eq!(d.offset(5), Day(15));
        assert_eq!(d + 3, Day(13));
        assert_eq!(Day(15).since(d), 5);
        // Saturates instead of underflowing.
        assert_eq!(d.since(Day(15)), 0);
    }

    #[test]
    fn clock_runs_to_horizon() {
        let mut clock = SimClock::new(3);
        assert_eq!(clock.remaining(), 3);
        while !clock.is_finished() {
            clock.advance();
        }
        assert_eq!(clock.current_day, Day(3));
        assert_eq!(clock.remaining(), 0);
    }

    #[test]
    fn zero_day_clock_is_finished() {
        assert!(SimClock::new(0).is_finished());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u64> = (0..16).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn gen_bool_clamps() {
        let mut rng = SimRng::new(1);
        assert!(rng.gen_bool(1.5));
        assert!(!rng.gen_bool(-0.5));
    }

    #[test]
    fn choose_weighted_skips_zero_weights() {
        let mut rng = SimRng::new(3);
        for _ in 0..100 {
            assert_eq!(rng.choose_weighted(&[0.0, 1.0, 0.0]), Some(1));
        }
    }

    #[test]
    fn choose_weighted_degenerate_is_none() {
        let mut rng = SimRng::new(3);
        assert_eq!(rng.choose_weighted(&[]), None);
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    }

    #[test]
    fn sample_indices_are_distinct_and_capped() {
        let mut rng = SimRng::new(11);
        let mut picks = rng.sample_indices(5, 10);
        assert_eq!(picks.len(), 5);
        picks.sort_unstable();
        assert_eq!(picks, vec![0, 1, 2, 3, 4]);
        assert!(rng.sample_indices(0, 3).is_empty());
    }

    #[test]
    fn normal_rejects_negative_sd() {
        let mut rng = SimRng::new(0);
        assert!(rng.normal(180.0, -1.0).is_err());
        assert!(rng.normal(180.0, f64::NAN).is_err());
        assert!(rng.normal(180.0, f64::INFINITY).is_err());
        assert!(rng.normal(180.0, 30.0).unwrap().is_finite());
        assert_eq!(rng.normal(42.0, 0.0).unwrap(), 42.0);
    }
}

#[cfg(test)]
mod demographics {
    use crate::{Demographics, Gender, error::check_probability};

    #[test]
    fn gender_parse_and_display() {
        assert_eq!("M".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" F ".parse::<Gender>().unwrap(), Gender::Female);
        assert!("X".parse::<Gender>().is_err());
        assert_eq!(Gender::Female.to_string(), "F");
        assert_eq!(Gender::Male.opposite(), Gender::Female);
    }

    #[test]
    fn age_gap_is_symmetric() {
        let a = Demographics::new(20, Gender::Male, true);
        let b = Demographics::new(31, Gender::Female, false);
        assert_eq!(a.age_gap(&b), 11);
        assert_eq!(b.age_gap(&a), 11);
        assert!(!a.shares_ethnicity(&b));
    }

    #[test]
    fn probability_check() {
        assert!(check_probability("p", 0.0).is_ok());
        assert!(check_probability("p", 1.0).is_ok());
        assert!(check_probability("p", -0.1).is_err());
        assert!(check_probability("p", f64::NAN).is_err());
    }
}

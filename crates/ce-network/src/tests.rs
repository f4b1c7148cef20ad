//! Unit tests for ce-network.

#[cfg(test)]
mod graph {
    use ce_core::{AgentId, Day};

    use crate::{ContactGraph, NetworkError, PairKey};

    #[test]
    fn empty_graph() {
        let g = ContactGraph::new(4);
        assert_eq!(g.agent_count(), 4);
        assert_eq!(g.partnership_count(), 0);
        assert!(g.is_empty());
        assert_eq!(g.max_degree(), 0);
    }

    #[test]
    fn add_is_undirected() {
        let mut g = ContactGraph::new(3);
        g.add_partnership(AgentId(2), AgentId(0), Day(5)).unwrap();
        assert!(g.has_partnership(AgentId(0), AgentId(2)));
        assert!(g.has_partnership(AgentId(2), AgentId(0)));
        assert_eq!(g.degree(AgentId(0)), 1);
        assert_eq!(g.degree(AgentId(2)), 1);
        assert_eq!(g.degree(AgentId(1)), 0);

        let p = g.partnerships().next().unwrap();
        assert_eq!((p.a, p.b, p.formed_day), (AgentId(0), AgentId(2), Day(5)));
    }

    #[test]
    fn self_loop_rejected() {
        let mut g = ContactGraph::new(2);
        assert!(matches!(
            g.add_partnership(AgentId(1), AgentId(1), Day(0)),
            Err(NetworkError::SelfLoop(AgentId(1)))
        ));
        assert!(g.is_empty());
    }

    #[test]
    fn duplicate_rejected_either_direction() {
        let mut g = ContactGraph::new(2);
        g.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
        assert!(matches!(
            g.add_partnership(AgentId(1), AgentId(0), Day(1)),
            Err(NetworkError::DuplicatePartnership { .. })
        ));
        assert_eq!(g.partnership_count(), 1);
        // Original formation day is kept.
        assert_eq!(g.partnerships().next().unwrap().formed_day, Day(0));
    }

    #[test]
    fn unknown_agent_rejected() {
        let mut g = ContactGraph::new(2);
        assert!(matches!(
            g.add_partnership(AgentId(0), AgentId(7), Day(0)),
            Err(NetworkError::UnknownAgent(AgentId(7)))
        ));
    }

    #[test]
    fn remove_restores_degrees() {
        let mut g = ContactGraph::new(3);
        g.add_partnership(AgentId(0), AgentId(1), Day(0)).unwrap();
        g.add_partnership(AgentId(1), AgentId(2), Day(1)).unwrap();
        assert_eq!(g.max_degree(), 2);
        assert_eq!(g.partners(AgentId(1)), vec![AgentId(0), AgentId(2)]);

        let removed = g.remove_partnership(AgentId(1), AgentId(0)).unwrap();
        assert_eq!(removed.formed_day, Day(0));
        assert_eq!(g.degree(AgentId(0)), 0);
        assert_eq!(g.degree(AgentId(1)), 1);
        assert!(matches!(
            g.remove_partnership(AgentId(0), AgentId(1)),
            Err(NetworkError::MissingPartnership { .. })
        ));
    }

    #[test]
    fn iteration_is_sorted() {
        let mut g = ContactGraph::new(6);
        g.add_partnership(AgentId(4), AgentId(5), Day(0)).unwrap();
        g.add_partnership(AgentId(3), AgentId(0), Day(0)).unwrap();
        g.add_partnership(AgentId(2), AgentId(1), Day(0)).unwrap();
        let keys = g.pair_keys();
        assert_eq!(
            keys,
            vec![
                PairKey { lo: AgentId(0), hi: AgentId(3) },
                PairKey { lo: AgentId(1), hi: AgentId(2) },
                PairKey { lo: AgentId(4), hi: AgentId(5) },
            ]
        );
    }

    #[test]
    fn pair_key_normalises() {
        assert_eq!(PairKey::new(AgentId(3), AgentId(1)), PairKey::new(AgentId(1), AgentId(3)));
        assert_eq!(PairKey::new(AgentId(2), AgentId(2)), None);
    }
}

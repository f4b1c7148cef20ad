//! Contact-graph representation.
//!
//! # Data layout
//!
//! Two structures are kept in lock-step:
//!
//! - `adjacency[agent]` — an `FxHashSet` of current partners, giving O(1)
//!   degree and membership checks for capacity filtering;
//! - `partnerships` — a `BTreeMap` keyed by the normalised pair, giving a
//!   deterministic iteration order for the transmission and breakup passes.
//!
//! The graph never allows self-loops or parallel edges.  Degree caps are not
//! a graph concern; they are enforced by the formation step.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;

use ce_core::{AgentId, Day};

use crate::{NetworkError, NetworkResult};

// ── PairKey ───────────────────────────────────────────────────────────────────

/// An unordered agent pair, stored with `lo < hi`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PairKey {
    pub lo: AgentId,
    pub hi: AgentId,
}

impl PairKey {
    /// Normalise `(a, b)`.  Returns `None` for a self-pair.
    pub fn new(a: AgentId, b: AgentId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { lo: a, hi: b }),
            std::cmp::Ordering::Greater => Some(Self { lo: b, hi: a }),
            std::cmp::Ordering::Equal => None,
        }
    }
}

// ── Partnership ───────────────────────────────────────────────────────────────

/// One active partnership (an undirected edge).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partnership {
    pub a:          AgentId,
    pub b:          AgentId,
    pub formed_day: Day,
}

// ── ContactGraph ──────────────────────────────────────────────────────────────

/// Undirected, dynamically mutated graph over a fixed set of agents.
///
/// Owned by the simulation and passed by reference to each daily stage.
#[derive(Clone, Debug)]
pub struct ContactGraph {
    adjacency:    Vec<FxHashSet<AgentId>>,
    partnerships: BTreeMap<PairKey, Day>,
}

impl ContactGraph {
    /// An edgeless graph over `agent_count` agents.
    pub fn new(agent_count: usize) -> Self {
        Self {
            adjacency:    vec![FxHashSet::default(); agent_count],
            partnerships: BTreeMap::new(),
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn agent_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn partnership_count(&self) -> usize {
        self.partnerships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partnerships.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current number of partners of `agent`.
    ///
    /// # Panics
    /// Panics if `agent` is outside the graph.
    #[inline]
    pub fn degree(&self, agent: AgentId) -> usize {
        self.adjacency[agent.index()].len()
    }

    pub fn max_degree(&self) -> usize {
        self.adjacency.iter().map(|s| s.len()).max().unwrap_or(0)
    }

    pub fn has_partnership(&self, a: AgentId, b: AgentId) -> bool {
        PairKey::new(a, b).is_some_and(|k| self.partnerships.contains_key(&k))
    }

    /// Partners of `agent`, sorted ascending.
    pub fn partners(&self, agent: AgentId) -> Vec<AgentId> {
        let mut v: Vec<AgentId> = self.adjacency[agent.index()].iter().copied().collect();
        v.sort_unstable();
        v
    }

    /// All partnerships in ascending pair order.
    pub fn partnerships(&self) -> impl Iterator<Item = Partnership> + '_ {
        self.partnerships.iter().map(|(k, &formed_day)| Partnership {
            a: k.lo,
            b: k.hi,
            formed_day,
        })
    }

    /// Snapshot of every pair key, for passes that remove edges while
    /// iterating.
    pub fn pair_keys(&self) -> Vec<PairKey> {
        self.partnerships.keys().copied().collect()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add an edge between `a` and `b` stamped with `day`.
    ///
    /// Rejects unknown agents, self-loops and duplicates without touching
    /// the graph.
    pub fn add_partnership(&mut self, a: AgentId, b: AgentId, day: Day) -> NetworkResult<()> {
        self.check_agent(a)?;
        self.check_agent(b)?;
        let key = PairKey::new(a, b).ok_or(NetworkError::SelfLoop(a))?;
        if self.partnerships.contains_key(&key) {
            return Err(NetworkError::DuplicatePartnership { a: key.lo, b: key.hi });
        }
        self.partnerships.insert(key, day);
        self.adjacency[a.index()].insert(b);
        self.adjacency[b.index()].insert(a);
        Ok(())
    }

    /// Remove the edge between `a` and `b`, returning it.
    pub fn remove_partnership(&mut self, a: AgentId, b: AgentId) -> NetworkResult<Partnership> {
        self.check_agent(a)?;
        self.check_agent(b)?;
        let key = PairKey::new(a, b).ok_or(NetworkError::SelfLoop(a))?;
        let formed_day = self
            .partnerships
            .remove(&key)
            .ok_or(NetworkError::MissingPartnership { a: key.lo, b: key.hi })?;
        self.adjacency[a.index()].remove(&b);
        self.adjacency[b.index()].remove(&a);
        Ok(Partnership { a: key.lo, b: key.hi, formed_day })
    }

    fn check_agent(&self, agent: AgentId) -> NetworkResult<()> {
        if agent.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(NetworkError::UnknownAgent(agent))
        }
    }
}

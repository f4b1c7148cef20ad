//! Daily partnership dissolution.

use log::trace;

use ce_core::{Day, SimRng};
use ce_network::ContactGraph;

use crate::{PartnershipConfig, PartnershipResult};

/// Dissolve each existing partnership independently with
/// `breakup_probability`; returns how many were dissolved.
///
/// Partnerships are visited in ascending pair order over a snapshot taken
/// before the pass, so removals never disturb the iteration.
pub fn dissolve_partnerships(
    graph:  &mut ContactGraph,
    config: &PartnershipConfig,
    day:    Day,
    rng:    &mut SimRng,
) -> PartnershipResult<usize> {
    let mut dissolved = 0;
    for key in graph.pair_keys() {
        if rng.gen_bool(config.breakup_probability) {
            let p = graph.remove_partnership(key.lo, key.hi)?;
            dissolved += 1;
            trace!("{day}: partnership {} - {} (formed {}) dissolved", p.a, p.b, p.formed_day);
        }
    }
    Ok(dissolved)
}

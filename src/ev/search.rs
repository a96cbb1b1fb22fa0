// src/ev/search.rs
use super::{EvModel, GroupEv};
use crate::catalog::Card;
use anyhow::Result;
use itertools::Itertools;
use rayon::prelude::*;
use tracing::{debug, info};

/// One qualifying group from a combination search.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub areas: Vec<String>,
    pub ev: GroupEv,
}

/// Extend each initial group with every `extend_by`-combination of the rest
/// of `pool` and collect the groups whose stack-scarab EV beats `threshold`.
///
/// Returns the hits sorted by stack-scarab EV, best first, together with the
/// best stack-scarab EV seen anywhere (reported or not). Evaluation is
/// parallelised across combinations; the result set does not depend on
/// worker scheduling.
pub fn search_groups(
    cards: &[Card],
    pool: &[&str],
    initial_groups: &[Vec<&str>],
    extend_by: usize,
    threshold: f64,
) -> Result<(Vec<SearchHit>, f64)> {
    let model = EvModel::new(cards)?;
    let mut hits: Vec<SearchHit> = Vec::new();
    let mut best = 0.0f64;

    for group in initial_groups {
        let remaining: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|m| !group.contains(m))
            .collect();
        debug!(
            base = ?group,
            pool = remaining.len(),
            extend_by,
            "searching extensions"
        );

        let evaluated: Vec<(Vec<&str>, GroupEv)> = remaining
            .iter()
            .copied()
            .combinations(extend_by)
            .par_bridge()
            .map(|extension| {
                let mut areas = group.clone();
                areas.extend(extension);
                let ev = model.group_ev(&areas);
                (areas, ev)
            })
            .collect();

        for (areas, ev) in evaluated {
            if ev.stack_scarab > best {
                best = ev.stack_scarab;
            }
            if ev.stack_scarab > threshold {
                hits.push(SearchHit {
                    areas: areas.iter().map(|a| a.to_string()).collect(),
                    ev,
                });
            }
        }
    }

    // tie-break on area names so scheduling never changes the output order
    hits.sort_by(|a, b| {
        b.ev.stack_scarab
            .total_cmp(&a.ev.stack_scarab)
            .then_with(|| a.areas.cmp(&b.areas))
    });
    info!(hits = hits.len(), best, "combination search complete");
    Ok((hits, best))
}

// src/ev/mod.rs
pub mod filters;
pub mod maps;
pub mod search;

use crate::catalog::Card;
use anyhow::{Context, Result};

/// Area level the EV model assumes maps are run at.
pub const AREA_LEVEL: u32 = 83;
/// Combined weight of the non-card portion of the drop pool.
pub const GLOBAL_DROP_RATE: f64 = 7954753.0;
/// Measured real card rate: 47 cards per 100 maps.
pub const REAL_CARD_RATE: (f64, u32) = (47.0, 100);
/// Pinned drop-pool-items figure that per-map drop rates are normalized to.
pub const PINNED_DPI: f64 = 75231.43071987167;
/// Card whose weight anchors the drop-pool-items estimate.
pub const BASELINE_CARD: &str = "The Union";

/// True when `card` can drop in any of `areas` at [`AREA_LEVEL`]. Area names
/// are the bare map names; the catalog stores them prefixed with `MapWorlds`.
pub fn is_card_in_area(card: &Card, areas: &[&str]) -> bool {
    let Some(drop) = &card.drop else {
        return false;
    };
    if drop.max_level < Some(AREA_LEVEL) {
        return false;
    }
    areas.iter().any(|area| {
        let qualified = format!("MapWorlds{}", area);
        drop.areas.iter().any(|a| a.eq_ignore_ascii_case(&qualified))
    })
}

/// EV contributed by `drops` copies of a card in one map. With a stack
/// scarab, one drop in five becomes a full stack.
pub fn card_ev(stack: f64, drops: f64, price: f64, use_stack_scarab: bool) -> f64 {
    if use_stack_scarab {
        drops * 0.2 * stack * price + drops * 0.8 * price
    } else {
        drops * price
    }
}

/// Raw and stack-scarab EV per map for a group of areas.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupEv {
    pub raw: f64,
    pub stack_scarab: f64,
}

/// Catalog-wide quantities shared by every group evaluation: per-card EV
/// eligibility and the baseline card's weight.
#[derive(Debug)]
pub struct EvModel<'a> {
    cards: &'a [Card],
    eligible: Vec<bool>,
    baseline_weight: f64,
}

impl<'a> EvModel<'a> {
    pub fn new(cards: &'a [Card]) -> Result<Self> {
        let baseline_weight = cards
            .iter()
            .find(|c| c.name == BASELINE_CARD)
            .and_then(|c| c.weight)
            .with_context(|| format!("baseline card {:?} missing from catalog", BASELINE_CARD))?;
        let eligible = cards.iter().map(filters::is_ev_eligible).collect();
        Ok(Self {
            cards,
            eligible,
            baseline_weight,
        })
    }

    /// Raw and stack-scarab EV per map for the given area group.
    ///
    /// The total weight of every card droppable in the group (eligible or
    /// not) dilutes the pool; only eligible cards contribute EV.
    pub fn group_ev(&self, areas: &[&str]) -> GroupEv {
        let map_weight: f64 = self
            .cards
            .iter()
            .filter(|c| is_card_in_area(c, areas))
            .map(|c| c.weight.unwrap_or(0.0))
            .sum();
        let total_weight = map_weight + GLOBAL_DROP_RATE;
        let drop_pool_items =
            total_weight / self.baseline_weight * REAL_CARD_RATE.1 as f64;
        let dpi_multiplier = PINNED_DPI / drop_pool_items;

        let mut ev = GroupEv::default();
        for (card, &eligible) in self.cards.iter().zip(&self.eligible) {
            if !eligible || !is_card_in_area(card, areas) {
                continue;
            }
            let drop_rate = card.weight.unwrap_or(0.0) / total_weight * drop_pool_items;
            let drops_per_map = drop_rate * dpi_multiplier;
            ev.raw += card_ev(card.stack, drops_per_map, card.price, false);
            ev.stack_scarab += card_ev(card.stack, drops_per_map, card.price, true);
        }
        ev
    }
}

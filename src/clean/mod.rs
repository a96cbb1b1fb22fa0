// src/clean/mod.rs
use crate::catalog::overrides::{find_override, PriceOverride};
use crate::catalog::Card;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info};

/// Prices below this floor are zeroed when no override applies. The EV card
/// filter uses the same cutoff.
pub const PRICE_FLOOR: f64 = 6.0;

/// Apply the override-or-floor pricing rule to every card, in place.
///
/// For each card, in catalog order: the first matching override sets the
/// price; otherwise a price under [`PRICE_FLOOR`] is zeroed; otherwise the
/// price stands. Only `price` is touched and the order never changes.
pub fn clean_prices(cards: &mut [Card], overrides: &[PriceOverride]) {
    let mut overridden = 0usize;
    let mut zeroed = 0usize;
    for card in cards.iter_mut() {
        if let Some(entry) = find_override(overrides, &card.name) {
            card.price = entry.card_value;
            overridden += 1;
        } else if card.price < PRICE_FLOOR {
            card.price = 0.0;
            zeroed += 1;
        }
    }
    debug!(overridden, zeroed, total = cards.len(), "cleaned card prices");
}

/// Render the catalog as the `export const cards = <json>` artifact.
///
/// The wrapper is kept bit-for-bit for the downstream consumer, which
/// re-imports the artifact as source.
pub fn render_export(cards: &[Card]) -> Result<String> {
    let body = serde_json::to_string(cards).context("serializing card catalog")?;
    Ok(format!("export const cards = {}", body))
}

/// Write the artifact to `path`, replacing any previous content. A write
/// failure is the pipeline's only error path and is surfaced as-is.
pub async fn write_export(cards: &[Card], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let artifact = render_export(cards)?;
    tokio::fs::write(path, artifact.as_bytes())
        .await
        .with_context(|| format!("writing price artifact {}", path.display()))?;
    info!(cards = cards.len(), path = %path.display(), "wrote price artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::overrides::PRICE_OVERRIDES;
    use anyhow::Result;
    use serde_json::Map;
    use tempfile::tempdir;

    fn card(name: &str, price: f64) -> Card {
        Card {
            name: name.to_string(),
            drop: None,
            price,
            weight: None,
            stack: 1.0,
            extra: Map::new(),
        }
    }

    fn over(name: &str, value: f64) -> PriceOverride {
        PriceOverride {
            card_name: name.to_string(),
            card_value: value,
        }
    }

    #[test]
    fn test_override_beats_original_price() {
        // a zero-priced card picks up its manual correction
        let mut cards = vec![card("Humility", 0.0)];
        clean_prices(&mut cards, &[over("Humility", 0.55)]);
        assert_eq!(cards[0].price, 0.55);

        // and an override also beats a price above the floor
        let mut cards = vec![card("Humility", 9.0)];
        clean_prices(&mut cards, &[over("Humility", 0.55)]);
        assert_eq!(cards[0].price, 0.55);
    }

    #[test]
    fn test_unmatched_card_below_floor_is_zeroed() {
        let mut cards = vec![card("Generic Filler", 3.0)];
        clean_prices(&mut cards, &PRICE_OVERRIDES);
        assert_eq!(cards[0].price, 0.0);
    }

    #[test]
    fn test_unmatched_card_at_or_above_floor_is_untouched() {
        let mut cards = vec![card("Big Card", 10.0), card("Edge Card", 6.0)];
        clean_prices(&mut cards, &PRICE_OVERRIDES);
        assert_eq!(cards[0].price, 10.0);
        assert_eq!(cards[1].price, 6.0);
    }

    #[test]
    fn test_duplicate_override_names_use_first_entry() {
        let overrides = vec![over("Vinia's Token", 1.0), over("Vinia's Token", 2.0)];
        let mut cards = vec![card("Vinia's Token", 0.3)];
        clean_prices(&mut cards, &overrides);
        assert_eq!(cards[0].price, 1.0);
    }

    #[test]
    fn test_order_and_length_preserved() {
        let mut cards = vec![
            card("Humility", 0.0),
            card("Generic Filler", 3.0),
            card("Big Card", 10.0),
        ];
        clean_prices(&mut cards, &PRICE_OVERRIDES);
        let names: Vec<_> = cards.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Humility", "Generic Filler", "Big Card"]);
    }

    #[test]
    fn test_clean_is_idempotent() {
        let mut once = vec![card("Humility", 0.0), card("Filler", 3.0), card("Big", 10.0)];
        clean_prices(&mut once, &PRICE_OVERRIDES);
        let mut twice = once.clone();
        clean_prices(&mut twice, &PRICE_OVERRIDES);
        let a: Vec<f64> = once.iter().map(|c| c.price).collect();
        let b: Vec<f64> = twice.iter().map(|c| c.price).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_empty_catalog() -> Result<()> {
        assert_eq!(render_export(&[])?, "export const cards = []");
        Ok(())
    }

    #[test]
    fn test_render_is_a_single_export_statement() -> Result<()> {
        let cards = vec![card("Big Card", 10.0)];
        let artifact = render_export(&cards)?;
        assert!(artifact.starts_with("export const cards = ["));
        assert!(artifact.ends_with(']'));
        assert!(artifact.contains(r#""name":"Big Card""#));
        Ok(())
    }

    #[tokio::test]
    async fn test_write_export_overwrites_and_is_byte_identical() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("prices.txt");

        // stale content must be fully replaced
        std::fs::write(&path, "old garbage that is much longer than the artifact")?;

        let mut cards = vec![card("Humility", 0.0), card("Big Card", 10.0)];
        clean_prices(&mut cards, &PRICE_OVERRIDES);

        write_export(&cards, &path).await?;
        let first = std::fs::read(&path)?;
        assert_eq!(first, render_export(&cards)?.into_bytes());

        write_export(&cards, &path).await?;
        let second = std::fs::read(&path)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[tokio::test]
    async fn test_write_export_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("prices.txt");
        let err = write_export(&[], &path).await.unwrap_err();
        assert!(err.to_string().contains("writing price artifact"));
    }
}

// src/catalog/mod.rs
pub mod overrides;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, path::Path};
use tracing::debug;

/// One divination card record from the catalog.
///
/// The pipeline reads `name`, `drop`, `price`, `weight` and `stack`; any other
/// field present in the input object lands in `extra` and is re-serialized
/// untouched, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop: Option<DropInfo>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    pub stack: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Where (and up to which area level) a card can drop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DropInfo {
    /// Cards with no explicit cap drop everywhere, so absence means level 100.
    #[serde(default = "default_max_level")]
    pub max_level: Option<u32>,
    pub areas: Vec<String>,
}

fn default_max_level() -> Option<u32> {
    Some(100)
}

/// Load the card catalog from a JSON array file, preserving input order.
pub fn load_cards(path: impl AsRef<Path>) -> Result<Vec<Card>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read card catalog {}", path.display()))?;
    let cards: Vec<Card> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse card catalog {}", path.display()))?;
    debug!(count = cards.len(), path = %path.display(), "loaded card catalog");
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_cards_preserves_order_and_extras() -> Result<()> {
        let content = r#"[
            {"name":"The Union","drop":{"areas":["MapWorldsShrine"]},"price":3.0,"weight":121331.0,"stack":1.0,"art":"union.png"},
            {"name":"The Hunger","drop":{"max_level":75,"areas":[]},"price":12.0,"weight":50.0,"stack":1.0}
        ]"#;
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(content.as_bytes())?;

        let cards = load_cards(tmp.path())?;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "The Union");
        assert_eq!(cards[1].name, "The Hunger");

        // absent max_level defaults to 100; explicit values survive
        assert_eq!(cards[0].drop.as_ref().unwrap().max_level, Some(100));
        assert_eq!(cards[1].drop.as_ref().unwrap().max_level, Some(75));

        // unknown fields pass through the model untouched
        assert_eq!(cards[0].extra.get("art").unwrap(), "union.png");
        let json = serde_json::to_string(&cards[0])?;
        assert!(json.contains(r#""art":"union.png""#));
        Ok(())
    }

    #[test]
    fn test_load_cards_missing_file_is_an_error() {
        let err = load_cards("does/not/exist.json").unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn test_load_cards_bad_json_is_an_error() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"{not json")?;
        let err = load_cards(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
        Ok(())
    }
}

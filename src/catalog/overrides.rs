// src/catalog/overrides.rs
use once_cell::sync::Lazy;

/// A manual price correction for a single card name.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOverride {
    pub card_name: String,
    pub card_value: f64,
}

/// Manual corrections in precedence order. Names repeat ("Vinia's Token",
/// "Emperor of Purity"); lookup is first-match, so the later entries for those
/// names never apply. Kept verbatim rather than deduplicated.
static OVERRIDE_TABLE: &[(&str, f64)] = &[
    ("Humility", 0.55),
    ("Vanity", 0.55),
    ("The Chains that Bind", 0.83),
    ("Loyalty", 0.2),
    ("The Porcupine", 0.83),
    ("Imperial Legacy", 0.25),
    ("The Celestial Justicar", 0.83),
    ("The Dapper Prodigy", 0.83),
    ("Emperor of Purity", 0.71),
    ("Vinia's Token", 1.0),
    ("Acclimatisation", 1.0),
    ("The Primordial", 4.0),
    ("Three Faces in the Dark", 0.42),
    ("The Coming Storm", 4.0),
    ("Coveted Possession", 0.55),
    ("The Union", 3.0),
    ("Lucky Connections", 0.71),
    ("The Innocent", 4.0),
    ("Vinia's Token", 2.0),
    ("The Wrath", 1.16),
    ("No Traces", 2.22),
    ("Cursed Words", 2.0),
    ("Lingering Remnants", 2.0),
    ("Bowyer's Dream", 0.8),
    ("Draped in Dreams", 1.0),
    ("Emperor of Purity", 0.7),
    ("Immortal Resolve", 0.83),
    ("The Dark Mage", 0.83),
    ("The Warlord", 0.83),
    ("The Hunger", 12.0),
];

/// The built-in override list the cleanup binary runs with.
pub static PRICE_OVERRIDES: Lazy<Vec<PriceOverride>> = Lazy::new(|| {
    OVERRIDE_TABLE
        .iter()
        .map(|&(name, value)| PriceOverride {
            card_name: name.to_string(),
            card_value: value,
        })
        .collect()
});

/// First override whose name matches `name` exactly (case-sensitive), if any.
pub fn find_override<'a>(
    overrides: &'a [PriceOverride],
    name: &str,
) -> Option<&'a PriceOverride> {
    overrides.iter().find(|o| o.card_name == name)
}

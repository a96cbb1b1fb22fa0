// src/ev/filters.rs
use crate::catalog::Card;
use crate::clean::PRICE_FLOOR;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Cards need a strictly positive weight to count toward EV.
pub const WEIGHT_FLOOR: f64 = 0.0;

/// Cards excluded from EV no matter their listed price. Mostly bulk cards
/// whose listed price never clears in practice.
static FORCE_REMOVE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "The Easy Stroll",
        "The Lunaris Priestess",
        "The Explorer",
        "The Mountain",
        "Boundless Realms",
        "Azure Rage",
        "Left to Fate",
        "Might is Right",
        "Scholar of the Seas",
        "Grave Knowledge",
        "The Wolverine",
        "Blind Venture",
        "Hunter's Resolve",
        "Alivia's Grace",
        "The Admirer",
        "The Surgeon",
        "The Wolf's Shadow",
        "Shard of Fate",
        "Jack in the Box",
        "Last Hope",
        "Mitts",
        "The Battle Born",
        "The Sun",
        "The Demoness",
        "The Sigil",
        "The Twins",
        "The Inoculated",
        "The Army of Blood",
        "The Visionary",
        "The Gladiator",
        "Gemcutter's Promise",
        "The Web",
        "The Sword King's Salute",
        "Boon of Justice",
        "The Penitent",
        "The Warden",
        "The Cache",
        "Lysah's Respite",
        "The Fathomless Depths",
        "The Harvester",
        "The Fox",
        "Volatile Power",
        "The Endurance",
        "The Wolf",
        "Time-Lost Relic",
        "The Rite of Elements",
        "Gift of the Gemling Queen",
        "The Standoff",
        "Prosperity",
        "Heterochromia",
        "The Insatiable",
        "The Incantation",
        "The Betrayal",
        "The Pack Leader",
        "The Oath",
        "Vile Power",
        "The Surveyor",
        "Thunderous Skies",
        "The Tower",
        "The Stormcaller",
        "The Opulent",
        "The Blazing Fire",
        "The Journalist",
        "The Jeweller's Boon",
        "The Survivalist",
        "Glimmer of Hope",
        "Destined to Crumble",
        "The Scholar",
        "Thirst for Knowledge",
        "Rain of Chaos",
        "Emperor's Luck",
        "Loyalty",
        "A Sea of Blue",
        "The Lover",
        "The King's Blade",
        "The Catalyst",
        "Lantador's Lost Love",
        "The Scarred Meadow",
        "Rats",
        "The Witch",
        "Three Voices",
    ]
    .into_iter()
    .collect()
});

/// Cards kept in the EV pool even when the price floor would drop them.
/// These are the override-priced cards that do sell below the floor.
static FORCE_SHOW: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Acclimatisation",
        "The Primordial",
        "Three Faces in the Dark",
        "The Coming Storm",
        "The Porcupine",
        "Coveted Possession",
        "The Chains that Bind",
        "The Union",
        "Lucky Connections",
        "The Innocent",
        "Vinia's Token",
        "The Wrath",
        "No Traces",
        "Cursed Words",
        "Lingering Remnants",
        "Bowyer's Dream",
        "Draped in Dreams",
        "Emperor of Purity",
        "Immortal Resolve",
        "Imperial Legacy",
        "The Celestial Justicar",
        "The Dapper Prodigy",
        "The Dark Mage",
        "The Warlord",
    ]
    .into_iter()
    .collect()
});

/// EV eligibility: priced at or above the floor with a real weight and not
/// force-removed, or force-shown regardless.
pub fn is_ev_eligible(card: &Card) -> bool {
    if FORCE_SHOW.contains(card.name.as_str()) {
        return true;
    }
    card.price >= PRICE_FLOOR
        && card.weight.unwrap_or(0.0) > WEIGHT_FLOOR
        && !FORCE_REMOVE.contains(card.name.as_str())
}

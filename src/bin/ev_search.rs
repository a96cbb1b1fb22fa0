use anyhow::Result;
use divcards::{
    catalog::load_cards,
    ev::{maps::MAP_POOL, search},
};
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const CARDS_PATH: &str = "cards.json";

/// Maps to add on top of each base group.
const EXTEND_BY: usize = 3;

/// Only groups beating the current farming lockout are worth reporting.
const REPORT_THRESHOLD: f64 = 10569.0;

/// Base nine-map groups the search extends. The first four maps are the
/// manual picks; the rest vary the graveyard/shore slots.
fn base_groups() -> Vec<Vec<&'static str>> {
    let spine = ["DefiledCathedral", "Phantasmagoria", "Maze", "Cells"];
    let tails: &[&[&str]] = &[
        &["DrySea", "Cemetery", "Arsenal", "OvergrownShrine", "Shrine"],
        &["DesertSpring", "Cemetery", "Arsenal", "OvergrownShrine", "Shrine"],
        &["Dunes", "Cemetery", "Arsenal", "OvergrownShrine", "Shrine"],
        &["DrySea", "Graveyard", "Arsenal", "OvergrownShrine", "Shrine"],
        &["DesertSpring", "Graveyard", "Arsenal", "OvergrownShrine", "Shrine"],
        &["Dunes", "Graveyard", "Arsenal", "OvergrownShrine", "Shrine"],
        &["DrySea", "Wharf", "GraveTrough", "Arsenal", "Shrine"],
        &["DesertSpring", "Wharf", "GraveTrough", "Arsenal", "Shrine"],
        &["Dunes", "Wharf", "GraveTrough", "Arsenal", "Shrine"],
        &["DrySea", "Wharf", "Cemetery", "Arsenal", "Shrine"],
        &["DesertSpring", "Wharf", "Cemetery", "Arsenal", "Shrine"],
        &["Dunes", "Wharf", "Cemetery", "Arsenal", "Shrine"],
        &["DrySea", "MoonTemple", "Cemetery", "Arsenal", "Shrine"],
        &["DesertSpring", "MoonTemple", "Cemetery", "Arsenal", "Shrine"],
        &["Dunes", "MoonTemple", "Cemetery", "Arsenal", "Shrine"],
        &["DrySea", "Stagnation", "GraveTrough", "Arsenal", "Shrine"],
        &["DesertSpring", "Stagnation", "GraveTrough", "Arsenal", "Shrine"],
        &["Dunes", "Stagnation", "GraveTrough", "Arsenal", "Shrine"],
    ];
    tails
        .iter()
        .map(|tail| spine.iter().chain(tail.iter()).copied().collect())
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load the card catalog ────────────────────────────────────
    let cards = load_cards(CARDS_PATH)?;
    info!(count = cards.len(), "loaded {}", CARDS_PATH);

    // ─── 3) run the combination search on the blocking pool ──────────
    let start = Instant::now();
    let (hits, best) = tokio::task::spawn_blocking(move || {
        search::search_groups(&cards, MAP_POOL, &base_groups(), EXTEND_BY, REPORT_THRESHOLD)
    })
    .await??;

    // ─── 4) report ───────────────────────────────────────────────────
    for hit in &hits {
        info!(
            raw_ev = hit.ev.raw,
            stack_scarab_ev = hit.ev.stack_scarab,
            areas = ?hit.areas,
            "qualifying group"
        );
    }
    info!(
        hits = hits.len(),
        best_stack_scarab_ev = best,
        elapsed = ?start.elapsed(),
        "all done"
    );
    Ok(())
}

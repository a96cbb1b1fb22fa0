use anyhow::Result;
use divcards::{
    catalog::{load_cards, overrides::PRICE_OVERRIDES},
    clean,
};
use tokio::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const CARDS_PATH: &str = "cards.json";
const PRICES_PATH: &str = "prices.txt";

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) load the card catalog ────────────────────────────────────
    let start = Instant::now();
    let mut cards = load_cards(CARDS_PATH)?;
    info!(count = cards.len(), "loaded {}", CARDS_PATH);

    // ─── 3) apply overrides + price floor ────────────────────────────
    clean::clean_prices(&mut cards, &PRICE_OVERRIDES);

    // ─── 4) write the artifact ───────────────────────────────────────
    clean::write_export(&cards, PRICES_PATH).await?;

    info!(elapsed = ?start.elapsed(), "all done");
    Ok(())
}

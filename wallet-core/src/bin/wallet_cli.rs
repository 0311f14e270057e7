//! Wallet command-line demo
//!
//! Issues one wallet per argument, merges them all and prints the result.
//! Arguments are decimal coin amounts (`1`, `0.5`, `12,25`) or `0b`-prefixed
//! binary minimal-unit counts (`0b1010`).

use anyhow::Context;
use wallet_core::{telemetry, Config, SupplyPool, Wallet};

fn issue(pool: &SupplyPool, arg: &str) -> wallet_core::Result<Wallet> {
    match arg.strip_prefix("0b") {
        Some(bits) => Wallet::from_binary(pool, bits),
        None => Wallet::parse(pool, arg),
    }
}

fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("loading configuration")?;
    telemetry::init(&config.logging).context("initializing logging")?;

    tracing::info!("Starting wallet demo");

    let pool = SupplyPool::from_config(&config)?;
    let mut merged = Wallet::empty(&pool);

    for arg in std::env::args().skip(1) {
        let wallet = issue(&pool, &arg).with_context(|| format!("issuing {:?}", arg))?;
        println!("issued  {}", wallet);
        merged = Wallet::merge(merged, wallet)?;
    }

    println!("merged  {}", merged);
    for (index, operation) in merged.history().iter().enumerate() {
        println!("  [{}] {}", index, operation);
    }

    let history = serde_json::to_string(merged.history())?;
    tracing::debug!(%history, "Merged history");

    println!(
        "pool    {} units available, {} in circulation",
        pool.available(),
        pool.in_circulation()
    );

    tracing::info!("Wallet demo finished");
    Ok(())
}

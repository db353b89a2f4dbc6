//! # Cart Demo
//!
//! Runs the reference checkout against a seeded catalog and prints a JSON
//! summary.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env ──► DemoConfig ──► Fixture (built-in or JSON file)                 │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                    Cart (cart-core) ◄── REFERENCE_STEPS                 │
//! │                              │                                          │
//! │                              ▼                                          │
//! │                    CheckoutSummary ──► stdout (JSON)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! cargo run -p cart-demo
//! CART_DEMO_LOG=cart_core=debug cargo run -p cart-demo
//! CART_DEMO_FIXTURE=./catalog.json cargo run -p cart-demo
//! ```

mod config;
mod fixture;
mod scenario;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;
use crate::fixture::Fixture;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::load().context("loading configuration")?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .with_context(|| format!("invalid log filter '{}'", config.log_filter))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        customer_id = %config.customer_id,
        fixture = ?config.fixture_path,
        "Configuration loaded"
    );

    let fixture = match &config.fixture_path {
        Some(path) => Fixture::load(path)
            .with_context(|| format!("loading fixture {}", path.display()))?,
        None => Fixture::reference().context("building reference fixture")?,
    };
    info!(products = fixture.catalog.len(), "Catalog seeded");

    let summary = scenario::run(&config.customer_id, &fixture, scenario::REFERENCE_STEPS)
        .context("running checkout scenario")?;

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

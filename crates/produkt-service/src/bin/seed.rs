//! # Seed Data Loader
//!
//! Loads the storefront catalog into the database through `ProductService`.
//!
//! ## Usage
//! ```bash
//! # Seed the database named by PRODUKT_DATABASE_PATH (default ./produkt.db)
//! cargo run -p produkt-service --bin seed
//!
//! # Specify database path
//! cargo run -p produkt-service --bin seed -- --db ./data/produkt.db
//!
//! # Wipe existing products first
//! cargo run -p produkt-service --bin seed -- --reset
//! ```
//!
//! Running it twice is harmless: titles already stored are skipped.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};

use produkt_core::catalog::{count_by_category, storefront_catalog};
use produkt_db::Database;
use produkt_service::telemetry::init_tracing;
use produkt_service::{ProductService, ServiceConfig, ServiceError};

/// Load the storefront catalog into the product database
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Database file (overrides PRODUKT_DATABASE_PATH)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Delete all existing products before seeding
    #[arg(long)]
    reset: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ServiceConfig::load().context("loading configuration")?;
    if let Some(path) = args.db {
        config.database_path = path;
    }

    init_tracing(&config.log_filter);

    info!(path = %config.database_path.display(), "Seeding product catalog");

    let db = Database::new(config.db_config())
        .await
        .context("opening database")?;

    if args.reset {
        let removed = db.products().delete_all().await?;
        info!(removed, "Removed existing products");
    }

    let catalog = storefront_catalog().context("parsing embedded catalog")?;
    let service = ProductService::new(db.products());

    let start = Instant::now();
    let mut inserted = 0usize;
    let mut skipped = 0usize;

    for product in catalog.iter().cloned() {
        match service.add_product(product).await {
            Ok(_) => inserted += 1,
            Err(ServiceError::BadRequest(reason)) => {
                warn!(%reason, "Skipping catalog product");
                skipped += 1;
            }
            Err(err) => return Err(err).context("seeding catalog"),
        }
    }

    let categories = service.get_all_categories().await?;
    let total = db.products().count().await?;

    println!();
    println!("═══════════════════════════════════════════════════════════");
    println!("  Seed complete");
    println!("═══════════════════════════════════════════════════════════");
    println!("  Inserted:   {}", inserted);
    println!("  Skipped:    {}", skipped);
    println!("  In store:   {}", total);
    println!("  Elapsed:    {:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
    println!("  Categories:");
    for (category, count) in count_by_category(&catalog) {
        let marker = if categories.contains(&category) { "✓" } else { "✗" };
        println!("    {} {:<20} {}", marker, category, count);
    }
    println!("═══════════════════════════════════════════════════════════");

    db.close().await;
    Ok(())
}

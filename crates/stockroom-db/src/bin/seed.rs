//! # Seed Data Generator
//!
//! Populates the database with demo products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default) into ./products.db
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/products.db
//! ```

use std::env;
use stockroom_core::ProductDraft;
use stockroom_db::{Database, DbConfig};

/// Base product names for demo data
const NAMES: &[&str] = &[
    "Apple",
    "Banana",
    "Cherry",
    "Widget",
    "Gadget",
    "Sprocket",
    "Bolt",
    "Washer",
    "Hinge",
    "Bracket",
];

/// Size variants
const SIZES: &[&str] = &["Small", "Medium", "Large", "XL", "Pack of 6"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./products.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./products.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let draft = generate_product(seed);

        if let Err(e) = db.products().insert(&draft).await {
            eprintln!("Failed to insert {}: {}", draft.name, e);
            continue;
        }

        generated += 1;
    }

    println!(
        "✓ Generated {} products in {:?}",
        generated,
        start.elapsed()
    );

    let hits = db.products().search_by_name("a").await?;
    println!("  Search 'a': {} results", hits.len());

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one demo product from a sequence number.
fn generate_product(seed: usize) -> ProductDraft {
    let name = NAMES[seed % NAMES.len()];
    let size = SIZES[(seed / NAMES.len()) % SIZES.len()];

    // 0.99 - 19.98, two decimals
    let cents = 99 + (seed * 37) % 1900;
    let price = cents as f64 / 100.0;

    let stock = ((seed * 13) % 101) as i64;

    ProductDraft::new(format!("{} {}", name, size), price, stock)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_products_are_valid() {
        for seed in 0..200 {
            let draft = generate_product(seed);
            assert!(!draft.name.is_empty());
            assert!(draft.price >= 0.99 && draft.price < 20.0);
            assert!((0..=100).contains(&draft.stock));
        }
    }

    #[test]
    fn test_names_cycle_through_sizes() {
        assert_eq!(generate_product(0).name, "Apple Small");
        assert_eq!(generate_product(1).name, "Banana Small");
        assert_eq!(generate_product(NAMES.len()).name, "Apple Medium");
    }
}

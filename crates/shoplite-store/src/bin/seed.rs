//! # Seed Data Generator
//!
//! Populates an empty store with the default sample catalog.
//!
//! ## Usage
//! ```bash
//! # Seed the default JSON store under ./data
//! cargo run -p shoplite-store --bin seed
//!
//! # Seed a SQLite store
//! cargo run -p shoplite-store --bin seed -- --backend sqlite --data-dir ./data
//! ```

use std::env;

use tracing_subscriber::EnvFilter;

use shoplite_store::{seed_if_empty, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG controls verbosity; store operations log at debug.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    let mut backend = String::from("json");
    let mut data_dir = String::from("./data");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--backend" | "-b" => {
                if i + 1 < args.len() {
                    backend = args[i + 1].clone();
                    i += 1;
                }
            }
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Shoplite Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -b, --backend <NAME>   Store backend: json or sqlite (default: json)");
                println!("  -d, --data-dir <PATH>  Data directory (default: ./data)");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Shoplite Seed Data Generator");
    println!("===============================");
    println!("Backend:  {}", backend);
    println!("Data dir: {}", data_dir);
    println!();

    let config = match backend.as_str() {
        "json" => StoreConfig::json_file(&data_dir),
        "sqlite" => StoreConfig::sqlite(&data_dir),
        other => {
            eprintln!("Unknown backend '{}' (expected json or sqlite)", other);
            std::process::exit(1);
        }
    };

    let store = config.open().await?;
    println!("✓ Store opened");

    if seed_if_empty(store.as_ref()).await? {
        let products = store.get_all_products().await?.len();
        let categories = store.get_all_categories().await?.len();
        println!("✓ Seeded {} products across {} categories", products, categories);
    } else {
        println!("⚠ Store already has products, nothing to do");
        println!("  Delete the data files to regenerate.");
    }

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

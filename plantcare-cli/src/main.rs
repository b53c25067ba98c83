//! plantcare — command-line frontend for the plant-care knowledge store
//!
//! # Subcommands
//! - `init`          — back up any existing store, create the schema, seed it
//! - `lookup <name>` — case-insensitive plant lookup (`--json`, `--knowledge`)
//! - `status`        — SQLite version and per-table row counts

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use plantcare_core::config::{DatabaseConfig, PlantCareConfig};
use plantcare_core::lookup::{
    find_plant, get_plant_info, knowledge_for_plant, table_counts,
};
use plantcare_core::models::PlantInfo;
use plantcare_core::{db, initialize_database};

// ============================================================================
// CLI Definition
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "plantcare", version, about = "Plant-care knowledge store")]
struct Cli {
    /// Optional TOML config file ([database] path, max_connections; [service] log_level)
    #[arg(short, long)]
    config: Option<String>,

    /// Database file path (overrides the configured path)
    #[arg(long)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize the store: back up any existing file, create tables, seed them
    Init,

    /// Look up a plant by common name (case-insensitive)
    Lookup {
        /// Common name to look up, e.g. "Tulip"
        name: String,

        /// Output the record as JSON
        #[arg(long)]
        json: bool,

        /// Also print the plant's Q&A knowledge entries
        #[arg(long)]
        knowledge: bool,
    },

    /// Show SQLite version and per-table row counts
    Status,
}

// ============================================================================
// Output Formatting
// ============================================================================

/// Human-readable rendering of a lookup result.
fn format_plant(info: &PlantInfo) -> String {
    let mut out = format!("{} ({})\n", info.name, info.scientific_name);
    out.push_str(&format!("Conditions:  {}\n", info.growth_conditions));
    out.push_str(&format!("Description: {}\n", info.description));
    if let Some(url) = &info.image_url {
        out.push_str(&format!("Image:       {}\n", url));
    }
    out
}

// ============================================================================
// Subcommand Handlers
// ============================================================================

async fn do_init(database: &DatabaseConfig) -> anyhow::Result<()> {
    let report = initialize_database(database).await?;

    if let Some(backup) = &report.backup {
        println!(
            "Created backup of existing database as {}",
            backup.display()
        );
    }
    println!("Database initialized successfully!");

    Ok(())
}

async fn do_lookup(
    database: &DatabaseConfig,
    name: &str,
    json: bool,
    knowledge: bool,
) -> anyhow::Result<()> {
    let info = match get_plant_info(database, name).await? {
        Some(info) => info,
        None => {
            eprintln!("plantcare: no plant named '{}'", name);
            std::process::exit(1);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        print!("{}", format_plant(&info));
    }

    if knowledge {
        // The lookup view has no id; re-read the full row to follow the
        // knowledge_base reference.
        if let Some(plant) = find_plant(database, name).await? {
            let entries = knowledge_for_plant(database, plant.plant_id).await?;
            for entry in &entries {
                println!();
                println!("Q: {}", entry.question);
                println!("A: {}", entry.answer);
            }
        }
    }

    Ok(())
}

async fn do_status(database: &DatabaseConfig) -> anyhow::Result<()> {
    let pool = db::create_pool(database).await?;
    let version = db::health_check(&pool).await;
    pool.close().await;

    println!("SQLite version: {}", version?);

    let counts = table_counts(database).await?;
    println!("plants:         {}", counts.plants);
    println!("knowledge_base: {}", counts.knowledge_base);
    println!("chat_history:   {}", counts.chat_history);

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => match PlantCareConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => PlantCareConfig::default(),
    };

    if let Some(db_path) = cli.db {
        config.database.path = db_path;
    }

    // RUST_LOG wins; otherwise the configured level applies.
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.service.log_level)),
        )
        .init();

    match cli.command {
        Commands::Init => do_init(&config.database).await,
        Commands::Lookup {
            name,
            json,
            knowledge,
        } => do_lookup(&config.database, &name, json, knowledge).await,
        Commands::Status => do_status(&config.database).await,
    }
}

// ============================================================================
// Tests
// ============================================================================

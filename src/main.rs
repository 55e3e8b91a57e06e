//! Integritydb CLI - Command-line driver for the file-integrity hash store

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use integritydb::command::{InitParams, Reply, RunParams};
use integritydb::config;
use integritydb::service::IntegrityService;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "integritydb")]
#[command(version = "0.1.0")]
#[command(about = "Persistent file-integrity hash store with an init/run command interface")]
#[command(long_about = r#"
Integritydb persists one integrity hash per file path in a SQLite table,
so a monitor can detect when a watched file's digest drifts.

Example usage:
  integritydb init --database database.db
  integritydb insert --file index.html --hash abc123
  integritydb select --file index.html
  integritydb exec --json '{"action": "delete_one", "file": "index.html"}'
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database and bootstrap the integrity table
    Init {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Write the database path to integritydb.toml
        #[arg(long)]
        save_config: bool,

        /// Overwrite an existing integritydb.toml
        #[arg(long)]
        force: bool,
    },

    /// Insert or replace the hash stored for a file
    Insert {
        /// File path the record is keyed by
        #[arg(short, long)]
        file: String,

        /// Integrity hash to store
        #[arg(long)]
        hash: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Look up the hash stored for a file
    Select {
        /// File path the record is keyed by
        #[arg(short, long)]
        file: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Delete the record for a single file
    DeleteOne {
        /// File path the record is keyed by
        #[arg(short, long)]
        file: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Delete every record, keeping the table structure
    DeleteAll {
        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },

    /// Execute raw run parameters given as a JSON object
    Exec {
        /// Run parameters, e.g. '{"action": "select", "file": "index.html"}'
        #[arg(short, long)]
        json: String,

        /// Path to the database file
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let reply = match cli.command {
        Commands::Init { database, save_config, force } => {
            let db = resolve_database(database)?;
            config::ensure_db_dir(Path::new(&db))?;

            let mut service = IntegrityService::new();
            let reply = service.init(&InitParams::with_path(db.clone()));

            if reply.is_ok() && save_config {
                let cfg = config::IntegritydbConfig { path: Some(db.clone()) };
                config::write_config(&config::default_config_path(), &cfg, force)?;
                tracing::info!(path = %db, "database path saved to integritydb.toml");
            }
            reply
        }

        Commands::Insert { file, hash, database } => execute(
            RunParams {
                action: Some("insert".to_string()),
                file: Some(file),
                hash: Some(hash),
            },
            database,
        )?,

        Commands::Select { file, database } => execute(
            RunParams { action: Some("select".to_string()), file: Some(file), hash: None },
            database,
        )?,

        Commands::DeleteOne { file, database } => execute(
            RunParams { action: Some("delete_one".to_string()), file: Some(file), hash: None },
            database,
        )?,

        Commands::DeleteAll { database } => execute(
            RunParams { action: Some("delete_all".to_string()), file: None, hash: None },
            database,
        )?,

        Commands::Exec { json, database } => {
            let params: RunParams = serde_json::from_str(&json)?;
            execute(params, database)?
        }
    };

    println!("{}", serde_json::to_string_pretty(&reply)?);

    if !reply.is_ok() {
        std::process::exit(1);
    }
    Ok(())
}

/// Open the store and run one command; any failure comes back as a
/// structured reply rather than an error
fn execute(params: RunParams, database: Option<PathBuf>) -> anyhow::Result<Reply> {
    let db = resolve_database(database)?;
    config::ensure_db_dir(Path::new(&db))?;

    let mut service = IntegrityService::new();
    let init = service.init(&InitParams::with_path(db));
    if !init.is_ok() {
        return Ok(init);
    }

    Ok(service.run(params))
}

/// Database path resolution: CLI flag, then integritydb.toml, then default
fn resolve_database(flag: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = flag {
        return Ok(path.to_string_lossy().into_owned());
    }

    if let Some(cfg) = config::load_config(None)? {
        if let Some(path) = cfg.path {
            return Ok(path);
        }
    }

    Ok(integritydb::command::DEFAULT_DB_PATH.to_string())
}

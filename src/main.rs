use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::{fs, path::PathBuf};

mod config;

const DEFAULT_LOG_FILTER: &str = "info";

/// Waterfront points of interest with their hazards and products
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    /// Allow requests from any origin
    #[arg(long)]
    enable_cors: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve,
    /// Execute the SQL statements of a file, e.g. to load fixtures
    Import {
        #[arg(value_name = "SQL_FILE")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let args = Args::parse();
    let mut cfg = config::Config::try_load_from_file_or_default(args.config.as_ref())?;
    if let Some(db_url) = args.db_url {
        cfg.db.conn_sqlite = db_url;
    }
    if args.enable_cors {
        cfg.webserver.enable_cors = true;
    }

    let connections =
        wfdb_db_sqlite::Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size)?;
    wfdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let config::WebServer {
                enable_cors,
                default_proximity,
                media_url,
            } = cfg.webserver;
            let web_cfg = wfdb_webserver::Cfg {
                default_proximity,
                media_url,
            };
            wfdb_webserver::run(connections, enable_cors, web_cfg).await;
        }
        Command::Import { file } => {
            let sql = fs::read_to_string(&file)
                .with_context(|| format!("Unable to read {}", file.display()))?;
            log::info!("Importing {}", file.display());
            connections.exclusive()?.execute_batch(&sql)?;
            log::info!("Imported {}", file.display());
        }
    }
    Ok(())
}

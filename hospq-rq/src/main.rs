//! hospq-rq (Record Query) - Read-only hospital record query service
//!
//! Serves a fixed set of staff and patient lookup queries over HTTP. All
//! record rows are written by an external data-entry path; this process
//! opens the database read-only and never mutates it.

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use hospq_common::config::{prepare_root_folder, resolve_root_folder};
use hospq_common::db::{connect_readonly, init_database};
use hospq_rq::{build_router, AppState};

/// Command-line arguments for hospq-rq
#[derive(Parser, Debug)]
#[command(name = "hospq-rq")]
#[command(about = "Record Query service for HOSPQ")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "5780", env = "HOSPQ_RQ_PORT")]
    port: u16,

    /// Root folder containing the record database
    #[arg(short, long)]
    root_folder: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting HOSPQ Record Query (hospq-rq) v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "HOSPQ_ROOT_FOLDER")?;
    let db_path = prepare_root_folder(&root_folder)?;
    info!("Database path: {}", db_path.display());

    // First run: materialize an empty schema so the read-only connection
    // below has something to open. Rows arrive via the data-entry path.
    if !db_path.exists() {
        let pool = init_database(&db_path).await?;
        pool.close().await;
        info!("Created empty record database");
    }

    let pool = match connect_readonly(&db_path).await {
        Ok(pool) => {
            info!("Connected to database (read-only)");
            pool
        }
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("hospq-rq listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}

//! portal - Grievance Portal server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portal_core::{NotificationStore, ServerConfig, SessionStore};
use portal_types::{Role, SessionInfo};
use portal_web::AppState;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "portal",
    version,
    about = "Grievance Portal server",
    long_about = "API server for the Grievance Portal frontend.\n\
                  \n\
                  Serves the notification API and the SSE push channel consumed by the\n\
                  Leptos frontend (crates/portal-web, built separately with Trunk).\n\
                  \n\
                  Examples:\n\
                    portal serve                     # Run on the configured port\n\
                    portal serve --port 8080         # Custom port\n\
                    portal serve --demo              # Seed demo sessions and notifications\n\
                  \n\
                  Environment Variables:\n\
                    PORTAL_CONFIG                    # Path to a TOML config file\n\
                    PORTAL_PORT                      # Override the API port\n\
                    PORTAL_DATABASE                  # Override the database path"
)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, env = "PORTAL_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the API server (default)
    Serve {
        /// Port for the API server
        #[arg(long, env = "PORTAL_PORT")]
        port: Option<u16>,

        /// Database file path
        #[arg(long, env = "PORTAL_DATABASE")]
        database: Option<PathBuf>,

        /// Seed demo sessions and notifications, printing their tokens
        #[arg(long)]
        demo: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::default(),
    };

    match cli.mode.unwrap_or(Mode::Serve {
        port: None,
        database: None,
        demo: false,
    }) {
        Mode::Serve {
            port,
            database,
            demo,
        } => {
            // CLI flags override the config file
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(database) = database {
                config.database = Some(database);
            }
            run_serve(config, demo).await?;
        }
    }

    Ok(())
}

async fn run_serve(config: ServerConfig, demo: bool) -> Result<()> {
    let db_path = match config.database.clone() {
        Some(path) => path,
        None => default_database_path().context("Could not determine data directory")?,
    };
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let store = Arc::new(
        NotificationStore::open(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?,
    );
    let sessions = Arc::new(SessionStore::new());

    if demo {
        seed_demo(&store, &sessions)?;
    }

    info!(database = %db_path.display(), port = config.port, "starting portal server");
    portal_web::run(AppState::new(store, sessions), config.port).await
}

fn default_database_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("grievance-portal").join("portal.db"))
}

/// Seed a user and an employee session plus a few unread notifications,
/// printing the bearer tokens for manual testing
fn seed_demo(store: &NotificationStore, sessions: &SessionStore) -> Result<()> {
    let user_token = sessions.issue(SessionInfo {
        user_id: 1,
        display_name: "Rina".to_string(),
        role: Role::User,
    });
    let employee_token = sessions.issue(SessionInfo {
        user_id: 2,
        display_name: "Dana".to_string(),
        role: Role::Employee,
    });

    store.insert(1, "Grievance #3 was assigned to an employee", 3)?;
    store.insert(1, "New comment on grievance #3", 3)?;
    store.insert(2, "Grievance #3 was assigned to you", 3)?;

    println!("Demo user session (role=user):         {user_token}");
    println!("Demo employee session (role=employee): {employee_token}");
    Ok(())
}

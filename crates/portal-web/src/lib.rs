//! portal-web - Web frontend for the grievance portal using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod notifications;
pub mod pages;
pub mod realtime;
#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod sse;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, AppState};

#[cfg(feature = "ssr")]
use anyhow::Result;
#[cfg(feature = "ssr")]
use std::net::SocketAddr;
#[cfg(feature = "ssr")]
use tokio::net::TcpListener;
#[cfg(feature = "ssr")]
use tracing::info;

/// Run the web server
#[cfg(feature = "ssr")]
pub async fn run(state: AppState, port: u16) -> Result<()> {
    let router = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;

    info!("Portal server listening on http://{}", addr);
    println!("Portal server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}

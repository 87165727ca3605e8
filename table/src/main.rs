mod config;
mod engine;
mod protocol;
mod ws;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tokio::sync::broadcast;
use tokio::time;
use tracing::info;

use crate::config::TableConfig;
use crate::engine::Engine;
use crate::protocol::Outbound;
use crate::ws::{dispatch, ws_handler, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = TableConfig::from_env();
    config.validate().map_err(anyhow::Error::msg)?;

    let engine = Arc::new(Mutex::new(Engine::new(config.clone())));
    let (broadcaster, _) = broadcast::channel::<Outbound>(1024);

    let state = AppState {
        engine: engine.clone(),
        broadcaster: broadcaster.clone(),
    };

    // Tick loop: countdown while betting, reopen deadline while spinning.
    let tick_engine = engine.clone();
    let tick_broadcaster = broadcaster.clone();
    let tick_ms = config.tick_ms;
    tokio::spawn(async move {
        let mut interval = time::interval(Duration::from_millis(tick_ms));
        loop {
            interval.tick().await;
            let events = {
                let mut engine = tick_engine.lock().unwrap();
                engine.tick(Instant::now())
            };
            dispatch(&tick_broadcaster, events);
        }
    });

    let app = Router::new()
        .route("/ws", get(ws_handler))
        .route("/healthz", get(healthz))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid listen addr")?;
    info!(%addr, "table service listening");

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

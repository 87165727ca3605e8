//! WebSocket glue.
//!
//! Each accepted connection gets a server-assigned identity plus two tasks:
//! one draining its write queue into the socket, one forwarding table
//! messages addressed to it. Inbound frames are decoded at the boundary and
//! dispatched to the engine under its lock; undecodable frames are logged and
//! dropped. A closed socket is the disconnect event.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::engine::Engine;
use crate::protocol::{ClientMessage, Outbound};

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Mutex<Engine>>,
    pub broadcaster: broadcast::Sender<Outbound>,
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let id = Uuid::new_v4();
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<Message>();
    let mut fanout = state.broadcaster.subscribe();

    let write_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            if sender.send(message).await.is_err() {
                break;
            }
        }
    });

    let fanout_task = {
        let tx = tx.clone();
        tokio::spawn(async move {
            while let Ok(outbound) = fanout.recv().await {
                if !outbound.addressed_to(id) {
                    continue;
                }
                if let Ok(payload) = serde_json::to_string(&outbound.message) {
                    let _ = tx.send(Message::Text(payload));
                }
            }
        })
    };

    debug!(%id, "connection open");
    while let Some(Ok(message)) = receiver.next().await {
        match message {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(inbound) => handle_inbound(id, inbound, &state),
                Err(err) => warn!(%id, ?err, "invalid inbound message"),
            },
            Message::Close(_) => break,
            _ => {}
        }
    }

    // Transport-level disconnect doubles as leave.
    let events = {
        let mut engine = state.engine.lock().unwrap();
        engine.handle_leave(id, Instant::now())
    };
    dispatch(&state.broadcaster, events);
    debug!(%id, "connection closed");

    write_task.abort();
    fanout_task.abort();
}

fn handle_inbound(id: Uuid, inbound: ClientMessage, state: &AppState) {
    let events = {
        let mut engine = state.engine.lock().unwrap();
        match inbound {
            ClientMessage::Join { name } => engine.handle_join(id, &name),
            ClientMessage::SendMessage { text } => engine.handle_chat(id, &text),
            ClientMessage::UpdateBets { bets } => engine.handle_bets(id, bets),
            ClientMessage::PlayerReady => engine.handle_ready(id, Instant::now()),
        }
    };
    dispatch(&state.broadcaster, events);
}

/// Pushes engine output into the table-wide channel. A send only fails when
/// no connection is subscribed, which is not an error.
pub fn dispatch(broadcaster: &broadcast::Sender<Outbound>, events: Vec<Outbound>) {
    for event in events {
        let _ = broadcaster.send(event);
    }
}

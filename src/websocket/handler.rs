//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and manages the connection lifecycle.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::ServerMessage;
use super::session::Session;
use crate::api::AppState;

/// WebSocket upgrade handler
///
/// This is the entry point for WebSocket connections.
/// It upgrades the HTTP connection to WebSocket and starts message handling.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();

    let _guard = state.open_session();
    let mut session = Session::new(Arc::clone(&state.dataset));
    let connection_id = session.id().to_string();

    tracing::info!(connection_id = %connection_id, "WebSocket connected");

    if send_all(&mut sender, session.greeting()).await.is_err() {
        tracing::error!(connection_id = %connection_id, "Failed to send initial view");
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "WebSocket receive error"
                );
                break;
            }
        };

        let replies = match message {
            Message::Text(text) => session.handle_text(&text),
            Message::Binary(_) => vec![ServerMessage::Error {
                message: "Binary messages not supported".to_string(),
            }],
            // Axum answers pings itself
            Message::Ping(_) | Message::Pong(_) => continue,
            Message::Close(_) => {
                tracing::debug!(connection_id = %connection_id, "Client requested close");
                break;
            }
        };

        if send_all(&mut sender, replies).await.is_err() {
            tracing::debug!(
                connection_id = %connection_id,
                "WebSocket send failed, closing connection"
            );
            break;
        }
    }

    tracing::info!(connection_id = %connection_id, "WebSocket disconnected");
}

/// Serialize and send messages in order
async fn send_all(
    sender: &mut SplitSink<WebSocket, Message>,
    messages: Vec<ServerMessage>,
) -> Result<(), axum::Error> {
    for msg in messages {
        match serde_json::to_string(&msg) {
            Ok(text) => sender.send(Message::Text(text)).await?,
            Err(e) => tracing::error!(error = %e, "Failed to serialize message"),
        }
    }
    Ok(())
}

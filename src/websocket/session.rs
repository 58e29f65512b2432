//! Dashboard Session
//!
//! One per WebSocket connection. Owns that connection's selection and turns
//! client messages into redraw messages. Messages are handled one at a time.

use std::sync::Arc;
use uuid::Uuid;

use super::messages::{ClientMessage, ServerMessage};
use crate::data::Dataset;
use crate::view::{dispatch, initial_view, SelectionState};

/// Unique identifier for a WebSocket connection
pub type ConnectionId = String;

pub struct Session {
    id: ConnectionId,
    dataset: Arc<Dataset>,
    state: SelectionState,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            dataset,
            state: SelectionState::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Messages sent right after the upgrade: the id, then every panel
    pub fn greeting(&self) -> Vec<ServerMessage> {
        let mut messages = vec![ServerMessage::Connected {
            connection_id: self.id.clone(),
        }];
        messages.extend(
            initial_view(&self.dataset, &self.state)
                .iter()
                .map(|f| ServerMessage::from_fragment(&self.dataset, f)),
        );
        messages
    }

    /// Apply one client message and return the redraws it causes
    pub fn handle(&mut self, message: ClientMessage) -> Vec<ServerMessage> {
        let Some(event) = message.into_event() else {
            return vec![ServerMessage::Pong];
        };

        let event_name = event.name();
        let outcome = dispatch(&self.dataset, &self.state, event);
        self.state = outcome.state;

        tracing::debug!(
            connection_id = %self.id,
            event = event_name,
            country = ?self.state.country,
            year = ?self.state.year,
            fragments = outcome.fragments.len(),
            "Dispatched view event"
        );

        outcome
            .fragments
            .iter()
            .map(|f| ServerMessage::from_fragment(&self.dataset, f))
            .collect()
    }

    /// Handle raw text from the socket; malformed input yields an error message
    pub fn handle_text(&mut self, text: &str) -> Vec<ServerMessage> {
        match serde_json::from_str::<ClientMessage>(text) {
            Ok(message) => self.handle(message),
            Err(e) => {
                tracing::debug!(
                    connection_id = %self.id,
                    error = %e,
                    text = %text,
                    "Invalid client message"
                );
                vec![ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                }]
            }
        }
    }
}

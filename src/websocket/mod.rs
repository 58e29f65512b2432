//! WebSocket Dashboard Sessions
//!
//! The `worldcup-ui` front end drives the view over a WebSocket at `/ws`.
//!
//! ## Architecture
//!
//! - **Session**: owns one connection's `SelectionState` and dispatches events
//! - **Handler**: handles the upgrade and pumps messages through the session
//! - **Messages**: defines client and server message formats
//!
//! ## Protocol
//!
//! ```text
//! client: {"type":"select_country","country":"Brazil"}
//! server: {"type":"country_wins","result":{"status":"wins","country":"Brazil","wins":5}}
//! server: {"type":"figure","figure":{"data":[...],"layout":{...}}}
//! ```
//!
//! Panel payloads are data, not markup; the UI renders them.

mod handler;
mod messages;
mod session;

pub use handler::websocket_handler;
pub use messages::{ClientMessage, ServerMessage};
pub use session::{ConnectionId, Session};

//! State Management
//!
//! Dashboard signals and the WebSocket session that keeps them current.

pub mod global;
pub mod websocket;

pub use global::{provide_dashboard_state, CountryWins, DashboardState, MatchResult, YearSummary};
pub use websocket::{WebSocketClient, WsMessage};

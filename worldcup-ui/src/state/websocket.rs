//! WebSocket Client
//!
//! Dashboard session with the server. Selection changes go out as events;
//! derived panel content comes back and lands in the dashboard signals.

use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CloseEvent, MessageEvent, WebSocket};

use super::global::{CountryWins, DashboardState, YearSummary};

const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const PING_INTERVAL_MS: u32 = 30_000;

/// WebSocket message types from server
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    Connected { connection_id: String },
    CountryWins { result: CountryWins },
    YearSummary { summary: YearSummary },
    Winners { winners: Vec<String> },
    Figure { figure: serde_json::Value },
    Pong,
    Error { message: String },
}

/// WebSocket client message types
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    SelectCountry { country: Option<String> },
    SelectYear { year: Option<u16> },
    MapClick { payload: serde_json::Value },
    Ping,
}

/// WebSocket client for the dashboard session
#[derive(Clone)]
pub struct WebSocketClient {
    ws: Rc<RefCell<Option<WebSocket>>>,
    url: String,
    reconnect_attempts: Rc<RefCell<u32>>,
}

impl WebSocketClient {
    /// Create a new WebSocket client
    pub fn new(url: &str) -> Self {
        Self {
            ws: Rc::new(RefCell::new(None)),
            url: url.to_string(),
            reconnect_attempts: Rc::new(RefCell::new(0)),
        }
    }

    /// Connect to the WebSocket server
    pub fn connect(&self, state: DashboardState) {
        match WebSocket::new(&self.url) {
            Ok(ws) => {
                self.setup_handlers(&ws, state);
                *self.ws.borrow_mut() = Some(ws);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("WebSocket connection failed: {:?}", e).into());
                self.schedule_reconnect(state);
            }
        }
    }

    fn setup_handlers(&self, ws: &WebSocket, state: DashboardState) {
        // On open: a new session starts empty, so replay the current selection
        let client = self.clone();
        let on_open = Closure::wrap(Box::new(move |_: JsValue| {
            web_sys::console::log_1(&"WebSocket connected".into());
            state.ws_connected.set(true);
            *client.reconnect_attempts.borrow_mut() = 0;
            client.replay_selection(state);
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        let on_message = Closure::wrap(Box::new(move |event: MessageEvent| {
            if let Ok(text) = event.data().dyn_into::<js_sys::JsString>() {
                let text: String = text.into();
                handle_message(&text, state);
            }
        }) as Box<dyn FnMut(MessageEvent)>);
        ws.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        let client = self.clone();
        let on_close = Closure::wrap(Box::new(move |event: CloseEvent| {
            web_sys::console::log_1(
                &format!("WebSocket closed: code={}, reason={}", event.code(), event.reason()).into(),
            );
            state.ws_connected.set(false);
            client.schedule_reconnect(state);
        }) as Box<dyn FnMut(CloseEvent)>);
        ws.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        let on_error = Closure::wrap(Box::new(move |e: JsValue| {
            web_sys::console::error_1(&format!("WebSocket error: {:?}", e).into());
        }) as Box<dyn FnMut(JsValue)>);
        ws.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();
    }

    /// Schedule a reconnect attempt with exponential backoff
    fn schedule_reconnect(&self, state: DashboardState) {
        let attempts = *self.reconnect_attempts.borrow();
        if attempts >= MAX_RECONNECT_ATTEMPTS {
            web_sys::console::error_1(&"Max reconnect attempts reached".into());
            state.show_error("Lost connection to the dashboard server");
            return;
        }

        *self.reconnect_attempts.borrow_mut() = attempts + 1;

        let client = self.clone();
        gloo_timers::callback::Timeout::new(reconnect_delay_ms(attempts), move || {
            web_sys::console::log_1(&format!("Attempting reconnect (attempt {})", attempts + 1).into());
            client.connect(state);
        })
        .forget();
    }

    fn replay_selection(&self, state: DashboardState) {
        if let Some(country) = state.selected_country.get_untracked() {
            self.report(self.select_country(Some(country)));
        }
        if let Some(year) = state.selected_year.get_untracked() {
            self.report(self.select_year(Some(year)));
        }
    }

    /// Send a message to the server
    pub fn send(&self, message: &ClientMessage) -> Result<(), String> {
        let ws_guard = self.ws.borrow();
        let ws = ws_guard.as_ref().ok_or("WebSocket not connected")?;

        let json = serde_json::to_string(message).map_err(|e| e.to_string())?;
        ws.send_with_str(&json).map_err(|e| format!("{:?}", e))
    }

    pub fn select_country(&self, country: Option<String>) -> Result<(), String> {
        self.send(&ClientMessage::SelectCountry { country })
    }

    pub fn select_year(&self, year: Option<u16>) -> Result<(), String> {
        self.send(&ClientMessage::SelectYear { year })
    }

    pub fn map_click(&self, payload: serde_json::Value) -> Result<(), String> {
        self.send(&ClientMessage::MapClick { payload })
    }

    /// Send a ping
    pub fn ping(&self) -> Result<(), String> {
        self.send(&ClientMessage::Ping)
    }

    /// Check if connected
    pub fn is_connected(&self) -> bool {
        self.ws
            .borrow()
            .as_ref()
            .map(|ws| ws.ready_state() == WebSocket::OPEN)
            .unwrap_or(false)
    }

    /// Log a failed send; the next reconnect replays the selection anyway
    pub fn report(&self, result: Result<(), String>) {
        if let Err(e) = result {
            web_sys::console::warn_1(&format!("Dashboard event not sent: {}", e).into());
        }
    }
}

/// Backoff before reconnect attempt `attempts + 1`
fn reconnect_delay_ms(attempts: u32) -> u32 {
    2_u32.saturating_pow(attempts).saturating_mul(1000).min(30_000)
}

/// `http(s)://host` to `ws(s)://host/ws`
pub fn ws_url(server_base: &str) -> String {
    let base = server_base
        .trim_end_matches('/')
        .replacen("https://", "wss://", 1)
        .replacen("http://", "ws://", 1);
    format!("{}/ws", base)
}

/// Handle incoming WebSocket message
fn handle_message(text: &str, state: DashboardState) {
    match serde_json::from_str::<WsMessage>(text) {
        Ok(msg) => apply_message(msg, state),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to parse WebSocket message: {}", e).into());
        }
    }
}

fn apply_message(msg: WsMessage, state: DashboardState) {
    match msg {
        WsMessage::Connected { connection_id } => {
            web_sys::console::log_1(&format!("Connected with ID: {}", connection_id).into());
        }
        WsMessage::CountryWins { result } => state.country_wins.set(result),
        WsMessage::YearSummary { summary } => state.year_summary.set(summary),
        WsMessage::Winners { winners } => state.winners.set(winners),
        WsMessage::Figure { figure } => state.figure.set(Some(figure)),
        WsMessage::Pong => {}
        WsMessage::Error { message } => {
            web_sys::console::error_1(&format!("Server error: {}", message).into());
            state.show_error(&message);
        }
    }
    state.touch();
}

/// Open the session and start the keepalive (call from app root)
pub fn init_websocket(state: DashboardState, server_base: &str) -> WebSocketClient {
    let client = WebSocketClient::new(&ws_url(server_base));
    client.connect(state);

    let keepalive = client.clone();
    gloo_timers::callback::Interval::new(PING_INTERVAL_MS, move || {
        if keepalive.is_connected() {
            keepalive.report(keepalive.ping());
        }
    })
    .forget();

    client
}

/// Send every selection change to the server
///
/// The first run of each effect only subscribes; the server already sends
/// the empty-selection view on connect.
pub fn bind_selection(state: DashboardState, client: WebSocketClient) {
    let country_client = client.clone();
    create_effect(move |prev: Option<()>| {
        let country = state.selected_country.get();
        if prev.is_some() {
            country_client.report(country_client.select_country(country));
        }
    });

    create_effect(move |prev: Option<()>| {
        let year = state.selected_year.get();
        if prev.is_some() {
            client.report(client.select_year(year));
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_server_messages() {
        let msg: WsMessage = serde_json::from_str(
            r#"{"type":"country_wins","result":{"status":"wins","country":"Brazil","wins":5}}"#,
        )
        .unwrap();
        assert!(matches!(
            msg,
            WsMessage::CountryWins { result: CountryWins::Wins { wins: 5, .. } }
        ));

        let msg: WsMessage = serde_json::from_str(
            r#"{"type":"year_summary","summary":{"status":"no_data","year":1942}}"#,
        )
        .unwrap();
        assert!(matches!(
            msg,
            WsMessage::YearSummary { summary: YearSummary::NoData { year: 1942 } }
        ));

        let msg: WsMessage =
            serde_json::from_str(r#"{"type":"winners","winners":["Argentina","Brazil"]}"#).unwrap();
        assert!(matches!(msg, WsMessage::Winners { winners } if winners.len() == 2));

        let msg: WsMessage =
            serde_json::from_str(r#"{"type":"figure","figure":{"data":[],"layout":{}}}"#).unwrap();
        assert!(matches!(msg, WsMessage::Figure { .. }));
    }

    #[test]
    fn test_client_messages_match_server_format() {
        let json = serde_json::to_value(ClientMessage::SelectCountry { country: None }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "select_country", "country": null}));

        let json = serde_json::to_value(ClientMessage::SelectYear { year: Some(2014) }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "select_year", "year": 2014}));
    }

    #[test]
    fn test_ws_url() {
        assert_eq!(ws_url("http://localhost:8053"), "ws://localhost:8053/ws");
        assert_eq!(ws_url("https://cup.example.org/"), "wss://cup.example.org/ws");
    }

    #[test]
    fn test_reconnect_backoff() {
        assert_eq!(reconnect_delay_ms(0), 1000);
        assert_eq!(reconnect_delay_ms(3), 8000);
        assert_eq!(reconnect_delay_ms(10), 30_000);
    }
}

//! WebSocket Message Types
//!
//! Defines all message types for WebSocket communication between
//! the dashboard page and the server.

use serde::{Deserialize, Serialize};

use crate::data::Dataset;
use crate::view::{map_figure, CountryWins, Fragment, ViewEvent, YearSummary};

/// Messages sent from client to server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Country picker changed
    SelectCountry {
        /// Selected country, null when cleared
        #[serde(default)]
        country: Option<String>,
    },
    /// Year picker changed
    SelectYear {
        /// Selected year, null when cleared
        #[serde(default)]
        year: Option<u16>,
    },
    /// Map clicked
    MapClick {
        /// Click data from the chart; not inspected
        #[serde(default)]
        payload: serde_json::Value,
    },
    /// Ping for keepalive
    Ping,
}

impl ClientMessage {
    /// The view event this message drives, if any
    pub fn into_event(self) -> Option<ViewEvent> {
        match self {
            ClientMessage::SelectCountry { country } => Some(ViewEvent::SelectCountry(country)),
            ClientMessage::SelectYear { year } => Some(ViewEvent::SelectYear(year)),
            ClientMessage::MapClick { payload } => Some(ViewEvent::MapClick(payload)),
            ClientMessage::Ping => None,
        }
    }
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Connection established
    Connected {
        /// Unique connection identifier
        connection_id: String,
    },
    /// Replacement content for the country wins panel
    CountryWins { result: CountryWins },
    /// Replacement content for the year summary panel
    YearSummary { summary: YearSummary },
    /// Replacement winners list
    Winners { winners: Vec<String> },
    /// Replacement map figure
    Figure {
        /// Plotly figure document
        figure: serde_json::Value,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}

impl ServerMessage {
    /// The message that redraws a derived fragment
    pub fn from_fragment(dataset: &Dataset, fragment: &Fragment) -> Self {
        match fragment {
            Fragment::CountryWins(result) => ServerMessage::CountryWins {
                result: result.clone(),
            },
            Fragment::YearSummary(summary) => ServerMessage::YearSummary {
                summary: summary.clone(),
            },
            Fragment::WinnersList(winners) => ServerMessage::Winners {
                winners: winners.clone(),
            },
            Fragment::Map(focus) => ServerMessage::Figure {
                figure: map_figure(dataset, focus),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::MapFocus;

    #[test]
    fn test_client_message_deserialize_select_country() {
        let json = r#"{"type": "select_country", "country": "Brazil"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(
            msg.into_event(),
            Some(ViewEvent::SelectCountry(Some("Brazil".to_string())))
        );
    }

    #[test]
    fn test_client_message_deserialize_cleared() {
        let json = r#"{"type": "select_country", "country": null}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.into_event(), Some(ViewEvent::SelectCountry(None)));

        let json = r#"{"type": "select_year"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.into_event(), Some(ViewEvent::SelectYear(None)));
    }

    #[test]
    fn test_client_message_deserialize_map_click() {
        let json = r#"{"type": "map_click", "payload": {"points": [{"location": "BRA"}]}}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg.into_event(), Some(ViewEvent::MapClick(_))));
    }

    #[test]
    fn test_client_message_deserialize_ping() {
        let json = r#"{"type": "ping"}"#;
        let msg: ClientMessage = serde_json::from_str(json).unwrap();
        assert!(matches!(msg, ClientMessage::Ping));
        assert!(msg.into_event().is_none());
    }

    #[test]
    fn test_server_message_serialize_country_wins() {
        let dataset = Dataset::builtin().unwrap();
        let msg = ServerMessage::from_fragment(
            &dataset,
            &Fragment::CountryWins(CountryWins::Wins {
                country: "Brazil".to_string(),
                wins: 5,
            }),
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "country_wins");
        assert_eq!(json["result"]["status"], "wins");
        assert_eq!(json["result"]["country"], "Brazil");
        assert_eq!(json["result"]["wins"], 5);
    }

    #[test]
    fn test_server_message_serialize_year_summary() {
        let dataset = Dataset::builtin().unwrap();
        let msg = ServerMessage::from_fragment(
            &dataset,
            &Fragment::YearSummary(YearSummary::NoData { year: 1942 }),
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "year_summary");
        assert_eq!(json["summary"]["status"], "no_data");
        assert_eq!(json["summary"]["year"], 1942);
    }

    #[test]
    fn test_server_message_serialize_figure() {
        let dataset = Dataset::builtin().unwrap();
        let msg = ServerMessage::from_fragment(&dataset, &Fragment::Map(MapFocus::World));
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "figure");
        assert_eq!(json["figure"]["data"][0]["type"], "choropleth");
    }

    #[test]
    fn test_server_message_serialize_connected() {
        let msg = ServerMessage::Connected {
            connection_id: "abc-123".to_string(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"type\":\"connected\""));
        assert!(json.contains("\"connection_id\":\"abc-123\""));
    }
}

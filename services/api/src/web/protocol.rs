//! services/api/src/web/protocol.rs
//!
//! Defines the WebSocket message protocol between the renderer and the API
//! server, and the inbound payload shapes shared with the REST handlers.

use crate::web::dto::ScreenDto;
use media_monitor_core::{AlertKind, DateRange, Event, FilterChange, SentimentFilter, SourceKind};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//=========================================================================================
// Messages Sent FROM the Client (Renderer) TO the Server
//=========================================================================================

/// Represents the structured text messages a client can send to the server.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Submits the login form.
    Login { username: String, password: String },

    /// The user typed into a login field; clears that field's error.
    EditLoginField { field: String },

    Logout,

    /// Switches the active view. Unknown view names are ignored.
    Navigate { view: String },

    /// Changes one or more filter controls of the mentions panel.
    ChangeFilter(FilterUpdate),

    /// A row of the sources overview table was clicked.
    SelectSource { kind: String },

    /// Raises a banner that stays until closed or replaced.
    ShowAlert { kind: String, message: String },

    /// The close button of the alert banner was clicked.
    DismissAlert,
}

impl ClientMessage {
    /// Whether the message acts on the logged-in shell rather than the login form.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            ClientMessage::Login { .. } | ClientMessage::EditLoginField { .. }
        )
    }
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client (Renderer)
//=========================================================================================

/// Represents the structured text messages the server can send to the client.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The current screen. Sent on connect and after every state change.
    Snapshot { screen: ScreenDto },

    /// Reports a rejected message; the connection stays open.
    Error { message: String },
}

//=========================================================================================
// Shared Inbound Payloads
//=========================================================================================

/// A partial update of the filter controls. Absent fields stay unchanged.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct FilterUpdate {
    /// `all`, `positive`, `negative` or `neutral`.
    pub sentiment: Option<String>,
    pub urgent_only: Option<bool>,
    /// `24h`, `7d` or `30d`.
    pub date_range: Option<String>,
}

impl FilterUpdate {
    /// Validates every present field before any of them is applied.
    pub fn into_changes(self) -> Result<Vec<FilterChange>, String> {
        let mut changes = Vec::new();
        if let Some(raw) = self.sentiment {
            let sentiment = SentimentFilter::parse(&raw)
                .ok_or_else(|| format!("Unknown sentiment filter '{}'", raw))?;
            changes.push(FilterChange::Sentiment(sentiment));
        }
        if let Some(urgent_only) = self.urgent_only {
            changes.push(FilterChange::UrgentOnly(urgent_only));
        }
        if let Some(raw) = self.date_range {
            let range =
                DateRange::parse(&raw).ok_or_else(|| format!("Unknown date range '{}'", raw))?;
            changes.push(FilterChange::DateRange(range));
        }
        Ok(changes)
    }
}

pub fn parse_source_kind(raw: &str) -> Result<SourceKind, String> {
    SourceKind::parse(raw).ok_or_else(|| format!("Unknown source kind '{}'", raw))
}

/// Builds a `ShowAlert` event, rejecting unknown kinds and blank messages.
pub fn show_alert_event(kind: &str, message: String) -> Result<Event, String> {
    let kind = AlertKind::parse(kind).ok_or_else(|| format!("Unknown alert kind '{}'", kind))?;
    if message.trim().is_empty() {
        return Err("Alert message is required".to_string());
    }
    Ok(Event::ShowAlert { kind, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_monitor_core::Sentiment;

    #[test]
    fn client_messages_use_a_type_tag() {
        let msg: ClientMessage =
            serde_json::from_str(r#"{"type":"navigate","view":"reports"}"#).unwrap();
        assert_eq!(
            msg,
            ClientMessage::Navigate {
                view: "reports".to_string()
            }
        );

        let msg: ClientMessage = serde_json::from_str(r#"{"type":"dismiss_alert"}"#).unwrap();
        assert_eq!(msg, ClientMessage::DismissAlert);
    }

    #[test]
    fn change_filter_flattens_the_update() {
        let msg: ClientMessage = serde_json::from_str(
            r#"{"type":"change_filter","sentiment":"negative","urgent_only":true}"#,
        )
        .unwrap();
        let ClientMessage::ChangeFilter(update) = msg else {
            panic!("expected change_filter");
        };
        assert_eq!(
            update.into_changes().unwrap(),
            vec![
                FilterChange::Sentiment(SentimentFilter::Only(Sentiment::Negative)),
                FilterChange::UrgentOnly(true),
            ]
        );
    }

    #[test]
    fn unknown_filter_values_are_rejected_whole() {
        let update = FilterUpdate {
            sentiment: Some("mixed".to_string()),
            urgent_only: Some(true),
            date_range: None,
        };
        assert_eq!(
            update.into_changes().unwrap_err(),
            "Unknown sentiment filter 'mixed'"
        );
    }

    #[test]
    fn server_snapshot_serializes_with_tags() {
        let msg = ServerMessage::Error {
            message: "nope".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["message"], "nope");
    }

    #[test]
    fn only_login_form_messages_are_allowed_while_logged_out() {
        let login = ClientMessage::Login {
            username: "a".to_string(),
            password: "b".to_string(),
        };
        assert!(!login.requires_login());
        assert!(ClientMessage::Logout.requires_login());
        assert!(ClientMessage::DismissAlert.requires_login());
    }

    #[test]
    fn show_alert_needs_a_known_kind_and_a_message() {
        assert_eq!(
            show_alert_event("error", "Export failed".to_string()),
            Ok(Event::ShowAlert {
                kind: AlertKind::Error,
                message: "Export failed".to_string(),
            })
        );
        assert_eq!(
            show_alert_event("warning", "x".to_string()).unwrap_err(),
            "Unknown alert kind 'warning'"
        );
        assert!(show_alert_event("info", "  ".to_string()).is_err());
    }

    #[test]
    fn youtube_is_accepted_as_a_source_kind() {
        assert_eq!(parse_source_kind("youtube"), Ok(SourceKind::Video));
        assert!(parse_source_kind("podcast").is_err());
    }
}

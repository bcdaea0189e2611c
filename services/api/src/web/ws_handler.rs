//! services/api/src/web/ws_handler.rs
//!
//! The entry point and control loop for a WebSocket connection. Client
//! messages become dashboard events; a companion task pushes a fresh snapshot
//! to the client whenever the dashboard changes, whatever caused the change.
//!
//! Everything bound for the client goes through one outbox channel drained by
//! a writer task, so the message logic never touches the socket directly.

use crate::{
    error::ApiError,
    web::{
        controller::{DashboardController, LoginOutcome},
        protocol::{parse_source_kind, show_alert_event, ClientMessage, ServerMessage},
        state::AppState,
    },
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures::{
    stream::{SplitSink, StreamExt},
    SinkExt,
};
use media_monitor_core::{Event, LoginField, View};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use uuid::Uuid;

type Outbox = mpsc::UnboundedSender<ServerMessage>;

/// The handler for upgrading HTTP requests to WebSocket connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    let connection_id = Uuid::new_v4();
    info!(%connection_id, "New WebSocket connection established.");

    let (sender, mut receiver) = socket.split();
    let (outbox, outbox_rx) = mpsc::unbounded_channel();
    let writer_task = tokio::spawn(write_messages(sender, outbox_rx));

    // --- 1. Initial Snapshot ---
    let mut revisions = app_state.dashboard.subscribe();
    let _ = revisions.borrow_and_update();
    let initial = ServerMessage::Snapshot {
        screen: app_state.dashboard.snapshot(),
    };
    if outbox.send(initial).is_err() {
        error!(%connection_id, "Writer closed before the initial snapshot.");
        return;
    }

    let cancellation_token = CancellationToken::new();
    let push_task = tokio::spawn(push_snapshots(
        app_state.dashboard.clone(),
        revisions,
        outbox.clone(),
        cancellation_token.clone(),
    ));

    // --- 2. Main Message Loop ---
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Some(reply) = handle_text_message(text.as_str(), &app_state).await {
                    if outbox.send(reply).is_err() {
                        warn!(%connection_id, "Writer closed; ending connection.");
                        break;
                    }
                }
            }
            Ok(Message::Close(_)) => {
                info!(%connection_id, "Client sent close message.");
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(%connection_id, "WebSocket receive error: {}", e);
                break;
            }
        }
    }

    // --- 3. Cleanup ---
    cancellation_token.cancel();
    if let Err(e) = push_task.await {
        error!(%connection_id, "Snapshot push task failed: {:?}", e);
    }
    drop(outbox);
    if let Err(e) = writer_task.await {
        error!(%connection_id, "Writer task failed: {:?}", e);
    }
    info!(%connection_id, "WebSocket connection closed.");
}

/// Drains the outbox into the socket until every sender is gone.
async fn write_messages(
    mut sender: SplitSink<WebSocket, Message>,
    mut outbox: mpsc::UnboundedReceiver<ServerMessage>,
) {
    while let Some(msg) = outbox.recv().await {
        if let Err(e) = send_message(&mut sender, &msg).await {
            warn!("Failed to write to WebSocket, stopping: {}", e);
            break;
        }
    }
}

/// Queues the current screen every time the dashboard revision moves.
async fn push_snapshots(
    dashboard: Arc<DashboardController>,
    mut revisions: watch::Receiver<u64>,
    outbox: Outbox,
    cancellation_token: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => break,
            changed = revisions.changed() => {
                if changed.is_err() {
                    break;
                }
                let _ = revisions.borrow_and_update();
                let snapshot = ServerMessage::Snapshot {
                    screen: dashboard.snapshot(),
                };
                if outbox.send(snapshot).is_err() {
                    break;
                }
            }
        }
    }
}

/// Turns one client message into dashboard events.
///
/// State changes reach the client through the push task; the returned
/// message, if any, is a rejection for this message alone.
async fn handle_text_message(text: &str, app_state: &AppState) -> Option<ServerMessage> {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            warn!("Failed to deserialize client message: {}", e);
            return Some(error_message(format!("Malformed message: {}", e)));
        }
    };

    let dashboard = &app_state.dashboard;
    if message.requires_login() && !dashboard.is_logged_in() {
        return Some(error_message("Not logged in"));
    }

    match message {
        ClientMessage::Login { username, password } => {
            match dashboard
                .login(app_state.verifier.as_ref(), username, password)
                .await
            {
                Ok(LoginOutcome::AlreadyLoggedIn(_)) => {
                    return Some(error_message("Already logged in"));
                }
                Ok(_) => {}
                Err(e) => {
                    error!("Failed to verify credentials: {:?}", e);
                    return Some(error_message("Authentication error"));
                }
            }
        }
        ClientMessage::EditLoginField { field } => match LoginField::parse(&field) {
            Some(field) => {
                dashboard.dispatch(Event::EditLoginField(field));
            }
            None => return Some(error_message(format!("Unknown login field '{}'", field))),
        },
        ClientMessage::Logout => {
            dashboard.dispatch(Event::Logout);
            info!("User logged out");
        }
        ClientMessage::Navigate { view } => match View::parse(&view) {
            Some(view) => {
                dashboard.dispatch(Event::Navigate(view));
            }
            None => warn!("Ignoring navigation to unknown view '{}'", view),
        },
        ClientMessage::ChangeFilter(update) => match update.into_changes() {
            Ok(changes) => {
                dashboard.change_filters(changes);
            }
            Err(message) => return Some(error_message(message)),
        },
        ClientMessage::SelectSource { kind } => match parse_source_kind(&kind) {
            Ok(kind) => {
                dashboard.dispatch(Event::SelectSource(kind));
            }
            Err(message) => return Some(error_message(message)),
        },
        ClientMessage::ShowAlert { kind, message } => match show_alert_event(&kind, message) {
            Ok(event) => {
                dashboard.dispatch(event);
            }
            Err(message) => return Some(error_message(message)),
        },
        ClientMessage::DismissAlert => {
            dashboard.dispatch(Event::DismissAlert);
        }
    }
    None
}

fn error_message(message: impl Into<String>) -> ServerMessage {
    ServerMessage::Error {
        message: message.into(),
    }
}

async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), ApiError> {
    let json = serde_json::to_string(msg)?;
    sender.send(Message::Text(json.into())).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::AcceptAnyCredentials;
    use crate::config::Config;
    use crate::web::dto::ScreenDto;

    fn app_state() -> AppState {
        AppState::new(Arc::new(Config::default()), Arc::new(AcceptAnyCredentials))
    }

    async fn logged_in_state() -> AppState {
        let state = app_state();
        let reply = handle_text_message(
            r#"{"type":"login","username":"Sarah Johnson","password":"pw"}"#,
            &state,
        )
        .await;
        assert_eq!(reply, None);
        state
    }

    fn error_text(reply: Option<ServerMessage>) -> String {
        match reply {
            Some(ServerMessage::Error { message }) => message,
            other => panic!("expected an error reply, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn shell_messages_are_refused_while_logged_out() {
        let state = app_state();
        let reply =
            handle_text_message(r#"{"type":"select_source","kind":"press"}"#, &state).await;
        assert_eq!(error_text(reply), "Not logged in");
        assert!(!state.dashboard.is_logged_in());
    }

    #[tokio::test]
    async fn malformed_messages_get_an_error_reply() {
        let state = app_state();
        let reply = handle_text_message(r#"{"type":"teleport"}"#, &state).await;
        assert!(error_text(reply).starts_with("Malformed message"));
    }

    #[tokio::test]
    async fn a_second_login_is_refused() {
        let state = logged_in_state().await;
        let reply = handle_text_message(
            r#"{"type":"login","username":"Mallory","password":"pw"}"#,
            &state,
        )
        .await;
        assert_eq!(error_text(reply), "Already logged in");
    }

    #[tokio::test]
    async fn unknown_source_kinds_are_refused() {
        let state = logged_in_state().await;
        let reply =
            handle_text_message(r#"{"type":"select_source","kind":"podcast"}"#, &state).await;
        assert_eq!(error_text(reply), "Unknown source kind 'podcast'");
    }

    #[tokio::test]
    async fn select_source_pushes_a_snapshot_with_the_banner() {
        let state = logged_in_state().await;
        let mut revisions = state.dashboard.subscribe();
        let _ = revisions.borrow_and_update();
        let (outbox, mut outbox_rx) = mpsc::unbounded_channel();
        let token = CancellationToken::new();
        let push_task = tokio::spawn(push_snapshots(
            state.dashboard.clone(),
            revisions,
            outbox,
            token.clone(),
        ));

        let reply =
            handle_text_message(r#"{"type":"select_source","kind":"social"}"#, &state).await;
        assert_eq!(reply, None);

        let pushed = outbox_rx.recv().await.expect("a pushed snapshot");
        let ServerMessage::Snapshot {
            screen: ScreenDto::Shell { alert, .. },
        } = pushed
        else {
            panic!("expected a shell snapshot, got {:?}", pushed);
        };
        let alert = alert.expect("info banner");
        assert_eq!(alert.kind, "info");
        assert_eq!(alert.message, "Filtering mentions by social sources...");

        token.cancel();
        push_task.await.unwrap();
    }

    #[tokio::test]
    async fn show_alert_message_raises_a_banner() {
        let state = logged_in_state().await;
        let reply = handle_text_message(
            r#"{"type":"show_alert","kind":"error","message":"Export failed"}"#,
            &state,
        )
        .await;
        assert_eq!(reply, None);
        let ScreenDto::Shell { alert, .. } = state.dashboard.snapshot() else {
            panic!("expected the shell");
        };
        assert_eq!(alert.map(|a| a.message).as_deref(), Some("Export failed"));
    }
}

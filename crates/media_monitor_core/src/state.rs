//! crates/media_monitor_core/src/state.rs
//!
//! The whole dashboard UI state and the reducer that moves it.
//!
//! `reduce` is pure: it mutates the state it is given and returns the side
//! effects (timer scheduling) for the caller to carry out. Nothing here
//! sleeps, spawns or talks to the outside world.

use crate::alert::{AlertId, AlertSlot, DismissTicket, DEFAULT_ALERT_TTL};
use crate::catalog::Catalog;
use crate::domain::{AlertKind, SourceKind, View};
use crate::filter::{FilterChange, FilterState};
use crate::session::{validate_login, LoginErrors, LoginField, Session};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub session: Session,
    pub view: View,
    pub filters: FilterState,
    pub login_errors: LoginErrors,
    pub alert: AlertSlot,
    alert_ttl: Duration,
    welcome_message: String,
}

/// A discrete user interaction or timer callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Login { username: String, password: String },
    /// A credential verifier refused an attempt that passed form validation.
    CredentialsRejected,
    EditLoginField(LoginField),
    Logout,
    Navigate(View),
    ChangeFilter(FilterChange),
    /// A row of the sources overview table was clicked.
    SelectSource(SourceKind),
    ShowAlert { kind: AlertKind, message: String },
    DismissAlert,
    AlertExpired(AlertId),
}

/// Work the reducer asks its owner to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Arm the auto-dismiss timer, replacing any pending one.
    ScheduleDismiss(DismissTicket),
    /// Disarm the pending auto-dismiss timer, if any.
    CancelDismiss,
}

impl DashboardState {
    pub fn new(alert_ttl: Duration, catalog: &Catalog) -> Self {
        Self {
            session: Session::LoggedOut,
            view: View::default(),
            filters: FilterState::default(),
            login_errors: LoginErrors::default(),
            alert: AlertSlot::default(),
            alert_ttl,
            welcome_message: format!(
                "Welcome back! You have {} new urgent alerts that require attention.",
                catalog.metrics.urgent_alerts
            ),
        }
    }

    /// Value-style transition: `(state, event) -> (state', effects)`.
    pub fn next(mut self, event: Event) -> (Self, Vec<Effect>) {
        let effects = reduce(&mut self, event);
        (self, effects)
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_ALERT_TTL, &Catalog::sample())
    }
}

pub fn reduce(state: &mut DashboardState, event: Event) -> Vec<Effect> {
    if !state.session.is_logged_in() {
        return reduce_logged_out(state, event);
    }
    match event {
        Event::Logout => {
            state.session = Session::LoggedOut;
            state.view = View::Dashboard;
            state.filters = FilterState::default();
            state.login_errors = LoginErrors::default();
            state.alert.dismiss();
            vec![Effect::CancelDismiss]
        }
        Event::Navigate(view) => {
            state.view = view;
            Vec::new()
        }
        Event::ChangeFilter(change) => {
            state.filters.apply(change);
            Vec::new()
        }
        Event::SelectSource(kind) => {
            let ticket = state.alert.show_transient(
                AlertKind::Info,
                format!("Filtering mentions by {kind} sources..."),
                state.alert_ttl,
            );
            vec![Effect::ScheduleDismiss(ticket)]
        }
        Event::ShowAlert { kind, message } => {
            state.alert.show(kind, message);
            vec![Effect::CancelDismiss]
        }
        Event::DismissAlert => {
            if state.alert.dismiss() {
                vec![Effect::CancelDismiss]
            } else {
                Vec::new()
            }
        }
        Event::AlertExpired(id) => {
            if !state.alert.expire(id) {
                debug!(alert = id.get(), "Ignoring expiry for a banner that is no longer shown");
            }
            Vec::new()
        }
        Event::Login { .. } | Event::CredentialsRejected | Event::EditLoginField(_) => {
            debug!("Ignoring login form event while logged in");
            Vec::new()
        }
    }
}

fn reduce_logged_out(state: &mut DashboardState, event: Event) -> Vec<Effect> {
    match event {
        Event::Login { username, password } => match validate_login(&username, &password) {
            Ok(credentials) => {
                state.session = Session::LoggedIn {
                    display_name: credentials.username,
                };
                state.view = View::Dashboard;
                state.login_errors = LoginErrors::default();
                state.alert.show(AlertKind::Success, state.welcome_message.clone());
                vec![Effect::CancelDismiss]
            }
            Err(errors) => {
                state.login_errors = errors;
                Vec::new()
            }
        },
        Event::CredentialsRejected => {
            state.login_errors = LoginErrors::rejected();
            Vec::new()
        }
        Event::EditLoginField(field) => {
            state.login_errors.clear(field);
            state.login_errors.form = None;
            Vec::new()
        }
        // A timer armed before logout may still fire; there is nothing to clear.
        Event::AlertExpired(_) => Vec::new(),
        other => {
            debug!(event = ?other, "Ignoring event while logged out");
            Vec::new()
        }
    }
}

//! services/api/src/web/controller.rs
//!
//! Owns the single dashboard state and carries out the effects the reducer
//! asks for. Every interaction, from REST, WebSocket or a timer, goes through
//! `DashboardController::dispatch`.

use crate::web::alert_timer::dismiss_after;
use crate::web::dto::{InsightsDto, MentionDto, ScreenDto};
use media_monitor_core::{
    reduce, validate_login, AlertId, Catalog, CredentialVerifier, Credentials, DashboardState,
    Effect, Event, FilterChange, Insights, PortError, PortResult, Screen, SourceKind,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// The outcome of a login attempt, with the screen it produced.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    LoggedIn(ScreenDto),
    /// Someone is already logged in; the attempt changed nothing.
    AlreadyLoggedIn(ScreenDto),
    /// Form validation failed; the screen carries the field errors.
    Invalid(ScreenDto),
    /// The credential verifier refused the attempt.
    Rejected(ScreenDto),
}

struct PendingDismiss {
    alert: AlertId,
    token: CancellationToken,
}

struct Inner {
    state: DashboardState,
    pending: Option<PendingDismiss>,
}

pub struct DashboardController {
    catalog: Catalog,
    inner: Mutex<Inner>,
    revisions: watch::Sender<u64>,
}

impl DashboardController {
    pub fn new(catalog: Catalog, alert_ttl: Duration) -> Arc<Self> {
        let state = DashboardState::new(alert_ttl, &catalog);
        let (revisions, _) = watch::channel(0);
        Arc::new(Self {
            catalog,
            inner: Mutex::new(Inner {
                state,
                pending: None,
            }),
            revisions,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies one event, performs its effects and returns the new screen.
    ///
    /// Must be called from within a Tokio runtime: scheduling an auto-dismiss
    /// spawns a task.
    pub fn dispatch(self: &Arc<Self>, event: Event) -> ScreenDto {
        let mut inner = self.lock();
        self.apply(&mut inner, event);
        self.publish(inner)
    }

    /// Applies several filter changes as one update with a single revision.
    pub fn change_filters(self: &Arc<Self>, changes: Vec<FilterChange>) -> ScreenDto {
        if changes.is_empty() {
            return self.snapshot();
        }
        let mut inner = self.lock();
        for change in changes {
            self.apply(&mut inner, Event::ChangeFilter(change));
        }
        self.publish(inner)
    }

    fn apply(self: &Arc<Self>, inner: &mut Inner, event: Event) {
        if let Event::AlertExpired(id) = &event {
            if inner.pending.as_ref().is_some_and(|p| p.alert == *id) {
                inner.pending = None;
            }
        }

        for effect in reduce(&mut inner.state, event) {
            match effect {
                Effect::ScheduleDismiss(ticket) => {
                    if let Some(previous) = inner.pending.take() {
                        previous.token.cancel();
                    }
                    let token = CancellationToken::new();
                    tokio::spawn(dismiss_after(
                        Arc::downgrade(self),
                        ticket,
                        token.clone(),
                    ));
                    debug!(alert = ticket.alert.get(), after = ?ticket.after, "Scheduled auto-dismiss");
                    inner.pending = Some(PendingDismiss {
                        alert: ticket.alert,
                        token,
                    });
                }
                Effect::CancelDismiss => {
                    if let Some(pending) = inner.pending.take() {
                        debug!(alert = pending.alert.get(), "Cancelled auto-dismiss");
                        pending.token.cancel();
                    }
                }
            }
        }
    }

    /// Projects the screen, releases the lock, then bumps the revision.
    fn publish(&self, inner: MutexGuard<'_, Inner>) -> ScreenDto {
        let screen = ScreenDto::from(&Screen::project(&inner.state, &self.catalog));
        drop(inner);
        self.revisions.send_modify(|revision| *revision += 1);
        screen
    }

    /// Validates the form, asks the verifier, then logs in.
    ///
    /// While a session is active every attempt is answered with
    /// `AlreadyLoggedIn` and the verifier is not consulted.
    pub async fn login(
        self: &Arc<Self>,
        verifier: &dyn CredentialVerifier,
        username: String,
        password: String,
    ) -> PortResult<LoginOutcome> {
        if self.is_logged_in() {
            warn!("Ignoring login attempt while a session is active");
            return Ok(LoginOutcome::AlreadyLoggedIn(self.snapshot()));
        }

        let credentials = match validate_login(&username, &password) {
            Ok(credentials) => credentials,
            Err(_) => {
                let screen = self.dispatch(Event::Login { username, password });
                return Ok(LoginOutcome::Invalid(screen));
            }
        };

        match verifier.verify(&credentials).await {
            Ok(()) => {}
            Err(PortError::Unauthorized) => {
                let screen = self.dispatch(Event::CredentialsRejected);
                return Ok(LoginOutcome::Rejected(screen));
            }
            Err(e) => return Err(e),
        }

        Ok(self.complete_login(credentials))
    }

    /// Re-checks the session under the lock: another login may have finished
    /// while the verifier was running.
    fn complete_login(self: &Arc<Self>, credentials: Credentials) -> LoginOutcome {
        let mut inner = self.lock();
        if inner.state.session.is_logged_in() {
            drop(inner);
            warn!("Ignoring login attempt while a session is active");
            return LoginOutcome::AlreadyLoggedIn(self.snapshot());
        }
        let user = credentials.username.clone();
        self.apply(
            &mut inner,
            Event::Login {
                username: credentials.username,
                password: credentials.password,
            },
        );
        let screen = self.publish(inner);
        info!(user = %user, "User logged in");
        LoginOutcome::LoggedIn(screen)
    }

    pub fn snapshot(&self) -> ScreenDto {
        let inner = self.lock();
        ScreenDto::from(&Screen::project(&inner.state, &self.catalog))
    }

    pub fn is_logged_in(&self) -> bool {
        self.lock().state.session.is_logged_in()
    }

    /// Whether an auto-dismiss timer is currently armed.
    pub fn has_pending_dismiss(&self) -> bool {
        self.lock().pending.is_some()
    }

    pub fn insights(&self) -> InsightsDto {
        InsightsDto::from(&Insights::from_mentions(&self.catalog.mentions))
    }

    /// The mention feed of one source kind, in catalog order.
    pub fn mentions_from(&self, kind: SourceKind) -> Vec<MentionDto> {
        self.catalog
            .mentions_from(kind)
            .into_iter()
            .map(MentionDto::from)
            .collect()
    }

    /// Every mention flagged for immediate review, in catalog order.
    pub fn urgent_mentions(&self) -> Vec<MentionDto> {
        self.catalog
            .urgent_mentions()
            .into_iter()
            .map(MentionDto::from)
            .collect()
    }

    /// A receiver that changes after every dispatched event.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revisions.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::AcceptAnyCredentials;
    use media_monitor_core::{
        AlertKind, DateRange, Sentiment, SentimentFilter, View, DEFAULT_ALERT_TTL,
    };

    fn controller() -> Arc<DashboardController> {
        DashboardController::new(Catalog::sample(), DEFAULT_ALERT_TTL)
    }

    #[tokio::test]
    async fn blank_login_is_invalid_and_stays_logged_out() {
        let dashboard = controller();
        let outcome = dashboard
            .login(&AcceptAnyCredentials, "  ".to_string(), String::new())
            .await
            .unwrap();
        assert!(matches!(outcome, LoginOutcome::Invalid(ScreenDto::Login { .. })));
        assert!(!dashboard.is_logged_in());
    }

    #[tokio::test]
    async fn dispatch_bumps_the_revision() {
        let dashboard = controller();
        let mut revisions = dashboard.subscribe();
        dashboard.dispatch(Event::Navigate(View::Reports));
        assert!(revisions.has_changed().unwrap());
        let _ = revisions.borrow_and_update();
        dashboard.dispatch(Event::DismissAlert);
        assert!(revisions.has_changed().unwrap());
    }

    #[tokio::test]
    async fn select_source_arms_a_single_timer() {
        let dashboard = controller();
        dashboard
            .login(&AcceptAnyCredentials, "Sarah".to_string(), "pw".to_string())
            .await
            .unwrap();
        assert!(!dashboard.has_pending_dismiss());

        dashboard.dispatch(Event::SelectSource(SourceKind::Press));
        dashboard.dispatch(Event::SelectSource(SourceKind::Social));
        assert!(dashboard.has_pending_dismiss());

        dashboard.dispatch(Event::DismissAlert);
        assert!(!dashboard.has_pending_dismiss());
    }

    #[tokio::test]
    async fn empty_filter_update_returns_the_current_screen() {
        let dashboard = controller();
        assert_eq!(dashboard.change_filters(Vec::new()), dashboard.snapshot());
    }

    #[tokio::test]
    async fn a_filter_update_is_published_as_one_revision() {
        let dashboard = controller();
        dashboard
            .login(&AcceptAnyCredentials, "Sarah".to_string(), "pw".to_string())
            .await
            .unwrap();
        let mut revisions = dashboard.subscribe();
        let before = *revisions.borrow_and_update();

        dashboard.change_filters(vec![
            FilterChange::Sentiment(SentimentFilter::Only(Sentiment::Negative)),
            FilterChange::UrgentOnly(true),
            FilterChange::DateRange(DateRange::Last7Days),
        ]);

        assert_eq!(*revisions.borrow_and_update(), before + 1);
    }

    #[tokio::test(start_paused = true)]
    async fn a_shown_alert_disarms_the_pending_dismiss() {
        let dashboard = controller();
        dashboard
            .login(&AcceptAnyCredentials, "Sarah".to_string(), "pw".to_string())
            .await
            .unwrap();
        dashboard.dispatch(Event::SelectSource(SourceKind::Press));
        assert!(dashboard.has_pending_dismiss());

        dashboard.dispatch(Event::ShowAlert {
            kind: AlertKind::Error,
            message: "Export failed".to_string(),
        });
        assert!(!dashboard.has_pending_dismiss());

        tokio::time::sleep(DEFAULT_ALERT_TTL * 2).await;
        let ScreenDto::Shell { alert, .. } = dashboard.snapshot() else {
            panic!("expected the shell");
        };
        let alert = alert.expect("banner should still be shown");
        assert_eq!(alert.kind, "error");
        assert_eq!(alert.message, "Export failed");
    }
}

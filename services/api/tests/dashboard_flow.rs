//! End-to-end flows through the dashboard controller, with the Tokio clock
//! paused so the auto-dismiss timer can be stepped deterministically.

use api_lib::adapters::{AcceptAnyCredentials, Argon2PasswordVerifier};
use api_lib::web::controller::{DashboardController, LoginOutcome};
use api_lib::web::dto::{MentionListingDto, PageDto, ScreenDto, NO_MATCHES_MESSAGE};
use argon2::password_hash::{rand_core::OsRng, PasswordHasher, SaltString};
use argon2::Argon2;
use media_monitor_core::{
    Catalog, Event, FilterChange, Sentiment, SentimentFilter, SourceKind, View, DEFAULT_ALERT_TTL,
};
use std::sync::Arc;
use std::time::Duration;

const WELCOME: &str = "Welcome back! You have 8 new urgent alerts that require attention.";

async fn logged_in() -> Arc<DashboardController> {
    let dashboard = DashboardController::new(Catalog::sample(), DEFAULT_ALERT_TTL);
    let outcome = dashboard
        .login(&AcceptAnyCredentials, "Sarah Johnson".to_string(), "pw".to_string())
        .await
        .unwrap();
    assert!(matches!(outcome, LoginOutcome::LoggedIn(_)));
    dashboard
}

fn alert_message(screen: &ScreenDto) -> Option<String> {
    match screen {
        ScreenDto::Shell { alert, .. } => alert.as_ref().map(|a| a.message.clone()),
        ScreenDto::Login { .. } => None,
    }
}

/// Advances the paused clock and lets any woken timer task run.
async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

fn listed_mention_ids(screen: &ScreenDto) -> Vec<String> {
    match screen {
        ScreenDto::Shell {
            page:
                PageDto::Dashboard {
                    mentions: MentionListingDto::Matches { mentions },
                    ..
                },
            ..
        } => mentions.iter().map(|m| m.id.clone()).collect(),
        _ => Vec::new(),
    }
}

#[tokio::test(start_paused = true)]
async fn welcome_banner_stays_until_closed() {
    let dashboard = logged_in().await;
    assert_eq!(alert_message(&dashboard.snapshot()).as_deref(), Some(WELCOME));

    advance(10_000).await;
    assert_eq!(alert_message(&dashboard.snapshot()).as_deref(), Some(WELCOME));

    let screen = dashboard.dispatch(Event::DismissAlert);
    assert_eq!(alert_message(&screen), None);
}

#[tokio::test(start_paused = true)]
async fn source_banner_clears_itself_after_three_seconds() {
    let dashboard = logged_in().await;

    let screen = dashboard.dispatch(Event::SelectSource(SourceKind::Press));
    assert_eq!(
        alert_message(&screen).as_deref(),
        Some("Filtering mentions by press sources...")
    );

    advance(2_999).await;
    assert!(alert_message(&dashboard.snapshot()).is_some());

    advance(2).await;
    assert_eq!(alert_message(&dashboard.snapshot()), None);
    assert!(!dashboard.has_pending_dismiss());
}

#[tokio::test(start_paused = true)]
async fn a_closed_banner_stays_closed_when_its_timer_would_have_fired() {
    let dashboard = logged_in().await;
    dashboard.dispatch(Event::SelectSource(SourceKind::Video));

    advance(1_000).await;
    dashboard.dispatch(Event::DismissAlert);
    assert!(!dashboard.has_pending_dismiss());

    advance(5_000).await;
    assert_eq!(alert_message(&dashboard.snapshot()), None);
}

#[tokio::test(start_paused = true)]
async fn a_replaced_banner_is_not_cleared_by_the_older_timer() {
    let dashboard = logged_in().await;
    dashboard.dispatch(Event::SelectSource(SourceKind::Press));

    advance(2_000).await;
    dashboard.dispatch(Event::SelectSource(SourceKind::Social));

    // The first timer would have fired at 3000ms.
    advance(1_500).await;
    assert_eq!(
        alert_message(&dashboard.snapshot()).as_deref(),
        Some("Filtering mentions by social sources...")
    );

    advance(1_501).await;
    assert_eq!(alert_message(&dashboard.snapshot()), None);
}

#[tokio::test(start_paused = true)]
async fn logout_cancels_the_pending_dismiss() {
    let dashboard = logged_in().await;
    dashboard.dispatch(Event::SelectSource(SourceKind::Press));
    assert!(dashboard.has_pending_dismiss());

    let screen = dashboard.dispatch(Event::Logout);
    assert!(matches!(screen, ScreenDto::Login { .. }));
    assert!(!dashboard.has_pending_dismiss());

    // Logging straight back in shows the welcome banner, which must survive
    // the moment the cancelled timer was due.
    dashboard
        .login(&AcceptAnyCredentials, "Sarah".to_string(), "pw".to_string())
        .await
        .unwrap();
    advance(4_000).await;
    assert_eq!(alert_message(&dashboard.snapshot()).as_deref(), Some(WELCOME));
}

#[tokio::test]
async fn argon2_login_outcomes() {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(b"correct horse", &salt)
        .unwrap()
        .to_string();
    let verifier = Argon2PasswordVerifier::new(hash).unwrap();
    let dashboard = DashboardController::new(Catalog::sample(), DEFAULT_ALERT_TTL);

    let blank = dashboard
        .login(&verifier, String::new(), String::new())
        .await
        .unwrap();
    let LoginOutcome::Invalid(ScreenDto::Login { errors }) = blank else {
        panic!("expected field errors, got {:?}", blank);
    };
    assert_eq!(errors.username.as_deref(), Some("Username is required"));
    assert_eq!(errors.password.as_deref(), Some("Password is required"));

    let wrong = dashboard
        .login(&verifier, "sarah".to_string(), "battery staple".to_string())
        .await
        .unwrap();
    let LoginOutcome::Rejected(ScreenDto::Login { errors }) = wrong else {
        panic!("expected a rejection, got {:?}", wrong);
    };
    assert_eq!(errors.form.as_deref(), Some("Invalid username or password"));
    assert!(!dashboard.is_logged_in());

    let right = dashboard
        .login(&verifier, "sarah".to_string(), "correct horse".to_string())
        .await
        .unwrap();
    let LoginOutcome::LoggedIn(ScreenDto::Shell { user, view, .. }) = right else {
        panic!("expected the shell, got {:?}", right);
    };
    assert_eq!(user.display_name, "sarah");
    assert_eq!(view, "dashboard");
}

#[tokio::test]
async fn filters_narrow_the_list_and_survive_navigation() {
    let dashboard = logged_in().await;
    let screen = dashboard.change_filters(vec![
        FilterChange::Sentiment(SentimentFilter::Only(Sentiment::Negative)),
        FilterChange::UrgentOnly(true),
    ]);
    assert_eq!(listed_mention_ids(&screen), vec!["2", "4", "7"]);

    dashboard.dispatch(Event::Navigate(View::Admin));
    let screen = dashboard.dispatch(Event::Navigate(View::Dashboard));
    assert_eq!(listed_mention_ids(&screen), vec!["2", "4", "7"]);

    let screen = dashboard.change_filters(vec![FilterChange::Sentiment(SentimentFilter::Only(
        Sentiment::Neutral,
    ))]);
    let ScreenDto::Shell {
        page: PageDto::Dashboard { mentions, .. },
        ..
    } = screen
    else {
        panic!("expected the dashboard page");
    };
    assert_eq!(
        mentions,
        MentionListingDto::NoMatches {
            message: NO_MATCHES_MESSAGE.to_string()
        }
    );
}

#[tokio::test]
async fn a_second_login_keeps_the_first_session() {
    let dashboard = logged_in().await;
    dashboard.dispatch(Event::Navigate(View::Reports));
    let revision = *dashboard.subscribe().borrow();

    let outcome = dashboard
        .login(&AcceptAnyCredentials, "Mallory".to_string(), "pw".to_string())
        .await
        .unwrap();
    let LoginOutcome::AlreadyLoggedIn(ScreenDto::Shell { user, view, .. }) = outcome else {
        panic!("expected the existing shell, got {:?}", outcome);
    };
    assert_eq!(user.display_name, "Sarah Johnson");
    assert_eq!(view, "reports");
    assert_eq!(*dashboard.subscribe().borrow(), revision);
}

//! services/api/src/web/alert_timer.rs
//!
//! The background task that clears a transient alert banner once its time is
//! up. It can be cancelled through its `CancellationToken` at any point.

use crate::web::controller::DashboardController;
use media_monitor_core::{DismissTicket, Event};
use std::sync::Weak;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Waits `ticket.after`, then expires the banner the ticket was issued for.
///
/// Holds only a weak reference so a pending timer never keeps the controller
/// alive. Expiry of a banner that was already replaced is ignored downstream.
pub async fn dismiss_after(
    controller: Weak<DashboardController>,
    ticket: DismissTicket,
    cancellation_token: CancellationToken,
) {
    tokio::select! {
        _ = cancellation_token.cancelled() => {
            debug!(alert = ticket.alert.get(), "Auto-dismiss task cancelled.");
            return;
        }
        _ = tokio::time::sleep(ticket.after) => {}
    }

    let Some(controller) = controller.upgrade() else {
        return;
    };
    info!(alert = ticket.alert.get(), "Auto-dismissing alert banner.");
    controller.dispatch(Event::AlertExpired(ticket.alert));
}

//! crates/media_monitor_core/src/alert.rs
//!
//! The single alert banner shown under the navigation bar.
//!
//! Every `show` mints a fresh `AlertId`. A scheduled auto-dismiss carries the
//! id of the banner it was scheduled for and only clears that banner, so a
//! timer that fires after the banner was replaced or dismissed is a no-op.

use crate::domain::AlertKind;
use std::time::Duration;

/// How long a transient banner stays up by default.
pub const DEFAULT_ALERT_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(u64);

impl AlertId {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertBanner {
    pub id: AlertId,
    pub kind: AlertKind,
    pub message: String,
}

/// A pending auto-dismiss for one banner instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    pub alert: AlertId,
    pub after: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct AlertSlot {
    current: Option<AlertBanner>,
    generation: u64,
}

impl AlertSlot {
    pub fn current(&self) -> Option<&AlertBanner> {
        self.current.as_ref()
    }

    /// Replaces whatever is shown, immediately.
    pub fn show(&mut self, kind: AlertKind, message: impl Into<String>) -> AlertId {
        self.generation += 1;
        let id = AlertId(self.generation);
        self.current = Some(AlertBanner {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// `show`, plus a ticket the caller should redeem with `expire` after `after`.
    pub fn show_transient(
        &mut self,
        kind: AlertKind,
        message: impl Into<String>,
        after: Duration,
    ) -> DismissTicket {
        let alert = self.show(kind, message);
        DismissTicket { alert, after }
    }

    /// Clears the banner. Returns whether one was shown.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clears the banner only if it is still the instance `id` refers to.
    pub fn expire(&mut self, id: AlertId) -> bool {
        match &self.current {
            Some(banner) if banner.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_replaces_immediately() {
        let mut slot = AlertSlot::default();
        slot.show(AlertKind::Success, "first");
        let second = slot.show(AlertKind::Error, "second");
        let banner = slot.current().unwrap();
        assert_eq!(banner.id, second);
        assert_eq!(banner.message, "second");
        assert_eq!(banner.kind, AlertKind::Error);
    }

    #[test]
    fn expire_clears_the_banner_it_was_issued_for() {
        let mut slot = AlertSlot::default();
        let ticket = slot.show_transient(AlertKind::Info, "hello", DEFAULT_ALERT_TTL);
        assert_eq!(ticket.after, Duration::from_millis(3000));
        assert!(slot.expire(ticket.alert));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_ticket_does_not_clear_a_newer_banner() {
        let mut slot = AlertSlot::default();
        let ticket = slot.show_transient(AlertKind::Info, "old", DEFAULT_ALERT_TTL);
        slot.show(AlertKind::Success, "new");
        assert!(!slot.expire(ticket.alert));
        assert_eq!(slot.current().unwrap().message, "new");
    }

    #[test]
    fn stale_ticket_after_dismiss_and_reshow_is_ignored() {
        let mut slot = AlertSlot::default();
        let ticket = slot.show_transient(AlertKind::Info, "same text", DEFAULT_ALERT_TTL);
        assert!(slot.dismiss());
        slot.show(AlertKind::Info, "same text");
        assert!(!slot.expire(ticket.alert));
        assert!(slot.current().is_some());
    }

    #[test]
    fn dismiss_reports_whether_anything_was_shown() {
        let mut slot = AlertSlot::default();
        assert!(!slot.dismiss());
        slot.show(AlertKind::Info, "x");
        assert!(slot.dismiss());
        assert!(slot.current().is_none());
    }
}

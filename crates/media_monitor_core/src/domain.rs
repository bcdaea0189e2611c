//! crates/media_monitor_core/src/domain.rs
//!
//! Defines the pure, core data structures for the dashboard.
//! These types are independent of any transport or serialization format;
//! the `as_str`/`parse` pairs give the stable wire names used at the edges.

use std::fmt;

/// The channel category a mention came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Press,
    Social,
    Video,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] = [SourceKind::Press, SourceKind::Social, SourceKind::Video];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Press => "press",
            SourceKind::Social => "social",
            SourceKind::Video => "video",
        }
    }

    /// Parses a wire name. `youtube` is the legacy name for video sources.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "press" => Some(SourceKind::Press),
            "social" => Some(SourceKind::Social),
            "video" | "youtube" => Some(SourceKind::Video),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tone classification of a mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "negative" => Some(Sentiment::Negative),
            "neutral" => Some(Sentiment::Neutral),
            _ => None,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three views reachable from the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Reports,
    Admin,
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Reports => "reports",
            View::Admin => "admin",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dashboard" => Some(View::Dashboard),
            "reports" => Some(View::Reports),
            "admin" => Some(View::Admin),
            _ => None,
        }
    }
}

/// Visual variant of an alert banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Info,
    Success,
    Error,
}

impl AlertKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertKind::Info => "info",
            AlertKind::Success => "success",
            AlertKind::Error => "error",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "info" => Some(AlertKind::Info),
            "success" => Some(AlertKind::Success),
            "error" => Some(AlertKind::Error),
            _ => None,
        }
    }
}

/// A single recorded instance of a tracked company appearing in a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub id: String,
    pub source_kind: SourceKind,
    /// Human-readable relative time, e.g. "2 hours ago".
    pub timestamp: String,
    pub title: String,
    pub url: String,
    pub company: String,
    pub source_name: String,
    pub sentiment: Sentiment,
    pub is_urgent: bool,
    pub excerpt: String,
}

/// One row of the sources overview table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSummary {
    pub kind: SourceKind,
    pub sources: u32,
    pub mentions: u32,
    pub urgent: u32,
}

/// Headline numbers shown on the dashboard metric cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardMetrics {
    pub companies_tracked: u32,
    pub mentions_this_period: u32,
    pub urgent_alerts: u32,
}

/// A pre-built report listed on the reports view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub period: String,
    pub mentions: u32,
    /// Change versus the previous period, in percent.
    pub trend_percent: i32,
}

impl Report {
    /// Signed trend label, e.g. "+12%" or "-3%".
    pub fn trend_label(&self) -> String {
        format!("{:+}%", self.trend_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportStats {
    pub total_reports: u32,
    pub this_month: u32,
    pub avg_response_hours: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyStatus {
    Active,
    Paused,
}

impl CompanyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CompanyStatus::Active => "active",
            CompanyStatus::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedCompany {
    pub id: u32,
    pub name: String,
    pub sources: u32,
    pub status: CompanyStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Analyst,
    Viewer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Analyst => "analyst",
            Role::Viewer => "viewer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub last_active: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminStats {
    pub companies: u32,
    pub active_users: u32,
    pub alert_rules: u32,
    pub integrations: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_kind_accepts_legacy_youtube_name() {
        assert_eq!(SourceKind::parse("youtube"), Some(SourceKind::Video));
        assert_eq!(SourceKind::parse(" Press "), Some(SourceKind::Press));
        assert_eq!(SourceKind::parse("radio"), None);
    }

    #[test]
    fn view_parse_is_exact() {
        assert_eq!(View::parse("reports"), Some(View::Reports));
        assert_eq!(View::parse("Reports"), None);
        assert_eq!(View::parse("settings"), None);
        assert_eq!(View::default(), View::Dashboard);
    }

    #[test]
    fn report_trend_label_is_signed() {
        let report = Report {
            id: 1,
            title: "t".into(),
            description: "d".into(),
            period: "p".into(),
            mentions: 1,
            trend_percent: -3,
        };
        assert_eq!(report.trend_label(), "-3%");
        let up = Report { trend_percent: 12, ..report };
        assert_eq!(up.trend_label(), "+12%");
    }
}

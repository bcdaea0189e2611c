pub mod alert;
pub mod catalog;
pub mod domain;
pub mod filter;
pub mod insights;
pub mod ports;
pub mod screen;
pub mod session;
pub mod state;

pub use alert::{AlertBanner, AlertId, AlertSlot, DismissTicket, DEFAULT_ALERT_TTL};
pub use catalog::Catalog;
pub use domain::{
    AdminStats, AlertKind, CompanyStatus, DashboardMetrics, Mention, Report, ReportStats, Role,
    Sentiment, SourceKind, SourceSummary, TeamMember, TrackedCompany, View,
};
pub use filter::{
    filter_mentions, DateRange, FilterChange, FilterDimension, FilterState, MentionListing,
    SentimentFilter,
};
pub use insights::Insights;
pub use ports::{CredentialVerifier, PortError, PortResult};
pub use screen::{Page, Screen, Shell, UserBadge};
pub use session::{initials, validate_login, Credentials, LoginErrors, LoginField, Session};
pub use state::{reduce, DashboardState, Effect, Event};

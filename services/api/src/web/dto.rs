//! services/api/src/web/dto.rs
//!
//! Serializable payloads for everything the renderer receives. The core crate
//! stays serialization-free; these structs are built from its projections.

use media_monitor_core::{
    AdminStats, AlertBanner, DashboardMetrics, FilterDimension, FilterState, Insights, LoginErrors,
    Mention, MentionListing, Page, Report, ReportStats, Screen, SourceSummary, TeamMember,
    TrackedCompany,
};
use serde::Serialize;
use utoipa::ToSchema;

pub const NO_MATCHES_MESSAGE: &str = "No mentions found for these filters";

//=========================================================================================
// Screen
//=========================================================================================

/// The complete state a renderer needs to draw the current screen.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum ScreenDto {
    /// Nobody is logged in; only the login form is shown.
    Login { errors: LoginErrorsDto },
    /// The navigation shell with the active page.
    Shell {
        user: UserDto,
        view: String,
        alert: Option<AlertDto>,
        page: PageDto,
    },
}

impl ScreenDto {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, ScreenDto::Shell { .. })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct LoginErrorsDto {
    pub username: Option<String>,
    pub password: Option<String>,
    pub form: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserDto {
    pub display_name: String,
    pub initials: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct AlertDto {
    pub id: u64,
    /// `info`, `success` or `error`.
    pub kind: String,
    pub message: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageDto {
    Dashboard {
        metrics: MetricsDto,
        sources: Vec<SourceSummaryDto>,
        filters: FiltersDto,
        mentions: MentionListingDto,
    },
    Reports {
        stats: ReportStatsDto,
        reports: Vec<ReportDto>,
        insights: InsightsDto,
    },
    Admin {
        stats: AdminStatsDto,
        companies: Vec<CompanyDto>,
        team: Vec<TeamMemberDto>,
    },
}

//=========================================================================================
// Dashboard Page
//=========================================================================================

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct MetricsDto {
    pub companies_tracked: u32,
    pub mentions_this_period: u32,
    pub urgent_alerts: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct SourceSummaryDto {
    pub kind: String,
    pub sources: u32,
    pub mentions: u32,
    pub urgent: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FiltersDto {
    pub date_range: String,
    pub sentiment: String,
    pub urgent_only: bool,
    /// Controls that are shown but do not narrow the list yet.
    pub unapplied: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct MentionDto {
    pub id: String,
    pub source_kind: String,
    pub timestamp: String,
    pub title: String,
    pub url: String,
    pub company: String,
    pub source_name: String,
    pub sentiment: String,
    pub is_urgent: bool,
    pub excerpt: String,
}

/// The mentions panel: a list, or one of two distinct empty states.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MentionListingDto {
    Matches { mentions: Vec<MentionDto> },
    NoMatches { message: String },
    NoMentions,
}

//=========================================================================================
// Reports Page
//=========================================================================================

#[derive(Serialize, Debug, Clone, Copy, PartialEq, ToSchema)]
pub struct ReportStatsDto {
    pub total_reports: u32,
    pub this_month: u32,
    pub avg_response_hours: f32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct ReportDto {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub period: String,
    pub mentions: u32,
    pub trend: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CountDto {
    pub label: String,
    pub count: usize,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct InsightsDto {
    pub by_sentiment: Vec<CountDto>,
    pub by_company: Vec<CountDto>,
    pub by_source: Vec<CountDto>,
    pub urgent: usize,
    pub total: usize,
}

//=========================================================================================
// Admin Page
//=========================================================================================

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
pub struct AdminStatsDto {
    pub companies: u32,
    pub active_users: u32,
    pub alert_rules: u32,
    pub integrations: u32,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct CompanyDto {
    pub id: u32,
    pub name: String,
    pub sources: u32,
    pub status: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct TeamMemberDto {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: String,
    pub last_active: String,
}

//=========================================================================================
// Conversions From Core Projections
//=========================================================================================

impl From<&Screen<'_>> for ScreenDto {
    fn from(screen: &Screen<'_>) -> Self {
        match screen {
            Screen::Login { errors } => ScreenDto::Login {
                errors: LoginErrorsDto::from(*errors),
            },
            Screen::Shell(shell) => ScreenDto::Shell {
                user: UserDto {
                    display_name: shell.user.display_name.to_string(),
                    initials: shell.user.initials.clone(),
                },
                view: shell.view.as_str().to_string(),
                alert: shell.alert.map(AlertDto::from),
                page: PageDto::from(&shell.page),
            },
        }
    }
}

impl From<&LoginErrors> for LoginErrorsDto {
    fn from(errors: &LoginErrors) -> Self {
        Self {
            username: errors.username.map(str::to_string),
            password: errors.password.map(str::to_string),
            form: errors.form.map(str::to_string),
        }
    }
}

impl From<&AlertBanner> for AlertDto {
    fn from(banner: &AlertBanner) -> Self {
        Self {
            id: banner.id.get(),
            kind: banner.kind.as_str().to_string(),
            message: banner.message.clone(),
        }
    }
}

impl From<&Page<'_>> for PageDto {
    fn from(page: &Page<'_>) -> Self {
        match page {
            Page::Dashboard {
                metrics,
                sources,
                filters,
                listing,
                unapplied,
            } => PageDto::Dashboard {
                metrics: MetricsDto::from(*metrics),
                sources: sources.iter().map(SourceSummaryDto::from).collect(),
                filters: FiltersDto::new(filters, unapplied),
                mentions: MentionListingDto::from(listing),
            },
            Page::Reports {
                stats,
                reports,
                insights,
            } => PageDto::Reports {
                stats: ReportStatsDto::from(*stats),
                reports: reports.iter().map(ReportDto::from).collect(),
                insights: InsightsDto::from(insights),
            },
            Page::Admin {
                stats,
                companies,
                team,
            } => PageDto::Admin {
                stats: AdminStatsDto::from(*stats),
                companies: companies.iter().map(CompanyDto::from).collect(),
                team: team.iter().map(TeamMemberDto::from).collect(),
            },
        }
    }
}

impl From<&DashboardMetrics> for MetricsDto {
    fn from(metrics: &DashboardMetrics) -> Self {
        Self {
            companies_tracked: metrics.companies_tracked,
            mentions_this_period: metrics.mentions_this_period,
            urgent_alerts: metrics.urgent_alerts,
        }
    }
}

impl From<&SourceSummary> for SourceSummaryDto {
    fn from(row: &SourceSummary) -> Self {
        Self {
            kind: row.kind.as_str().to_string(),
            sources: row.sources,
            mentions: row.mentions,
            urgent: row.urgent,
        }
    }
}

impl FiltersDto {
    fn new(filters: &FilterState, unapplied: &[FilterDimension]) -> Self {
        Self {
            date_range: filters.date_range.as_str().to_string(),
            sentiment: filters.sentiment.as_str().to_string(),
            urgent_only: filters.urgent_only,
            unapplied: unapplied
                .iter()
                .map(|dimension| match dimension {
                    FilterDimension::DateRange => "date_range".to_string(),
                })
                .collect(),
        }
    }
}

impl From<&Mention> for MentionDto {
    fn from(mention: &Mention) -> Self {
        Self {
            id: mention.id.clone(),
            source_kind: mention.source_kind.as_str().to_string(),
            timestamp: mention.timestamp.clone(),
            title: mention.title.clone(),
            url: mention.url.clone(),
            company: mention.company.clone(),
            source_name: mention.source_name.clone(),
            sentiment: mention.sentiment.as_str().to_string(),
            is_urgent: mention.is_urgent,
            excerpt: mention.excerpt.clone(),
        }
    }
}

impl From<&MentionListing<'_>> for MentionListingDto {
    fn from(listing: &MentionListing<'_>) -> Self {
        match listing {
            MentionListing::Matches(mentions) => MentionListingDto::Matches {
                mentions: mentions.iter().map(|m| MentionDto::from(*m)).collect(),
            },
            MentionListing::NoMatches => MentionListingDto::NoMatches {
                message: NO_MATCHES_MESSAGE.to_string(),
            },
            MentionListing::NoMentions => MentionListingDto::NoMentions,
        }
    }
}

impl From<&ReportStats> for ReportStatsDto {
    fn from(stats: &ReportStats) -> Self {
        Self {
            total_reports: stats.total_reports,
            this_month: stats.this_month,
            avg_response_hours: stats.avg_response_hours,
        }
    }
}

impl From<&Report> for ReportDto {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id,
            title: report.title.clone(),
            description: report.description.clone(),
            period: report.period.clone(),
            mentions: report.mentions,
            trend: report.trend_label(),
        }
    }
}

impl From<&Insights> for InsightsDto {
    fn from(insights: &Insights) -> Self {
        let count = |label: &str, count: usize| CountDto {
            label: label.to_string(),
            count,
        };
        Self {
            by_sentiment: insights
                .by_sentiment
                .iter()
                .map(|(s, n)| count(s.as_str(), *n))
                .collect(),
            by_company: insights
                .by_company
                .iter()
                .map(|(name, n)| count(name.as_str(), *n))
                .collect(),
            by_source: insights
                .by_source
                .iter()
                .map(|(k, n)| count(k.as_str(), *n))
                .collect(),
            urgent: insights.urgent,
            total: insights.total,
        }
    }
}

impl From<&AdminStats> for AdminStatsDto {
    fn from(stats: &AdminStats) -> Self {
        Self {
            companies: stats.companies,
            active_users: stats.active_users,
            alert_rules: stats.alert_rules,
            integrations: stats.integrations,
        }
    }
}

impl From<&TrackedCompany> for CompanyDto {
    fn from(company: &TrackedCompany) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            sources: company.sources,
            status: company.status.as_str().to_string(),
        }
    }
}

impl From<&TeamMember> for TeamMemberDto {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.as_str().to_string(),
            last_active: member.last_active.clone(),
        }
    }
}

//! crates/media_monitor_core/src/screen.rs
//!
//! Projects `DashboardState` plus the catalog into what a renderer draws.
//! The projection borrows from both; it is rebuilt on every change.

use crate::alert::AlertBanner;
use crate::catalog::Catalog;
use crate::domain::{
    AdminStats, DashboardMetrics, Report, ReportStats, SourceSummary, TeamMember, TrackedCompany,
    View,
};
use crate::filter::{FilterDimension, FilterState, MentionListing};
use crate::insights::Insights;
use crate::session::{initials, LoginErrors, Session};
use crate::state::DashboardState;

#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Login { errors: &'a LoginErrors },
    Shell(Shell<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shell<'a> {
    pub user: UserBadge<'a>,
    pub view: View,
    pub alert: Option<&'a AlertBanner>,
    pub page: Page<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserBadge<'a> {
    pub display_name: &'a str,
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Page<'a> {
    Dashboard {
        metrics: &'a DashboardMetrics,
        sources: &'a [SourceSummary],
        filters: &'a FilterState,
        listing: MentionListing<'a>,
        unapplied: &'static [FilterDimension],
    },
    Reports {
        stats: &'a ReportStats,
        reports: &'a [Report],
        insights: Insights,
    },
    Admin {
        stats: &'a AdminStats,
        companies: &'a [TrackedCompany],
        team: &'a [TeamMember],
    },
}

impl<'a> Screen<'a> {
    pub fn project(state: &'a DashboardState, catalog: &'a Catalog) -> Self {
        let display_name = match &state.session {
            Session::LoggedOut => {
                return Screen::Login {
                    errors: &state.login_errors,
                }
            }
            Session::LoggedIn { display_name } => display_name.as_str(),
        };

        let page = match state.view {
            View::Dashboard => Page::Dashboard {
                metrics: &catalog.metrics,
                sources: &catalog.sources,
                filters: &state.filters,
                listing: MentionListing::build(&catalog.mentions, &state.filters),
                unapplied: state.filters.unapplied_dimensions(),
            },
            View::Reports => Page::Reports {
                stats: &catalog.report_stats,
                reports: &catalog.reports,
                insights: Insights::from_mentions(&catalog.mentions),
            },
            View::Admin => Page::Admin {
                stats: &catalog.admin_stats,
                companies: &catalog.companies,
                team: &catalog.team,
            },
        };

        Screen::Shell(Shell {
            user: UserBadge {
                display_name,
                initials: initials(display_name),
            },
            view: state.view,
            alert: state.alert.current(),
            page,
        })
    }
}

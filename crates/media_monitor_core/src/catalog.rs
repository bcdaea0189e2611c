//! crates/media_monitor_core/src/catalog.rs
//!
//! The fixed, in-memory data set the dashboard renders. Nothing here grows or
//! shrinks at runtime.

use crate::domain::{
    AdminStats, CompanyStatus, DashboardMetrics, Mention, Report, ReportStats, Role, Sentiment,
    SourceKind, SourceSummary, TeamMember, TrackedCompany,
};

/// Everything the three views read from.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub metrics: DashboardMetrics,
    pub sources: Vec<SourceSummary>,
    pub mentions: Vec<Mention>,
    pub report_stats: ReportStats,
    pub reports: Vec<Report>,
    pub admin_stats: AdminStats,
    pub companies: Vec<TrackedCompany>,
    pub team: Vec<TeamMember>,
}

impl Catalog {
    /// Builds the sample data set.
    pub fn sample() -> Self {
        Self {
            metrics: DashboardMetrics {
                companies_tracked: 12,
                mentions_this_period: 4582,
                urgent_alerts: 8,
            },
            sources: vec![
                source_row(SourceKind::Press, 245, 2341, 3),
                source_row(SourceKind::Social, 1829, 1956, 5),
                source_row(SourceKind::Video, 89, 285, 0),
            ],
            mentions: sample_mentions(),
            report_stats: ReportStats {
                total_reports: 24,
                this_month: 8,
                avg_response_hours: 2.4,
            },
            reports: sample_reports(),
            admin_stats: AdminStats {
                companies: 12,
                active_users: 8,
                alert_rules: 15,
                integrations: 6,
            },
            companies: vec![
                company(1, "TechCorp", 245, CompanyStatus::Active),
                company(2, "DataCo", 189, CompanyStatus::Active),
                company(3, "InnovateLab", 156, CompanyStatus::Active),
                company(4, "GreenEnergy Corp", 134, CompanyStatus::Paused),
                company(5, "FashionBrand", 98, CompanyStatus::Active),
            ],
            team: vec![
                member(1, "Sarah Johnson", "sarah@company.com", Role::Admin, "2 hours ago"),
                member(2, "Michael Chen", "michael@company.com", Role::Analyst, "5 hours ago"),
                member(3, "Emily Davis", "emily@company.com", Role::Viewer, "1 day ago"),
            ],
        }
    }

    /// Mentions from a single source kind, in catalog order.
    pub fn mentions_from(&self, kind: SourceKind) -> Vec<&Mention> {
        self.mentions.iter().filter(|m| m.source_kind == kind).collect()
    }

    /// Mentions flagged for immediate review, in catalog order.
    pub fn urgent_mentions(&self) -> Vec<&Mention> {
        self.mentions.iter().filter(|m| m.is_urgent).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[allow(clippy::too_many_arguments)]
fn mention(
    id: &str,
    source_kind: SourceKind,
    timestamp: &str,
    title: &str,
    company: &str,
    source_name: &str,
    sentiment: Sentiment,
    is_urgent: bool,
    excerpt: &str,
) -> Mention {
    Mention {
        id: id.to_string(),
        source_kind,
        timestamp: timestamp.to_string(),
        title: title.to_string(),
        url: "#".to_string(),
        company: company.to_string(),
        source_name: source_name.to_string(),
        sentiment,
        is_urgent,
        excerpt: excerpt.to_string(),
    }
}

fn sample_mentions() -> Vec<Mention> {
    vec![
        mention(
            "1",
            SourceKind::Press,
            "2 hours ago",
            "TechCorp Announces Major Partnership with Global Retailer",
            "TechCorp",
            "Tech News Daily",
            Sentiment::Positive,
            false,
            "In a groundbreaking move, TechCorp has announced a strategic partnership that will revolutionize the retail technology landscape...",
        ),
        mention(
            "2",
            SourceKind::Social,
            "3 hours ago",
            "Customer complaints surge on Twitter regarding DataCo service outage",
            "DataCo",
            "Twitter",
            Sentiment::Negative,
            true,
            "Multiple users are reporting widespread service disruptions affecting business operations across North America and Europe...",
        ),
        mention(
            "3",
            SourceKind::Video,
            "5 hours ago",
            "InnovateLab CEO discusses future of AI in healthcare",
            "InnovateLab",
            "Tech Insights Channel",
            Sentiment::Neutral,
            false,
            "The CEO shares insights on how artificial intelligence will transform patient care and medical diagnostics over the next decade...",
        ),
        mention(
            "4",
            SourceKind::Press,
            "6 hours ago",
            "GreenEnergy Corp faces regulatory investigation",
            "GreenEnergy Corp",
            "Business Times",
            Sentiment::Negative,
            true,
            "Federal regulators have launched an investigation into the company's environmental compliance practices...",
        ),
        mention(
            "5",
            SourceKind::Social,
            "8 hours ago",
            "FashionBrand trending after celebrity endorsement",
            "FashionBrand",
            "Instagram",
            Sentiment::Positive,
            false,
            "The brand has seen a massive surge in social media engagement following a high-profile celebrity collaboration announcement...",
        ),
        mention(
            "6",
            SourceKind::Press,
            "10 hours ago",
            "FinTech Solutions reports record quarterly earnings",
            "FinTech Solutions",
            "Financial Post",
            Sentiment::Positive,
            false,
            "The financial technology company exceeded analyst expectations with a 45% year-over-year revenue growth...",
        ),
        mention(
            "7",
            SourceKind::Video,
            "12 hours ago",
            "AutoDrive safety concerns raised by consumer advocacy group",
            "AutoDrive",
            "Consumer Reports",
            Sentiment::Negative,
            true,
            "A leading consumer advocacy organization has published findings questioning the safety features of the company's latest autonomous vehicle...",
        ),
        mention(
            "8",
            SourceKind::Social,
            "14 hours ago",
            "GameStudio announces surprise game reveal at upcoming conference",
            "GameStudio",
            "Reddit",
            Sentiment::Positive,
            false,
            "Gaming community buzzes with excitement after the studio teased a major announcement for their long-awaited franchise sequel...",
        ),
    ]
}

fn sample_reports() -> Vec<Report> {
    let report = |id: u32,
                  title: &str,
                  description: &str,
                  period: &str,
                  mentions: u32,
                  trend_percent: i32| Report {
        id,
        title: title.to_string(),
        description: description.to_string(),
        period: period.to_string(),
        mentions,
        trend_percent,
    };
    vec![
        report(
            1,
            "Weekly Media Summary",
            "Comprehensive overview of all media mentions from the past week",
            "Nov 22 - Nov 29, 2025",
            1247,
            12,
        ),
        report(
            2,
            "Sentiment Analysis Report",
            "Detailed breakdown of sentiment across all tracked companies",
            "November 2025",
            4582,
            8,
        ),
        report(
            3,
            "Source Distribution",
            "Analysis of mention distribution across press, social, and video platforms",
            "November 2025",
            4582,
            -3,
        ),
        report(
            4,
            "Urgent Alerts Summary",
            "Critical mentions that required immediate attention this month",
            "November 2025",
            23,
            15,
        ),
    ]
}

fn source_row(kind: SourceKind, sources: u32, mentions: u32, urgent: u32) -> SourceSummary {
    SourceSummary {
        kind,
        sources,
        mentions,
        urgent,
    }
}

fn company(id: u32, name: &str, sources: u32, status: CompanyStatus) -> TrackedCompany {
    TrackedCompany {
        id,
        name: name.to_string(),
        sources,
        status,
    }
}

fn member(id: u32, name: &str, email: &str, role: Role, last_active: &str) -> TeamMember {
    TeamMember {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role,
        last_active: last_active.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_eight_mentions_with_unique_ids() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.mentions.len(), 8);
        let mut ids: Vec<&str> = catalog.mentions.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn mentions_from_keeps_catalog_order() {
        let catalog = Catalog::sample();
        let video: Vec<&str> = catalog
            .mentions_from(SourceKind::Video)
            .iter()
            .map(|m| m.company.as_str())
            .collect();
        assert_eq!(video, vec!["InnovateLab", "AutoDrive"]);
    }

    #[test]
    fn urgent_mentions_are_the_three_negative_stories() {
        let catalog = Catalog::sample();
        let urgent: Vec<&str> = catalog.urgent_mentions().iter().map(|m| m.id.as_str()).collect();
        assert_eq!(urgent, vec!["2", "4", "7"]);
    }
}

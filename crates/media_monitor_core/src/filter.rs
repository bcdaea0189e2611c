//! crates/media_monitor_core/src/filter.rs
//!
//! Narrowing of the fixed mention collection by the dashboard filter controls.

use crate::domain::{Mention, Sentiment};

/// The date window selected in the filter bar.
///
/// Recorded but not applied: the sample mentions carry relative display
/// timestamps only, so there is nothing to compare a window against.
/// `FilterState::unapplied_dimensions` reports this to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    Last24Hours,
    Last7Days,
    Last30Days,
}

impl DateRange {
    pub fn as_str(self) -> &'static str {
        match self {
            DateRange::Last24Hours => "24h",
            DateRange::Last7Days => "7d",
            DateRange::Last30Days => "30d",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "24h" => Some(DateRange::Last24Hours),
            "7d" => Some(DateRange::Last7Days),
            "30d" => Some(DateRange::Last30Days),
            _ => None,
        }
    }
}

/// Sentiment selector; `All` disables sentiment narrowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SentimentFilter {
    #[default]
    All,
    Only(Sentiment),
}

impl SentimentFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            SentimentFilter::All => "all",
            SentimentFilter::Only(sentiment) => sentiment.as_str(),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        if value == "all" {
            return Some(SentimentFilter::All);
        }
        Sentiment::parse(value).map(SentimentFilter::Only)
    }

    fn admits(self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Only(wanted) => wanted == sentiment,
        }
    }
}

/// A filter dimension a renderer can show but which does not narrow results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    DateRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub date_range: DateRange,
    pub sentiment: SentimentFilter,
    pub urgent_only: bool,
}

/// A single filter-control change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    DateRange(DateRange),
    Sentiment(SentimentFilter),
    UrgentOnly(bool),
}

impl FilterState {
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::DateRange(range) => self.date_range = range,
            FilterChange::Sentiment(sentiment) => self.sentiment = sentiment,
            FilterChange::UrgentOnly(urgent_only) => self.urgent_only = urgent_only,
        }
    }

    pub fn unapplied_dimensions(&self) -> &'static [FilterDimension] {
        &[FilterDimension::DateRange]
    }

    fn admits(&self, mention: &Mention) -> bool {
        if self.urgent_only && !mention.is_urgent {
            return false;
        }
        self.sentiment.admits(mention.sentiment)
    }
}

/// Returns the mentions admitted by `filters`, preserving input order.
pub fn filter_mentions<'a>(mentions: &'a [Mention], filters: &FilterState) -> Vec<&'a Mention> {
    mentions.iter().filter(|m| filters.admits(m)).collect()
}

/// What the mentions panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MentionListing<'a> {
    Matches(Vec<&'a Mention>),
    /// The collection has mentions but none pass the filters.
    NoMatches,
    /// The collection itself is empty.
    NoMentions,
}

impl<'a> MentionListing<'a> {
    pub fn build(mentions: &'a [Mention], filters: &FilterState) -> Self {
        if mentions.is_empty() {
            return MentionListing::NoMentions;
        }
        let matches = filter_mentions(mentions, filters);
        if matches.is_empty() {
            MentionListing::NoMatches
        } else {
            MentionListing::Matches(matches)
        }
    }

    pub fn mentions(&self) -> &[&'a Mention] {
        match self {
            MentionListing::Matches(matches) => matches.as_slice(),
            _ => &[],
        }
    }
}

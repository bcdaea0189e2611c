//! crates/media_monitor_core/src/insights.rs
//!
//! Aggregate counts over the mention collection, used by the reports view.

use crate::domain::{Mention, Sentiment, SourceKind};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    /// One entry per sentiment, in positive/negative/neutral order.
    pub by_sentiment: Vec<(Sentiment, usize)>,
    /// One entry per company that has mentions, ordered by company name.
    pub by_company: Vec<(String, usize)>,
    /// One entry per source kind, in press/social/video order.
    pub by_source: Vec<(SourceKind, usize)>,
    pub urgent: usize,
    pub total: usize,
}

impl Insights {
    pub fn from_mentions(mentions: &[Mention]) -> Self {
        let by_sentiment = Sentiment::ALL
            .iter()
            .map(|&s| (s, mentions.iter().filter(|m| m.sentiment == s).count()))
            .collect();

        let mut companies: BTreeMap<&str, usize> = BTreeMap::new();
        for mention in mentions {
            *companies.entry(mention.company.as_str()).or_default() += 1;
        }
        let by_company = companies
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();

        let by_source = SourceKind::ALL
            .iter()
            .map(|&k| (k, mentions.iter().filter(|m| m.source_kind == k).count()))
            .collect();

        Self {
            by_sentiment,
            by_company,
            by_source,
            urgent: mentions.iter().filter(|m| m.is_urgent).count(),
            total: mentions.len(),
        }
    }
}

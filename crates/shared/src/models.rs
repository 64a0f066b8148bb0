//! Announcement data models.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

// --- Announcements ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub name: String,
    pub difficulty: String,
    pub potential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    /// Category identifier, resolved through [`crate::CategoryCatalog`].
    pub category: String,
    pub date_label: String,
    pub summary: String,
    /// Missing in the source data means no achievements.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl Announcement {
    pub fn has_achievements(&self) -> bool {
        !self.achievements.is_empty()
    }

    /// Case-insensitive match against title, summary, category and
    /// achievement names. A blank query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);
        contains(&self.title)
            || contains(&self.summary)
            || contains(&self.category)
            || self.achievements.iter().any(|a| contains(&a.name))
    }
}

/// Keep the announcements matching `query`, in their original order.
pub fn filter_announcements(items: &[Announcement], query: &str) -> Vec<Announcement> {
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .cloned()
        .collect()
}

/// Parse a JSON array of announcements.
pub fn parse_announcements(json: &str) -> Result<Vec<Announcement>, FeedError> {
    Ok(serde_json::from_str(json)?)
}

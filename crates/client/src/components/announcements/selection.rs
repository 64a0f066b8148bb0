//! Selection state owned by a feed.

use tablon_shared::{Announcement, CategoryCatalog};

/// The announcement whose detail is open, if any.
///
/// Only [`FeedSelection::select`] and [`FeedSelection::close`] change it.
/// Replacing the feed's items leaves it untouched, so a selection can
/// outlive the item it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedSelection {
    selected: Option<Announcement>,
}

impl FeedSelection {
    /// Open the detail of `item`. Membership in the feed is not checked.
    pub fn select(&mut self, item: Announcement) {
        self.selected = Some(item);
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Announcement> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

/// Achievement entry style for the selected announcement, empty when
/// nothing is selected.
pub fn achievement_style(selected: Option<&Announcement>, catalog: &CategoryCatalog) -> &'static str {
    let Some(announcement) = selected else {
        return "";
    };

    if !catalog.contains(&announcement.category) {
        crate::log_warn!(
            "Unknown category '{}' on announcement {}, using fallback style",
            announcement.category,
            announcement.id
        );
    }

    catalog.lookup(&announcement.category).variant.achievement_class()
}

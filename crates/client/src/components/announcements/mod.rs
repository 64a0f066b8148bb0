//! Announcement components.
//!
//! - `AnnouncementsFeed`: card grid that owns the selected announcement
//! - `AnnouncementCard`: summary tile with a detail button
//! - `AnnouncementDetail`: modal body for the selected announcement

pub mod card;
pub mod detail;
pub mod feed;
pub mod selection;

pub use card::AnnouncementCard;
pub use detail::AnnouncementDetail;
pub use feed::{AnnouncementsFeed, EMPTY_FEED_MESSAGE};
pub use selection::{achievement_style, FeedSelection};

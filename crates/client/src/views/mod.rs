//! Page-level components.

pub mod announcements_page;

pub use announcements_page::AnnouncementsPage;

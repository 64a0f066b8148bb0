pub mod announcements;
pub mod ui;

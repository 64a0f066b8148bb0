//! Tablón client - Dioxus application
//!
//! Announcement feed with a detail modal, for web and desktop.

pub mod config;
pub mod logging;
pub mod storage;

pub mod components;
pub mod views;

#[cfg(test)]
mod test_utils;

pub use config::{load_feed, FeedConfig, FeedData};

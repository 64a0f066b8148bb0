//! Where the feed gets its announcements and categories from.

use tablon_shared::{parse_announcements, Announcement, CategoryCatalog, FeedError};

/// Announcements compiled into the binary.
pub const BUNDLED_ANNOUNCEMENTS: &str = include_str!("../assets/announcements.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedConfig {
    /// Read announcements from this file instead of the bundled set.
    pub announcements_path: Option<String>,
    /// Extra categories merged over the built-in catalog.
    pub categories_path: Option<String>,
}

impl FeedConfig {
    /// Environment variables:
    /// - `TABLON_ANNOUNCEMENTS_PATH`: JSON array of announcements
    /// - `TABLON_CATEGORIES_PATH`: JSON object of category configs
    ///
    /// The web build has no environment and always uses the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            announcements_path: var("TABLON_ANNOUNCEMENTS_PATH"),
            categories_path: var("TABLON_CATEGORIES_PATH"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn load_announcements(&self) -> Result<Vec<Announcement>, FeedError> {
        match &self.announcements_path {
            Some(path) => parse_announcements(&read_file(path)?),
            None => parse_announcements(BUNDLED_ANNOUNCEMENTS),
        }
    }

    pub fn load_catalog(&self) -> Result<CategoryCatalog, FeedError> {
        let mut catalog = CategoryCatalog::builtin();
        if let Some(path) = &self.categories_path {
            catalog.extend(CategoryCatalog::from_json(&read_file(path)?)?);
        }
        Ok(catalog)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &str) -> Result<String, FeedError> {
    std::fs::read_to_string(path).map_err(|e| FeedError::io(path, e))
}

#[cfg(target_arch = "wasm32")]
fn read_file(path: &str) -> Result<String, FeedError> {
    Err(FeedError::io(
        path,
        std::io::Error::new(std::io::ErrorKind::Unsupported, "no filesystem on the web"),
    ))
}

/// Everything the page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedData {
    pub announcements: Vec<Announcement>,
    pub catalog: CategoryCatalog,
}

/// Load feed data, logging failures. A broken announcements file gives an
/// empty feed; a broken categories file gives the built-in catalog.
pub fn load_feed(config: &FeedConfig) -> FeedData {
    let announcements = match config.load_announcements() {
        Ok(items) => {
            crate::log_info!("Loaded {} announcements", items.len());
            items
        }
        Err(e) => {
            crate::log_error!("Could not load announcements: {e}");
            Vec::new()
        }
    };

    let catalog = config.load_catalog().unwrap_or_else(|e| {
        crate::log_error!("Could not load categories: {e}");
        CategoryCatalog::builtin()
    });

    FeedData {
        announcements,
        catalog,
    }
}

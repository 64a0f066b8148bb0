//! Persistent user preferences.
//!
//! - Web: `localStorage`
//! - Desktop: one JSON file per key under the platform config directory
//!   (`~/.config/tablon/` on Linux)

use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Last query typed in the announcements search box.
pub const SEARCH_QUERY_KEY: &str = "tablon.search_query";

pub fn save<T: Serialize>(key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    save_raw(key, &json)
}

/// Returns `None` when the key is missing or holds something else.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_raw(key)?;
    serde_json::from_str(&json).ok()
}

pub fn remove(key: &str) {
    remove_raw(key);
}

pub fn load_search_query() -> String {
    load::<String>(SEARCH_QUERY_KEY).unwrap_or_default()
}

pub fn save_search_query(query: &str) {
    let outcome = if query.is_empty() {
        remove(SEARCH_QUERY_KEY);
        Ok(())
    } else {
        save(SEARCH_QUERY_KEY, &query)
    };

    if let Err(e) = outcome {
        crate::log_warn!("Could not persist search query: {e}");
    }
}

// --- web ---

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(target_arch = "wasm32")]
fn save_raw(key: &str, value: &str) -> Result<()> {
    let storage = local_storage().ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
    storage
        .set_item(key, value)
        .map_err(|_| anyhow::anyhow!("localStorage rejected key {key}"))
}

#[cfg(target_arch = "wasm32")]
fn load_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

#[cfg(target_arch = "wasm32")]
fn remove_raw(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

// --- desktop ---

#[cfg(not(target_arch = "wasm32"))]
fn key_path(key: &str) -> Option<std::path::PathBuf> {
    let dir = dirs::config_dir()?.join("tablon");
    let file = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(dir.join(format!("{file}.json")))
}

#[cfg(not(target_arch = "wasm32"))]
fn save_raw(key: &str, value: &str) -> Result<()> {
    use anyhow::Context;

    let path = key_path(key).context("no config directory on this platform")?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&path, value).with_context(|| format!("writing {}", path.display()))
}

#[cfg(not(target_arch = "wasm32"))]
fn load_raw(key: &str) -> Option<String> {
    std::fs::read_to_string(key_path(key)?).ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn remove_raw(key: &str) {
    if let Some(path) = key_path(key) {
        let _ = std::fs::remove_file(path);
    }
}

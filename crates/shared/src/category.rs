//! Category lookup and the style tables keyed by category variant.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Visual variant a category renders with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CategoryVariant {
    Info,
    Success,
    Warning,
    Danger,
}

impl Default for CategoryVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl CategoryVariant {
    /// Border and background classes for achievement entries.
    pub fn achievement_class(self) -> &'static str {
        match self {
            CategoryVariant::Info => "border-blue-200 bg-blue-50/40",
            CategoryVariant::Success => "border-emerald-200 bg-emerald-50/40",
            CategoryVariant::Warning => "border-amber-200 bg-amber-50/40",
            CategoryVariant::Danger => "border-red-200 bg-red-50/40",
        }
    }

    /// Classes for the category badge on a card.
    pub fn badge_class(self) -> &'static str {
        match self {
            CategoryVariant::Info => "bg-blue-50 text-blue-700 ring-blue-200",
            CategoryVariant::Success => "bg-emerald-50 text-emerald-700 ring-emerald-200",
            CategoryVariant::Warning => "bg-amber-50 text-amber-700 ring-amber-200",
            CategoryVariant::Danger => "bg-red-50 text-red-700 ring-red-200",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryConfig {
    pub label: String,
    #[serde(default)]
    pub variant: CategoryVariant,
}

impl CategoryConfig {
    pub fn new(label: impl Into<String>, variant: CategoryVariant) -> Self {
        Self {
            label: label.into(),
            variant,
        }
    }

    /// Config used for identifiers the catalog does not know.
    pub fn fallback(category: &str) -> Self {
        Self::new(category, CategoryVariant::default())
    }
}

/// Maps category identifiers to their display config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    entries: HashMap<String, CategoryConfig>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoryCatalog {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The categories the application ships with.
    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        catalog.insert("general", CategoryConfig::new("General", CategoryVariant::Info));
        catalog.insert("logro", CategoryConfig::new("Logro", CategoryVariant::Success));
        catalog.insert("aviso", CategoryConfig::new("Aviso", CategoryVariant::Warning));
        catalog.insert("urgente", CategoryConfig::new("Urgente", CategoryVariant::Danger));
        catalog
    }

    /// Parse a JSON object of `{ "<id>": { "label": .., "variant": .. } }`.
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        let entries: HashMap<String, CategoryConfig> = serde_json::from_str(json)?;
        Ok(Self { entries })
    }

    pub fn insert(&mut self, id: impl Into<String>, config: CategoryConfig) {
        self.entries.insert(id.into(), config);
    }

    /// Add every entry of `other`, overriding ids present in both.
    pub fn extend(&mut self, other: CategoryCatalog) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, category: &str) -> Option<&CategoryConfig> {
        self.entries.get(category)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    /// Total lookup: unknown identifiers get [`CategoryConfig::fallback`].
    pub fn lookup(&self, category: &str) -> CategoryConfig {
        self.get(category)
            .cloned()
            .unwrap_or_else(|| CategoryConfig::fallback(category))
    }
}

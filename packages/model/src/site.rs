use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Publication state of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Draft,
    Published,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Draft => "draft",
            SiteStatus::Published => "published",
        }
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown site status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for SiteStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(SiteStatus::Draft),
            "published" => Ok(SiteStatus::Published),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// One website record in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Opaque identity, unique across the registry.
    pub id: String,

    pub name: String,

    /// URL-safe handle, derived from `name` unless assigned explicitly.
    pub slug: String,

    /// Reference to a preview image; empty when none has been captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    pub last_edited_at: DateTime<Utc>,

    pub status: SiteStatus,

    /// Informational cached count of page modules. Not kept in sync with
    /// any page document; callers own the value.
    pub module_count: u32,
}

/// Payload for adding a site; identity and timestamp are assigned by the
/// registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSite {
    pub name: String,

    /// Derived from `name` via [`slugify`] when absent.
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(default)]
    pub thumbnail: Option<String>,

    pub status: SiteStatus,

    #[serde(default)]
    pub module_count: u32,
}

impl NewSite {
    pub fn draft(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: None,
            thumbnail: None,
            status: SiteStatus::Draft,
            module_count: 0,
        }
    }
}

/// Shallow-merge payload for updating a site: listed fields overwrite,
/// unlisted fields persist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SitePatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub status: Option<SiteStatus>,
    #[serde(default)]
    pub module_count: Option<u32>,
}

impl Site {
    /// Apply a shallow patch. The registry touches `last_edited_at`
    /// separately so this stays a pure merge.
    pub fn apply_patch(&mut self, patch: SitePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(slug) = patch.slug {
            self.slug = slug;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = Some(thumbnail);
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(module_count) = patch.module_count {
            self.module_count = module_count;
        }
    }
}

/// Derive a URL-safe slug: lowercase, alphanumerics kept, every other run
/// of characters collapsed to a single `-`, no leading or trailing `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

//! # Pagecraft Registry
//!
//! The site registry: owns the list of website records and which one, if
//! any, is open for editing. Selection is stored as a resolved value
//! snapshot, not a live reference; the registry never loads or clears a
//! page document on selection — that wiring belongs to the embedding
//! application.

mod registry;

pub use registry::SiteRegistry;

pub use pagecraft_model::{NewSite, Site, SitePatch, SiteStatus};

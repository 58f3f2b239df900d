//! # Pagecraft Model
//!
//! Shared data model for the Pagecraft editing core:
//!
//! - [`Component`] — one visual block on a page, with an open property bag
//! - [`ComponentKind`] — the closed set of block types the builder offers
//! - [`default_properties`] — the per-kind default property table
//! - [`Site`] — a website record in the registry
//! - [`IdGenerator`] — opaque, scope-seeded identity tokens
//!
//! The model carries no behavior beyond construction and shallow merging;
//! the mutation contracts live in `pagecraft-editor` and `pagecraft-registry`.

mod component;
mod defaults;
mod id;
mod site;

pub use component::{Component, ComponentKind, ParseKindError, PropertyMap, PropertyValue};
pub use defaults::default_properties;
pub use id::{scope_id, IdGenerator};
pub use site::{slugify, NewSite, ParseStatusError, Site, SitePatch, SiteStatus};

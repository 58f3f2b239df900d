//! # Pagecraft Editor
//!
//! Document store for the page currently being edited.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ input adapters: palette clicks, drag-drop,  │
//! │ properties panel → Mutation                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: PageDocument + mutations            │
//! │  - Flat ordered collection of components    │
//! │  - Selection + device view state            │
//! │  - Snapshot-based undo/redo                 │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: components (by order) → VNode     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core contracts
//!
//! 1. **Total operations**: every mutation runs to completion; a missing
//!    identity degrades to a no-op, never an error.
//! 2. **Dense order after reorders**: `move_component` renormalizes `order`
//!    to `0..n-1`; removal tolerates gaps, display sorts by `order` anyway.
//! 3. **Owned state**: `PageDocument` is a plain value handed to UI layers
//!    by reference; there is no ambient global store.
//!
//! ## Usage
//!
//! ```rust
//! use pagecraft_editor::{Mutation, PageDocument, UndoStack};
//! use pagecraft_model::ComponentKind;
//!
//! let mut doc = PageDocument::new("home");
//! let mut history = UndoStack::new();
//!
//! history.apply(&mut doc, Mutation::AddComponent { kind: ComponentKind::Heading });
//! assert_eq!(doc.len(), 1);
//!
//! history.undo(&mut doc);
//! assert!(doc.is_empty());
//! ```

mod document;
mod history;
mod mutations;

pub use document::{DeviceView, PageDocument};
pub use history::UndoStack;
pub use mutations::{MoveDirection, Mutation};

// Re-export model types the mutation surface is written in terms of.
pub use pagecraft_model::{Component, ComponentKind, PropertyMap, PropertyValue};

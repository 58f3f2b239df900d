//! # Document Mutations
//!
//! The serializable operation surface of the document store. Input adapters
//! (palette clicks, canvas drag-and-drop, the properties panel) submit these;
//! the store knows nothing about pointers or gestures.
//!
//! ## Semantics
//!
//! - Every mutation is **total**: a missing identity is a silent no-op, not
//!   an error. The UI cannot name an identity it did not obtain from the
//!   store, so the condition is unreachable in practice — but it is covered
//!   by tests, not assumed.
//! - `apply` reports whether document state actually changed, which is what
//!   the undo stack keys off.

use pagecraft_model::{ComponentKind, PropertyMap};
use serde::{Deserialize, Serialize};

use crate::document::{DeviceView, PageDocument};

/// Direction for a single-step reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    /// Toward the start of the display sequence.
    Up,
    /// Toward the end of the display sequence.
    Down,
}

/// One operation against a [`PageDocument`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Mutation {
    /// Append a new component of `kind` with default properties and select it.
    AddComponent { kind: ComponentKind },

    /// Remove a component; clears the selection if it pointed at it.
    RemoveComponent { id: String },

    /// Set the selection unconditionally (`None` clears it).
    SelectComponent { id: Option<String> },

    /// Shallow-merge properties into a component.
    UpdateComponent {
        id: String,
        properties: PropertyMap,
    },

    /// Swap a component with its display-order neighbor, clamped at the ends.
    MoveComponent { id: String, direction: MoveDirection },

    /// Append an independent copy of a component and select it.
    DuplicateComponent { id: String },

    /// Set the canvas rendering-width hint.
    SetDeviceView { view: DeviceView },
}

impl Mutation {
    /// Apply to `doc`. Returns whether document state changed.
    pub fn apply(&self, doc: &mut PageDocument) -> bool {
        match self {
            Mutation::AddComponent { kind } => {
                doc.add_component(*kind);
                true
            }

            Mutation::RemoveComponent { id } => doc.remove_component(id),

            Mutation::SelectComponent { id } => {
                doc.select_component(id.clone());
                true
            }

            Mutation::UpdateComponent { id, properties } => {
                doc.update_component(id, properties.clone())
            }

            Mutation::MoveComponent { id, direction } => doc.move_component(id, *direction),

            Mutation::DuplicateComponent { id } => doc.duplicate_component(id).is_some(),

            Mutation::SetDeviceView { view } => {
                doc.set_device_view(*view);
                true
            }
        }
    }
}

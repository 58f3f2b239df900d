//! # Undo/Redo Stack
//!
//! Snapshot-based history for the document store.
//!
//! ## Design
//!
//! - Before a mutation is applied, the document's state is captured
//! - If the mutation actually changed anything, the captured snapshot is
//!   pushed onto the undo stack and the redo stack is cleared
//! - No-op mutations (missing identity, clamped move) record nothing
//! - Undo restores the top snapshot and pushes the pre-undo state onto the
//!   redo stack; redo mirrors that
//!
//! Snapshots cover components and selection. The device view is a
//! rendering-width hint, not document content, so it is not part of history:
//! a view change is applied directly, records no undo level, and leaves the
//! redo stack intact.
//!
//! ## Example
//!
//! ```rust
//! use pagecraft_editor::{Mutation, PageDocument, UndoStack};
//! use pagecraft_model::ComponentKind;
//!
//! let mut doc = PageDocument::new("home");
//! let mut stack = UndoStack::new();
//!
//! stack.apply(&mut doc, Mutation::AddComponent { kind: ComponentKind::Hero });
//! assert!(stack.can_undo());
//!
//! stack.undo(&mut doc);
//! assert!(doc.is_empty());
//!
//! stack.redo(&mut doc);
//! assert_eq!(doc.len(), 1);
//! ```

use pagecraft_model::Component;

use crate::document::PageDocument;
use crate::mutations::Mutation;

/// Captured document state: components plus selection.
#[derive(Debug, Clone)]
struct Snapshot {
    components: Vec<Component>,
    selected: Option<String>,
}

impl Snapshot {
    fn capture(doc: &PageDocument) -> Self {
        let (components, selected) = doc.state();
        Self {
            components,
            selected,
        }
    }

    fn restore(self, doc: &mut PageDocument) {
        doc.restore(self.components, self.selected);
    }
}

/// Undo/redo stack for document editing.
#[derive(Debug)]
pub struct UndoStack {
    /// Snapshots taken before each applied change (most recent last).
    undo_stack: Vec<Snapshot>,

    /// Snapshots captured by undo (most recent last).
    redo_stack: Vec<Snapshot>,

    /// Maximum number of undo levels (0 = unlimited).
    max_levels: usize,
}

impl UndoStack {
    /// Create a stack with the default cap of 100 levels.
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Apply a mutation, recording the prior state when it changes anything.
    /// Returns whether document state changed.
    ///
    /// Device-view changes are applied but never recorded: snapshots do not
    /// cover the view, so spending a history level (and clearing the redo
    /// future) on one would leave undo with nothing to restore.
    pub fn apply(&mut self, doc: &mut PageDocument, mutation: Mutation) -> bool {
        if let Mutation::SetDeviceView { view } = mutation {
            doc.set_device_view(view);
            return true;
        }

        let before = Snapshot::capture(doc);
        let changed = mutation.apply(doc);

        if changed {
            self.push(before);
        }

        changed
    }

    fn push(&mut self, snapshot: Snapshot) {
        self.undo_stack.push(snapshot);

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // A new change invalidates the redo future.
        self.redo_stack.clear();
    }

    /// Undo the most recent change. Returns whether anything was undone.
    pub fn undo(&mut self, doc: &mut PageDocument) -> bool {
        match self.undo_stack.pop() {
            Some(snapshot) => {
                self.redo_stack.push(Snapshot::capture(doc));
                snapshot.restore(doc);
                true
            }
            None => false,
        }
    }

    /// Redo the most recently undone change. Returns whether anything was
    /// redone.
    pub fn redo(&mut self, doc: &mut PageDocument) -> bool {
        match self.redo_stack.pop() {
            Some(snapshot) => {
                self.undo_stack.push(Snapshot::capture(doc));
                snapshot.restore(doc);
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

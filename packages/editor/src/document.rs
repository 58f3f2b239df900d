//! # Page Document
//!
//! The document store: a flat, ordered collection of page components plus
//! selection and device-view state for one page being edited.
//!
//! Storage order of the backing vec is irrelevant; display position is the
//! `order` field, read through [`PageDocument::components_ordered`].

use pagecraft_model::{default_properties, Component, ComponentKind, IdGenerator, PropertyMap};
use serde::{Deserialize, Serialize};

use crate::mutations::MoveDirection;

/// Rendering-width hint for the canvas. No effect on component data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceView {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

/// The page being edited.
#[derive(Debug, Clone)]
pub struct PageDocument {
    components: Vec<Component>,

    /// Weak reference by identity into `components`. May dangle after a
    /// caller-supplied select; a dangling selection resolves to `None`.
    selected: Option<String>,

    device: DeviceView,

    ids: IdGenerator,

    /// Increments on every state change (never on no-ops).
    version: u64,
}

impl PageDocument {
    /// Create an empty document for the page named `page`.
    pub fn new(page: &str) -> Self {
        Self {
            components: Vec::new(),
            selected: None,
            device: DeviceView::default(),
            ids: IdGenerator::new(&format!("page://{}", page)),
            version: 0,
        }
    }

    // --- mutations ------------------------------------------------------

    /// Add a component of `kind` with its default properties, appended at
    /// the end of the display sequence and selected. Always succeeds;
    /// returns the new identity.
    pub fn add_component(&mut self, kind: ComponentKind) -> String {
        let id = self.ids.new_id();
        let order = self.components.len() as u32;

        self.components.push(Component::new(
            id.clone(),
            kind,
            default_properties(kind),
            order,
        ));
        self.selected = Some(id.clone());
        self.version += 1;

        tracing::debug!(id = %id, kind = %kind, order, "add component");
        id
    }

    /// Remove the component with `id`, clearing the selection if it pointed
    /// at it. Remaining `order` values are left as-is (gaps are fine).
    /// Returns whether anything was removed.
    pub fn remove_component(&mut self, id: &str) -> bool {
        let Some(index) = self.components.iter().position(|c| c.id == id) else {
            tracing::warn!(id, "remove: no such component");
            return false;
        };

        self.components.remove(index);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.version += 1;

        tracing::debug!(id, "remove component");
        true
    }

    /// Set the selection unconditionally. Existence is not checked; the
    /// properties panel simply renders nothing for a dangling selection.
    pub fn select_component(&mut self, id: Option<String>) {
        self.selected = id;
        self.version += 1;
    }

    /// Shallow-merge `patch` into the target's properties. Never changes
    /// `kind` or `order`. Returns whether a component was updated.
    pub fn update_component(&mut self, id: &str, patch: PropertyMap) -> bool {
        let Some(component) = self.components.iter_mut().find(|c| c.id == id) else {
            tracing::warn!(id, "update: no such component");
            return false;
        };

        component.merge_properties(patch);
        self.version += 1;

        tracing::debug!(id, "update component properties");
        true
    }

    /// Swap the target with its immediate neighbor in the `order`-sorted
    /// sequence. Clamped at both ends: moving the first component up or the
    /// last down is a no-op. Afterwards `order` is reassigned densely
    /// `0..n-1` over the new sequence. Returns whether positions changed.
    pub fn move_component(&mut self, id: &str, direction: MoveDirection) -> bool {
        // Indices into `self.components`, in display order.
        let mut sequence: Vec<usize> = (0..self.components.len()).collect();
        sequence.sort_by_key(|&i| self.components[i].order);

        let Some(position) = sequence.iter().position(|&i| self.components[i].id == id) else {
            tracing::warn!(id, "move: no such component");
            return false;
        };

        let neighbor = match direction {
            MoveDirection::Up if position > 0 => position - 1,
            MoveDirection::Down if position + 1 < sequence.len() => position + 1,
            _ => return false, // clamped at the end
        };

        sequence.swap(position, neighbor);
        for (display, &index) in sequence.iter().enumerate() {
            self.components[index].order = display as u32;
        }
        self.version += 1;

        tracing::debug!(id, ?direction, "move component");
        true
    }

    /// Create an independent copy of the target (same `kind`, cloned
    /// properties, fresh identity), appended at the end and selected.
    /// Returns the copy's identity, or `None` if the source is absent.
    pub fn duplicate_component(&mut self, id: &str) -> Option<String> {
        let Some(source) = self.components.iter().find(|c| c.id == id) else {
            tracing::warn!(id, "duplicate: no such component");
            return None;
        };

        let copy_id = self.ids.new_id();
        let copy = Component::new(
            copy_id.clone(),
            source.kind,
            source.properties.clone(),
            self.components.len() as u32,
        );

        self.components.push(copy);
        self.selected = Some(copy_id.clone());
        self.version += 1;

        tracing::debug!(source = id, copy = %copy_id, "duplicate component");
        Some(copy_id)
    }

    pub fn set_device_view(&mut self, view: DeviceView) {
        self.device = view;
        self.version += 1;
    }

    // --- reads ----------------------------------------------------------

    /// Components in display order (stable sort by `order`, so ties keep
    /// insertion order).
    pub fn components_ordered(&self) -> Vec<&Component> {
        let mut ordered: Vec<&Component> = self.components.iter().collect();
        ordered.sort_by_key(|c| c.order);
        ordered
    }

    pub fn get(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection; dangling selections resolve to `None`.
    pub fn selected_component(&self) -> Option<&Component> {
        self.selected.as_deref().and_then(|id| self.get(id))
    }

    pub fn device_view(&self) -> DeviceView {
        self.device
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    // --- history support ------------------------------------------------

    pub(crate) fn state(&self) -> (Vec<Component>, Option<String>) {
        (self.components.clone(), self.selected.clone())
    }

    pub(crate) fn restore(&mut self, components: Vec<Component>, selected: Option<String>) {
        self.components = components;
        self.selected = selected;
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_dense_orders_and_selects() {
        let mut doc = PageDocument::new("home");

        let first = doc.add_component(ComponentKind::Heading);
        assert_eq!(doc.selected_id(), Some(first.as_str()));

        let second = doc.add_component(ComponentKind::Paragraph);
        assert_eq!(doc.selected_id(), Some(second.as_str()));

        let orders: Vec<u32> = doc.components_ordered().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    #[test]
    fn test_remove_keeps_gaps() {
        let mut doc = PageDocument::new("home");
        let a = doc.add_component(ComponentKind::Heading);
        let _b = doc.add_component(ComponentKind::Paragraph);
        let _c = doc.add_component(ComponentKind::Button);

        assert!(doc.remove_component(&a));

        // No renumbering on removal; display order still works via sort.
        let orders: Vec<u32> = doc.components_ordered().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2]);
    }

    #[test]
    fn test_selection_not_validated() {
        let mut doc = PageDocument::new("home");
        doc.select_component(Some("nope".to_string()));

        assert_eq!(doc.selected_id(), Some("nope"));
        assert!(doc.selected_component().is_none());
    }

    #[test]
    fn test_update_never_touches_kind_or_order() {
        let mut doc = PageDocument::new("home");
        let id = doc.add_component(ComponentKind::Button);

        let mut patch = PropertyMap::new();
        patch.insert("label".to_string(), "Buy now".into());
        assert!(doc.update_component(&id, patch));

        let component = doc.get(&id).unwrap();
        assert_eq!(component.kind, ComponentKind::Button);
        assert_eq!(component.order, 0);
        assert_eq!(
            component.property("label").and_then(|v| v.as_text()),
            Some("Buy now")
        );
        // Unlisted default keys persist.
        assert!(component.property("link").is_some());
    }
}

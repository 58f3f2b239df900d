//! # Pagecraft Renderer
//!
//! Pure render dispatcher: maps each component's `kind` to a visual
//! template, producing a virtual node tree parameterized by the
//! component's properties. Stateless and total — missing properties fall
//! back to empty values, and nothing here writes back into the stores.

mod templates;
mod vnode;

pub use templates::render_component;
pub use vnode::VNode;

use pagecraft_editor::{DeviceView, PageDocument};
use serde::{Deserialize, Serialize};

/// Rendered view of a page document: one node per component, in display
/// order, plus the chrome hints the canvas needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPage {
    pub nodes: Vec<VNode>,

    pub device: DeviceView,

    /// Identity of the selected component, when it resolves; the canvas
    /// uses this to draw the selection outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<String>,
}

/// Render the whole document, components sorted by display order.
pub fn render_page(doc: &PageDocument) -> RenderedPage {
    RenderedPage {
        nodes: doc
            .components_ordered()
            .into_iter()
            .map(render_component)
            .collect(),
        device: doc.device_view(),
        selected: doc.selected_component().map(|c| c.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_editor::MoveDirection;
    use pagecraft_model::ComponentKind;

    #[test]
    fn test_render_follows_display_order() {
        let mut doc = PageDocument::new("home");
        let _heading = doc.add_component(ComponentKind::Heading);
        let paragraph = doc.add_component(ComponentKind::Paragraph);
        doc.move_component(&paragraph, MoveDirection::Up);

        let page = render_page(&doc);
        assert_eq!(page.nodes.len(), 2);

        // Paragraph first after the move.
        assert_eq!(page.nodes[0].tag(), Some("p"));
        assert_eq!(page.nodes[1].tag(), Some("h2"));
    }

    #[test]
    fn test_render_reports_selection_when_resolvable() {
        let mut doc = PageDocument::new("home");
        let id = doc.add_component(ComponentKind::Button);

        assert_eq!(render_page(&doc).selected.as_deref(), Some(id.as_str()));

        // A dangling selection renders no highlight.
        doc.select_component(Some("ghost".to_string()));
        assert!(render_page(&doc).selected.is_none());
    }
}

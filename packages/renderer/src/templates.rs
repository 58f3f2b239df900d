//! Per-kind visual templates.
//!
//! One `match` arm per [`ComponentKind`]; properties are template
//! parameters. Lookups are total: a missing text property renders as an
//! empty string, a missing list as no children.

use pagecraft_model::{Component, ComponentKind, PropertyMap, PropertyValue};

use crate::vnode::VNode;

fn text(props: &PropertyMap, key: &str) -> String {
    props
        .get(key)
        .and_then(PropertyValue::as_text)
        .unwrap_or_default()
        .to_string()
}

fn items<'a>(props: &'a PropertyMap, key: &str) -> &'a [PropertyMap] {
    props
        .get(key)
        .and_then(PropertyValue::as_items)
        .unwrap_or_default()
}

/// Map one component to its template.
pub fn render_component(component: &Component) -> VNode {
    let props = &component.properties;

    let node = match component.kind {
        ComponentKind::Hero => VNode::element("section")
            .with_attr("class", "hero")
            .with_attr("style", background(props))
            .child(VNode::element("h1").child(VNode::text(text(props, "title"))))
            .child(VNode::element("p").child(VNode::text(text(props, "subtitle"))))
            .child(VNode::element("button").child(VNode::text(text(props, "button-label")))),

        ComponentKind::Paragraph => VNode::element("p").child(VNode::text(text(props, "text"))),

        ComponentKind::Heading => {
            let level = props
                .get("level")
                .and_then(PropertyValue::as_number)
                .unwrap_or(2.0)
                .clamp(1.0, 6.0) as u8;
            VNode::element(format!("h{}", level)).child(VNode::text(text(props, "text")))
        }

        ComponentKind::Button => VNode::element("a")
            .with_attr("class", "button")
            .with_attr("href", text(props, "link"))
            .child(VNode::text(text(props, "label"))),

        ComponentKind::Image => VNode::element("img")
            .with_attr("src", text(props, "src"))
            .with_attr("alt", text(props, "alt")),

        ComponentKind::IconsSection => VNode::element("section")
            .with_attr("class", "icons")
            .child(VNode::element("h2").child(VNode::text(text(props, "title"))))
            .child(VNode::element("ul").children(items(props, "items").iter().map(|item| {
                VNode::element("li")
                    .with_attr("data-icon", text(item, "icon"))
                    .child(VNode::element("strong").child(VNode::text(text(item, "label"))))
                    .child(VNode::element("p").child(VNode::text(text(item, "description"))))
            }))),

        ComponentKind::BackgroundSection => VNode::element("section")
            .with_attr("class", "background")
            .with_attr("style", background(props))
            .child(VNode::element("h2").child(VNode::text(text(props, "title"))))
            .child(VNode::element("p").child(VNode::text(text(props, "text")))),

        ComponentKind::Gallery => VNode::element("div").with_attr("class", "gallery").children(
            items(props, "images").iter().map(|image| {
                VNode::element("img")
                    .with_attr("src", text(image, "src"))
                    .with_attr("alt", text(image, "alt"))
            }),
        ),

        ComponentKind::Testimonial => VNode::element("blockquote")
            .with_attr("class", "testimonial")
            .child(VNode::element("p").child(VNode::text(text(props, "quote"))))
            .child(
                VNode::element("footer")
                    .child(VNode::text(text(props, "author")))
                    .child(VNode::element("span").child(VNode::text(text(props, "role")))),
            ),
    };

    node.with_id(component.id.clone())
}

fn background(props: &PropertyMap) -> String {
    let image = text(props, "background-image");
    if image.is_empty() {
        String::new()
    } else {
        format!("background-image: url('{}')", image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_model::default_properties;

    fn component(kind: ComponentKind) -> Component {
        Component::new("c-1".to_string(), kind, default_properties(kind), 0)
    }

    #[test]
    fn test_every_kind_has_a_template() {
        for kind in ComponentKind::ALL {
            let node = render_component(&component(kind));
            // Template roots carry the component identity for selection.
            match node {
                VNode::Element { id, .. } => assert_eq!(id.as_deref(), Some("c-1")),
                VNode::Text { .. } => panic!("template root must be an element"),
            }
        }
    }

    #[test]
    fn test_heading_level_parameter() {
        let mut heading = component(ComponentKind::Heading);
        heading
            .properties
            .insert("level".to_string(), PropertyValue::Number(4.0));

        assert_eq!(render_component(&heading).tag(), Some("h4"));
    }

    #[test]
    fn test_gallery_renders_one_img_per_item() {
        let gallery = component(ComponentKind::Gallery);
        let node = render_component(&gallery);

        match node {
            VNode::Element { children, .. } => assert_eq!(children.len(), 2),
            _ => panic!("expected element"),
        }
    }

    #[test]
    fn test_missing_properties_render_empty() {
        let bare = Component::new(
            "c-2".to_string(),
            ComponentKind::Button,
            PropertyMap::new(),
            0,
        );

        let node = render_component(&bare);
        assert_eq!(node.tag(), Some("a"));
        assert_eq!(node.attr("href"), Some(""));
    }
}

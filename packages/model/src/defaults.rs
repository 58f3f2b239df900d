//! Default property table for newly added components.
//!
//! Every [`ComponentKind`] has an entry here; the add operation relies on
//! that, and `test_every_kind_has_defaults` enforces it.

use crate::component::{ComponentKind, PropertyMap, PropertyValue};

fn map(entries: Vec<(&str, PropertyValue)>) -> PropertyMap {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Initial `properties` for a freshly added component of `kind`.
pub fn default_properties(kind: ComponentKind) -> PropertyMap {
    match kind {
        ComponentKind::Hero => map(vec![
            ("title", "Welcome to your site".into()),
            ("subtitle", "Tell visitors what you do".into()),
            ("button-label", "Get started".into()),
            ("background-image", "".into()),
        ]),

        ComponentKind::Paragraph => map(vec![(
            "text",
            "Write something about your business here.".into(),
        )]),

        ComponentKind::Heading => map(vec![
            ("text", "Section heading".into()),
            ("level", PropertyValue::Number(2.0)),
        ]),

        ComponentKind::Button => map(vec![
            ("label", "Click me".into()),
            ("link", "#".into()),
        ]),

        ComponentKind::Image => map(vec![("src", "".into()), ("alt", "".into())]),

        ComponentKind::IconsSection => map(vec![
            ("title", "What we offer".into()),
            (
                "items",
                PropertyValue::Items(vec![
                    map(vec![
                        ("icon", "star".into()),
                        ("label", "Quality".into()),
                        ("description", "Describe this feature".into()),
                    ]),
                    map(vec![
                        ("icon", "bolt".into()),
                        ("label", "Speed".into()),
                        ("description", "Describe this feature".into()),
                    ]),
                    map(vec![
                        ("icon", "heart".into()),
                        ("label", "Care".into()),
                        ("description", "Describe this feature".into()),
                    ]),
                ]),
            ),
        ]),

        ComponentKind::BackgroundSection => map(vec![
            ("title", "Stand-out section".into()),
            ("text", "Put a message over a background image.".into()),
            ("background-image", "".into()),
        ]),

        ComponentKind::Gallery => map(vec![(
            "images",
            PropertyValue::Items(vec![
                map(vec![("src", "".into()), ("alt", "Gallery image".into())]),
                map(vec![("src", "".into()), ("alt", "Gallery image".into())]),
            ]),
        )]),

        ComponentKind::Testimonial => map(vec![
            ("quote", "They did a wonderful job.".into()),
            ("author", "A happy client".into()),
            ("role", "".into()),
            ("avatar", "".into()),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_defaults() {
        for kind in ComponentKind::ALL {
            let defaults = default_properties(kind);
            assert!(
                !defaults.is_empty(),
                "kind {} has no default properties",
                kind
            );
        }
    }

    #[test]
    fn test_list_kinds_default_to_items() {
        let icons = default_properties(ComponentKind::IconsSection);
        assert!(icons.get("items").and_then(PropertyValue::as_items).is_some());

        let gallery = default_properties(ComponentKind::Gallery);
        let images = gallery
            .get("images")
            .and_then(PropertyValue::as_items)
            .unwrap();
        assert_eq!(images.len(), 2);
    }
}

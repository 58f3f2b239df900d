use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of block types a page can contain.
///
/// `kind` is fixed at creation; there is no "change type" operation.
/// Wire form is kebab-case (`icons-section`), matching what the palette
/// and properties panel send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Hero,
    Paragraph,
    Heading,
    Button,
    Image,
    IconsSection,
    BackgroundSection,
    Gallery,
    Testimonial,
}

impl ComponentKind {
    /// Every kind, for exhaustive iteration (palette listing, table checks).
    pub const ALL: [ComponentKind; 9] = [
        ComponentKind::Hero,
        ComponentKind::Paragraph,
        ComponentKind::Heading,
        ComponentKind::Button,
        ComponentKind::Image,
        ComponentKind::IconsSection,
        ComponentKind::BackgroundSection,
        ComponentKind::Gallery,
        ComponentKind::Testimonial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Hero => "hero",
            ComponentKind::Paragraph => "paragraph",
            ComponentKind::Heading => "heading",
            ComponentKind::Button => "button",
            ComponentKind::Image => "image",
            ComponentKind::IconsSection => "icons-section",
            ComponentKind::BackgroundSection => "background-section",
            ComponentKind::Gallery => "gallery",
            ComponentKind::Testimonial => "testimonial",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown component kind: {0}")]
pub struct ParseKindError(pub String);

impl FromStr for ComponentKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseKindError(s.to_string()))
    }
}

/// One property value in a component's property bag.
///
/// Values are strings, numbers, or nested lists of sub-records (gallery
/// images, icon items). Shape is by convention per kind, not schema-enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Items(Vec<PropertyMap>),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[PropertyMap]> {
        match self {
            PropertyValue::Items(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

/// Open property bag keyed by property name.
pub type PropertyMap = HashMap<String, PropertyValue>;

/// One visual block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Opaque identity, stable for the component's lifetime.
    pub id: String,

    /// Block type; immutable after creation.
    pub kind: ComponentKind,

    /// Template parameters, shape determined by `kind`.
    pub properties: PropertyMap,

    /// Display position among siblings. Normalized to a dense `0..n-1`
    /// sequence after reorders; removal may leave gaps, display sorts by
    /// this field regardless of contiguity.
    pub order: u32,
}

impl Component {
    pub fn new(id: String, kind: ComponentKind, properties: PropertyMap, order: u32) -> Self {
        Self {
            id,
            kind,
            properties,
            order,
        }
    }

    /// Shallow-merge `patch` into the property bag: listed keys overwrite,
    /// unlisted keys persist.
    pub fn merge_properties(&mut self, patch: PropertyMap) {
        for (key, value) in patch {
            self.properties.insert(key, value);
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

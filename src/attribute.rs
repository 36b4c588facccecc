//! HTML attribute collection with canonical rendering order.

use std::fmt::Write as _;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::encode;

/// Canonical attribute ordering. Attributes named here always render
/// first, in this order; anything else follows in insertion order.
const ATTRIBUTE_ORDER: &[&str] = &[
    "class",
    "id",
    "name",
    "type",
    "value",
    "href",
    "src",
    "srcset",
    "alt",
    "placeholder",
    "title",
    "action",
    "method",
    "selected",
    "checked",
    "readonly",
    "disabled",
    "multiple",
    "size",
    "maxlength",
    "width",
    "height",
    "rows",
    "cols",
    "rel",
    "media",
    "role",
    "tabindex",
];

/// A single attribute value.
///
/// `Bool(true)` renders as a bare attribute name, `Bool(false)` and
/// `Null` suppress the attribute entirely. `Null` is useful to block a
/// widget from filling in a default for that attribute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(i64::from(value))
    }
}

/// An ordered map of attribute name to value.
///
/// Insertion order is remembered and drives the rendering order for
/// attributes outside the canonical prefix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == name)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Set an attribute, replacing the value in place when the name is
    /// already present.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Set an attribute only when the name is absent. A `Null` entry
    /// counts as present, so callers can suppress defaults with it.
    pub fn set_default(&mut self, name: &str, value: impl Into<AttrValue>) {
        if !self.contains(name) {
            self.entries.push((name.to_string(), value.into()));
        }
    }

    /// Builder-style [`set`](Self::set) for literal construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Merge `other` into `self`, overriding values for names present
    /// in both and appending the rest.
    pub fn merge(&mut self, other: &Attributes) {
        for (name, value) in &other.entries {
            self.set(name.clone(), value.clone());
        }
    }

    /// Append CSS classes to the `class` attribute, skipping tokens the
    /// class list already contains. No-op for an empty or blank value.
    pub fn add_class(&mut self, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            return;
        }

        match self.entries.iter_mut().find(|(k, _)| k == "class") {
            Some((_, AttrValue::Str(existing))) => {
                let mut tokens: Vec<&str> = existing.split_whitespace().collect();
                for token in value.split_whitespace() {
                    if !tokens.contains(&token) {
                        tokens.push(token);
                    }
                }
                *existing = tokens.join(" ");
            }
            Some((_, slot)) => *slot = AttrValue::Str(value.to_string()),
            None => self.entries.push(("class".to_string(), AttrValue::Str(value.to_string()))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as a string of ` name="value"` pairs, canonical names
    /// first. Boolean attributes render as a bare name, `Bool(false)`
    /// and `Null` entries are dropped.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut emitted = vec![false; self.entries.len()];

        for name in ATTRIBUTE_ORDER {
            for (i, (k, v)) in self.entries.iter().enumerate() {
                if !emitted[i] && k == name {
                    emitted[i] = true;
                    push_attribute(&mut out, k, v);
                }
            }
        }

        for (i, (k, v)) in self.entries.iter().enumerate() {
            if !emitted[i] {
                push_attribute(&mut out, k, v);
            }
        }

        out
    }
}

fn push_attribute(out: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Null | AttrValue::Bool(false) => {}
        AttrValue::Bool(true) => {
            out.push(' ');
            out.push_str(name);
        }
        AttrValue::Int(value) => {
            let _ = write!(out, " {}=\"{}\"", name, value);
        }
        AttrValue::Str(value) => {
            let _ = write!(out, " {}=\"{}\"", name, encode::attribute(value));
        }
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct AttributesVisitor;

        impl<'de> Visitor<'de> for AttributesVisitor {
            type Value = Attributes;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of attribute names to values")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut attributes = Attributes::new();
                while let Some((name, value)) = map.next_entry::<String, AttrValue>()? {
                    attributes.set(name, value);
                }
                Ok(attributes)
            }
        }

        deserializer.deserialize_map(AttributesVisitor)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn canonical_names_render_first() {
        let attributes = Attributes::new()
            .with("data-bs-toggle", "dropdown")
            .with("href", "#")
            .with("class", "dropdown-toggle")
            .with("aria-expanded", "false");

        assert_eq!(
            attributes.render(),
            " class=\"dropdown-toggle\" href=\"#\" data-bs-toggle=\"dropdown\" aria-expanded=\"false\"",
        );
    }

    #[test]
    fn boolean_and_null_values() {
        let attributes = Attributes::new()
            .with("disabled", true)
            .with("hidden", false)
            .with("aria-label", AttrValue::Null)
            .with("tabindex", -1);

        assert_eq!(attributes.render(), " disabled tabindex=\"-1\"");
    }

    #[test]
    fn add_class_skips_duplicate_tokens() {
        let mut attributes = Attributes::new().with("class", "alert alert-warning");
        attributes.add_class("alert-dismissible fade show");
        attributes.add_class("alert-dismissible");

        assert_eq!(
            attributes.get("class").and_then(AttrValue::as_str),
            Some("alert alert-warning alert-dismissible fade show"),
        );
    }

    #[test]
    fn set_replaces_in_place() {
        let mut attributes = Attributes::new().with("href", "/old").with("rel", "nofollow");
        attributes.set("href", "/new");

        assert_eq!(attributes.get("href"), Some(&AttrValue::Str("/new".to_string())));
        assert_eq!(attributes.render(), " href=\"/new\" rel=\"nofollow\"");
    }

    #[test]
    fn set_default_respects_null() {
        let mut attributes = Attributes::new().with("aria-expanded", AttrValue::Null);
        attributes.set_default("aria-expanded", "false");
        attributes.set_default("aria-label", "Toggle navigation");

        assert_eq!(attributes.render(), " aria-label=\"Toggle navigation\"");
    }

    #[test]
    fn attribute_values_are_escaped() {
        let attributes = Attributes::new().with("title", "Tom & \"Jerry\"");

        assert_eq!(attributes.render(), " title=\"Tom &amp; &quot;Jerry&quot;\"");
    }

    #[test]
    fn deserializes_from_yaml_mapping() {
        let attributes: Attributes =
            serde_yaml::from_str("{class: nav-link, tabindex: -1, disabled: true, aria-label: ~}")
                .unwrap();

        assert_eq!(attributes.get("tabindex"), Some(&AttrValue::Int(-1)));
        assert_eq!(attributes.get("disabled"), Some(&AttrValue::Bool(true)));
        assert_eq!(attributes.get("aria-label"), Some(&AttrValue::Null));
        assert_eq!(attributes.render(), " class=\"nav-link\" disabled tabindex=\"-1\"");
    }
}

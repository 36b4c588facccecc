//! Menu and dropdown item definitions.
//!
//! Items are built fluently or deserialized from YAML. A definition
//! list mixes item mappings with the literal string `"-"`, which stands
//! for a divider:
//!
//! ```yaml
//! - {label: Action, link: "#"}
//! - {label: Another action, link: "#"}
//! - "-"
//! - {label: Something else here, link: "#"}
//! ```

use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

use crate::attribute::Attributes;
use crate::error::{WidgetError, WidgetResult};

/// One entry of an item definition list.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Rendered as a divider rule.
    Divider,
    Menu(MenuItem),
}

impl From<MenuItem> for Item {
    fn from(item: MenuItem) -> Self {
        Item::Menu(item)
    }
}

impl<'de> Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        match value {
            Value::String(text) if text == "-" => Ok(Item::Divider),
            Value::String(text) => Err(serde::de::Error::custom(format!(
                "expected \"-\" or an item mapping, found \"{text}\""
            ))),
            other => serde_yaml::from_value(other)
                .map(Item::Menu)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// A single menu item definition.
///
/// All fields are optional; the widgets fill in defaults while
/// normalizing. `label` holds a raw YAML value so a mistyped
/// definition (a number, a list) survives until validation, where it
/// produces a proper error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuItem {
    pub label: Option<Value>,
    pub link: Option<String>,
    pub active: Option<bool>,
    pub disabled: Option<bool>,
    pub enclose: Option<bool>,
    pub encode_label: Option<bool>,
    pub visible: Option<bool>,
    pub icon: Option<String>,
    pub icon_class: Option<String>,
    pub icon_attributes: Attributes,
    pub icon_container_attributes: Attributes,
    pub link_attributes: Attributes,
    pub header_attributes: Attributes,
    pub toggle_attributes: Attributes,
    pub items_attributes: Attributes,
    pub items_container_attributes: Attributes,
    pub items: Vec<Item>,
}

impl MenuItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self, value: impl Into<Value>) -> Self {
        let mut new = self.clone();
        new.label = Some(value.into());
        new
    }

    pub fn link(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.link = Some(value.to_string());
        new
    }

    pub fn active(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.active = Some(value);
        new
    }

    pub fn disabled(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.disabled = Some(value);
        new
    }

    /// Whether the item is wrapped in its container tag. Defaults to
    /// `true`; with `false` the label renders bare.
    pub fn enclose(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.enclose = Some(value);
        new
    }

    pub fn encode_label(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.encode_label = Some(value);
        new
    }

    pub fn visible(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.visible = Some(value);
        new
    }

    pub fn icon(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.icon = Some(value.to_string());
        new
    }

    pub fn icon_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.icon_class = Some(value.to_string());
        new
    }

    pub fn icon_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.icon_attributes = values;
        new
    }

    pub fn icon_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.icon_container_attributes = values;
        new
    }

    pub fn link_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.link_attributes = values;
        new
    }

    pub fn header_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.header_attributes = values;
        new
    }

    pub fn toggle_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.toggle_attributes = values;
        new
    }

    /// Attributes for the submenu list this item opens.
    pub fn items_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.items_attributes = values;
        new
    }

    /// Attributes for this item's own container tag.
    pub fn items_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.items_container_attributes = values;
        new
    }

    pub fn items(&self, values: Vec<Item>) -> Self {
        let mut new = self.clone();
        new.items = values;
        new
    }
}

/// Parse an item definition list from YAML.
pub fn parse_items(yaml: &str) -> WidgetResult<Vec<Item>> {
    serde_yaml::from_str(yaml).map_err(|e| WidgetError::InvalidDefinition(e.to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserializes_mixed_definition_list() {
        let items = parse_items(
            r##"
            - {label: Action, link: "#"}
            - "-"
            - label: Dropdown
              link: "#"
              items:
                - {label: Nested, link: /nested, active: true}
            "##,
        )
        .unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[1], Item::Divider);

        let Item::Menu(parent) = &items[2] else {
            panic!("expected a menu item");
        };
        assert_eq!(parent.label, Some(Value::from("Dropdown")));
        assert_eq!(parent.items.len(), 1);

        let Item::Menu(nested) = &parent.items[0] else {
            panic!("expected a menu item");
        };
        assert_eq!(nested.link.as_deref(), Some("/nested"));
        assert_eq!(nested.active, Some(true));
    }

    #[test]
    fn camel_case_keys_map_to_fields() {
        let items = parse_items(
            r#"
            - label: Home
              encodeLabel: false
              linkAttributes: {class: nav-link}
              itemsContainerAttributes: {class: nav-item}
            "#,
        )
        .unwrap();

        let Item::Menu(item) = &items[0] else {
            panic!("expected a menu item");
        };
        assert_eq!(item.encode_label, Some(false));
        assert!(item.link_attributes.contains("class"));
        assert!(item.items_container_attributes.contains("class"));
    }

    #[test]
    fn rejects_unknown_string_entries() {
        let error = parse_items("- divider").unwrap_err();

        assert!(matches!(error, WidgetError::InvalidDefinition(_)));
    }

    #[test]
    fn fluent_setters_return_new_instances() {
        let base = MenuItem::new().label("Home");
        let linked = base.link("/home");

        assert_eq!(base.link, None);
        assert_eq!(linked.link.as_deref(), Some("/home"));
    }
}

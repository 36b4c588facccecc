//! Item normalization.
//!
//! Dropdown normalization validates labels and produces fully
//! defaulted entries. Menu normalization keeps the definition shape
//! and only fills in what rendering needs, resolving the active state
//! against the current path.

use serde_yaml::Value;

use crate::attribute::Attributes;
use crate::encode;
use crate::error::{WidgetError, WidgetResult};
use crate::item::{Item, MenuItem};

/// A dropdown item with every field resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedItem {
    Divider,
    Entry(NormalizedEntry),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedEntry {
    /// Label text, already HTML-encoded unless `encodeLabel` was
    /// disabled on the definition.
    pub label: String,
    pub link: String,
    pub active: bool,
    pub disabled: bool,
    pub enclose: bool,
    pub visible: bool,
    pub icon: String,
    pub icon_class: String,
    pub icon_attributes: Attributes,
    pub icon_container_attributes: Attributes,
    pub link_attributes: Attributes,
    pub header_attributes: Attributes,
    pub toggle_attributes: Attributes,
    pub items_attributes: Attributes,
    pub items: Vec<NormalizedItem>,
}

/// Normalize dropdown items, validating labels and recursing into
/// submenus. Dividers pass through untouched.
pub fn dropdown(items: &[Item]) -> WidgetResult<Vec<NormalizedItem>> {
    items
        .iter()
        .map(|item| match item {
            Item::Divider => Ok(NormalizedItem::Divider),
            Item::Menu(entry) => {
                let children = if entry.items.is_empty() {
                    Vec::new()
                } else {
                    dropdown(&entry.items)?
                };

                Ok(NormalizedItem::Entry(NormalizedEntry {
                    label: label(entry)?,
                    link: entry.link.clone().unwrap_or_else(|| "/".to_string()),
                    active: entry.active.unwrap_or(false),
                    disabled: entry.disabled.unwrap_or(false),
                    enclose: entry.enclose.unwrap_or(true),
                    visible: entry.visible.unwrap_or(true),
                    icon: entry.icon.clone().unwrap_or_default(),
                    icon_class: entry.icon_class.clone().unwrap_or_default(),
                    icon_attributes: entry.icon_attributes.clone(),
                    icon_container_attributes: entry.icon_container_attributes.clone(),
                    link_attributes: entry.link_attributes.clone(),
                    header_attributes: entry.header_attributes.clone(),
                    toggle_attributes: entry.toggle_attributes.clone(),
                    items_attributes: entry.items_attributes.clone(),
                    items: children,
                }))
            }
        })
        .collect()
}

/// Normalize menu items in place, keeping the definition shape.
///
/// Leaf items get their active state resolved: an explicit `true`
/// wins, otherwise the item is active when its link matches
/// `current_path` and activation is enabled. Parent items only recurse.
pub fn menu(items: &[Item], current_path: &str, activate_items: bool) -> Vec<Item> {
    items
        .iter()
        .map(|item| match item {
            Item::Divider => Item::Divider,
            Item::Menu(entry) => {
                let mut entry = entry.clone();

                if entry.items.is_empty() {
                    let link = entry.link.as_deref().unwrap_or("/");
                    if entry.active != Some(true) {
                        entry.active = Some(is_item_active(link, current_path, activate_items));
                    }
                    entry.disabled = Some(entry.disabled.unwrap_or(false));
                    entry.encode_label = Some(entry.encode_label.unwrap_or(true));
                    entry.icon = Some(entry.icon.unwrap_or_default());
                    entry.icon_class = Some(entry.icon_class.unwrap_or_default());
                    entry.visible = Some(entry.visible.unwrap_or(true));
                } else {
                    entry.items = menu(&entry.items, current_path, activate_items);
                }

                Item::Menu(entry)
            }
        })
        .collect()
}

fn is_item_active(link: &str, current_path: &str, activate_items: bool) -> bool {
    link == current_path && activate_items
}

fn label(entry: &MenuItem) -> WidgetResult<String> {
    let value = entry.label.as_ref().ok_or(WidgetError::MissingLabel)?;

    let Value::String(text) = value else {
        return Err(WidgetError::LabelNotString);
    };

    if text.is_empty() {
        return Err(WidgetError::EmptyLabel);
    }

    if entry.encode_label.unwrap_or(true) {
        Ok(encode::content(text))
    } else {
        Ok(text.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn dropdown_fills_defaults() {
        let items = dropdown(&[MenuItem::new().label("Action").into()]).unwrap();

        let NormalizedItem::Entry(entry) = &items[0] else {
            panic!("expected an entry");
        };
        assert_eq!(entry.label, "Action");
        assert_eq!(entry.link, "/");
        assert!(!entry.active);
        assert!(!entry.disabled);
        assert!(entry.enclose);
        assert!(entry.visible);
        assert!(entry.icon_attributes.is_empty());
        assert!(entry.items.is_empty());
    }

    #[test]
    fn dropdown_encodes_labels_by_default() {
        let items = dropdown(&[
            MenuItem::new().label("Fish & Chips").into(),
            MenuItem::new().label("<b>Bold</b>").encode_label(false).into(),
        ])
        .unwrap();

        let NormalizedItem::Entry(encoded) = &items[0] else {
            panic!("expected an entry");
        };
        let NormalizedItem::Entry(raw) = &items[1] else {
            panic!("expected an entry");
        };
        assert_eq!(encoded.label, "Fish &amp; Chips");
        assert_eq!(raw.label, "<b>Bold</b>");
    }

    #[test]
    fn dropdown_validates_labels() {
        assert_eq!(
            dropdown(&[MenuItem::new().link("#").into()]).unwrap_err(),
            WidgetError::MissingLabel,
        );
        assert_eq!(
            dropdown(&[MenuItem::new().label(1).into()]).unwrap_err(),
            WidgetError::LabelNotString,
        );
        assert_eq!(
            dropdown(&[MenuItem::new().label("").into()]).unwrap_err(),
            WidgetError::EmptyLabel,
        );
    }

    #[test]
    fn dropdown_recurses_and_passes_dividers_through() {
        let items = dropdown(&[
            Item::Divider,
            MenuItem::new()
                .label("Parent")
                .items(vec![MenuItem::new().label("Child").into(), Item::Divider])
                .into(),
        ])
        .unwrap();

        assert_eq!(items[0], NormalizedItem::Divider);
        let NormalizedItem::Entry(parent) = &items[1] else {
            panic!("expected an entry");
        };
        assert_eq!(parent.items.len(), 2);
        assert_eq!(parent.items[1], NormalizedItem::Divider);
    }

    #[test]
    fn menu_resolves_active_from_current_path() {
        let items = menu(
            &[
                MenuItem::new().label("Home").link("/home").into(),
                MenuItem::new().label("Away").link("/away").into(),
            ],
            "/home",
            true,
        );

        let [Item::Menu(home), Item::Menu(away)] = &items[..] else {
            panic!("expected two menu items");
        };
        assert_eq!(home.active, Some(true));
        assert_eq!(away.active, Some(false));
    }

    #[test]
    fn menu_activation_can_be_disabled() {
        let items = menu(&[MenuItem::new().label("Home").link("/home").into()], "/home", false);

        let [Item::Menu(home)] = &items[..] else {
            panic!("expected one menu item");
        };
        assert_eq!(home.active, Some(false));
    }

    #[test]
    fn menu_explicit_active_wins() {
        let items = menu(&[MenuItem::new().label("Other").link("/other").active(true).into()], "/", true);

        let [Item::Menu(other)] = &items[..] else {
            panic!("expected one menu item");
        };
        assert_eq!(other.active, Some(true));
    }

    #[test]
    fn menu_recurses_into_parents_without_defaulting_them() {
        let items = menu(
            &[MenuItem::new()
                .label("Parent")
                .items(vec![MenuItem::new().label("Child").link("/child").into()])
                .into()],
            "/child",
            true,
        );

        let [Item::Menu(parent)] = &items[..] else {
            panic!("expected one menu item");
        };
        assert_eq!(parent.visible, None);

        let [Item::Menu(child)] = &parent.items[..] else {
            panic!("expected one child");
        };
        assert_eq!(child.active, Some(true));
    }
}

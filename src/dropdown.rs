//! Dropdown widget.

use crate::attribute::{AttrValue, Attributes};
use crate::button::Button;
use crate::error::WidgetResult;
use crate::item::Item;
use crate::normalize::{self, NormalizedEntry, NormalizedItem};
use crate::tag;

/// Renders a Bootstrap 5 dropdown: a toggle plus a menu of links,
/// headers and dividers, with optional nested submenus.
///
/// ```
/// use bs5_widgets::{Dropdown, MenuItem};
///
/// let html = Dropdown::new()
///     .items(vec![MenuItem::new().label("Action").link("#").into()])
///     .render()?;
/// assert_eq!(html, "<div>\n<li>\n<a href=\"#\">Action</a>\n</li>\n</div>");
/// # Ok::<(), bs5_widgets::WidgetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    attributes: Attributes,
    active_class: String,
    container: bool,
    container_attributes: Attributes,
    container_class: String,
    container_tag: String,
    disabled_class: String,
    divider_attributes: Attributes,
    divider_tag: String,
    header_class: String,
    header_tag: String,
    item_class: String,
    item_container: bool,
    item_container_attributes: Attributes,
    item_container_tag: String,
    item_tag: String,
    items: Vec<Item>,
    items_container_attributes: Attributes,
    items_container_tag: String,
    split_button_attributes: Attributes,
    split_button_span_attributes: Attributes,
    toggle_attributes: Attributes,
    toggle_kind: String,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            active_class: "active".to_string(),
            container: true,
            container_attributes: Attributes::new(),
            container_class: String::new(),
            container_tag: "div".to_string(),
            disabled_class: "disabled".to_string(),
            divider_attributes: Attributes::new(),
            divider_tag: "hr".to_string(),
            header_class: String::new(),
            header_tag: "span".to_string(),
            item_class: String::new(),
            item_container: true,
            item_container_attributes: Attributes::new(),
            item_container_tag: "li".to_string(),
            item_tag: "a".to_string(),
            items: Vec::new(),
            items_container_attributes: Attributes::new(),
            items_container_tag: "ul".to_string(),
            split_button_attributes: Attributes::new(),
            split_button_span_attributes: Attributes::new(),
            toggle_attributes: Attributes::new(),
            toggle_kind: "button".to_string(),
        }
    }
}

impl Dropdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.attributes = values;
        new
    }

    pub fn active_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.active_class = value.to_string();
        new
    }

    pub fn container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.container = value;
        new
    }

    pub fn container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.container_attributes = values;
        new
    }

    /// Container class. When it contains `dropstart`, the split button
    /// of a split toggle moves behind the menu.
    pub fn container_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.container_class = value.to_string();
        new
    }

    pub fn container_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.container_tag = value.to_string();
        new
    }

    pub fn disabled_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.disabled_class = value.to_string();
        new
    }

    pub fn divider_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.divider_attributes = values;
        new
    }

    pub fn divider_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.divider_attributes.add_class(value);
        new
    }

    pub fn divider_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.divider_tag = value.to_string();
        new
    }

    pub fn header_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.header_class = value.to_string();
        new
    }

    pub fn header_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.header_tag = value.to_string();
        new
    }

    /// Widget id. Propagated to the toggle and, as `aria-labelledby`,
    /// to the items list.
    pub fn id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.set("id", value);
        new
    }

    pub fn item_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.item_class = value.to_string();
        new
    }

    pub fn item_container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.item_container = value;
        new
    }

    pub fn item_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.item_container_attributes = values;
        new
    }

    pub fn item_container_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.item_container_attributes.add_class(value);
        new
    }

    pub fn item_container_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.item_container_tag = value.to_string();
        new
    }

    pub fn item_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.item_tag = value.to_string();
        new
    }

    pub fn items(&self, values: Vec<Item>) -> Self {
        let mut new = self.clone();
        new.items = values;
        new
    }

    pub fn items_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.items_container_attributes = values;
        new
    }

    pub fn items_container_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.items_container_attributes.add_class(value);
        new
    }

    pub fn split_button_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.split_button_attributes = values;
        new
    }

    pub fn split_button_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.split_button_attributes.add_class(value);
        new
    }

    pub fn split_button_span_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.split_button_span_attributes.add_class(value);
        new
    }

    pub fn toggle_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.toggle_attributes = values;
        new
    }

    pub fn toggle_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.toggle_attributes.add_class(value);
        new
    }

    /// The toggle kind: `button` (default), `link` or `split`.
    pub fn toggle_kind(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.toggle_kind = value.to_string();
        new
    }

    pub fn render(&self) -> WidgetResult<String> {
        let items = normalize::dropdown(&self.items)?;
        let content = self.render_items(&items);

        let mut container_attributes = self.container_attributes.clone();
        container_attributes.add_class(&self.container_class);

        Ok(if self.container {
            tag::render(&self.container_tag, &content, &container_attributes)
        } else {
            content
        })
    }

    fn render_items(&self, items: &[NormalizedItem]) -> String {
        let mut lines = Vec::new();

        for item in items {
            match item {
                NormalizedItem::Divider => lines.push(self.render_divider()),
                NormalizedItem::Entry(entry) if entry.visible => {
                    lines.push(self.render_item(entry));
                }
                NormalizedItem::Entry(_) => {}
            }
        }

        lines.join("\n")
    }

    fn render_item(&self, entry: &NormalizedEntry) -> String {
        let label = self.render_label(entry);

        let mut link_attributes = entry.link_attributes.clone();
        link_attributes.add_class(&self.item_class);

        if entry.active {
            link_attributes.set("aria-current", "true");
            link_attributes.add_class(&self.active_class);
        }

        if entry.disabled {
            link_attributes.add_class(&self.disabled_class);
        }

        if entry.items.is_empty() {
            return self.render_item_content(entry, &label, link_attributes);
        }

        let items_container = self.render_items_container(&entry.items, &entry.items_attributes);
        let toggle = self.render_toggle(&label, &entry.link, &entry.toggle_attributes);

        if self.toggle_kind == "split" {
            let split_button = self.render_split_button(&label);

            if self.container_class.contains("dropstart") {
                format!("{toggle}\n{items_container}\n{split_button}")
            } else {
                format!("{split_button}\n{toggle}\n{items_container}")
            }
        } else {
            format!("{toggle}\n{items_container}")
        }
    }

    fn render_item_content(
        &self,
        entry: &NormalizedEntry,
        label: &str,
        link_attributes: Attributes,
    ) -> String {
        if entry.label == "-" {
            self.render_divider()
        } else if !entry.enclose {
            label.to_string()
        } else if entry.link.is_empty() {
            self.render_header(label, &entry.header_attributes)
        } else {
            self.render_item_link(label, &entry.link, link_attributes)
        }
    }

    fn render_divider(&self) -> String {
        tag::render(
            &self.item_container_tag,
            &tag::render(&self.divider_tag, "", &self.divider_attributes),
            &self.item_container_attributes,
        )
    }

    fn render_header(&self, label: &str, header_attributes: &Attributes) -> String {
        let mut attributes = header_attributes.clone();
        attributes.add_class(&self.header_class);

        tag::render(
            &self.item_container_tag,
            &tag::render(&self.header_tag, label, &attributes),
            &self.item_container_attributes,
        )
    }

    fn render_item_link(&self, label: &str, link: &str, mut link_attributes: Attributes) -> String {
        link_attributes.set("href", link);

        let anchor = tag::render(&self.item_tag, label, &link_attributes);

        if self.item_container {
            tag::render(&self.item_container_tag, &anchor, &self.item_container_attributes)
        } else {
            anchor
        }
    }

    /// Renders the submenu list. Nested lists inherit the item, header,
    /// divider and toggle configuration; the outer container, split
    /// button and state classes fall back to their defaults.
    fn render_items_container(&self, items: &[NormalizedItem], items_attributes: &Attributes) -> String {
        let mut attributes = if items_attributes.is_empty() {
            self.items_container_attributes.clone()
        } else {
            items_attributes.clone()
        };

        if let Some(id) = self.attributes.get("id").and_then(AttrValue::as_str) {
            attributes.set("aria-labelledby", id.to_string());
        }

        let mut child = Self::new();
        child.attributes = attributes.clone();
        child.container = false;
        child.divider_attributes = self.divider_attributes.clone();
        child.header_class = self.header_class.clone();
        child.header_tag = self.header_tag.clone();
        child.item_class = self.item_class.clone();
        child.item_container_attributes = self.item_container_attributes.clone();
        child.item_container_tag = self.item_container_tag.clone();
        child.item_tag = self.item_tag.clone();
        child.items_container_attributes = self.items_container_attributes.clone();
        child.toggle_attributes = self.toggle_attributes.clone();
        child.toggle_kind = self.toggle_kind.clone();

        tag::render(&self.items_container_tag, &child.render_items(items), &attributes)
    }

    fn render_toggle(&self, label: &str, link: &str, toggle_attributes: &Attributes) -> String {
        let mut attributes = if toggle_attributes.is_empty() {
            self.toggle_attributes.clone()
        } else {
            toggle_attributes.clone()
        };

        if let Some(id) = self.attributes.get("id").and_then(AttrValue::as_str) {
            attributes.set("id", id.to_string());
        }

        match self.toggle_kind.as_str() {
            "link" => Button::new()
                .attributes(attributes)
                .content(label)
                .link(link)
                .kind("link")
                .render(),
            "split" => Button::new()
                .attributes(attributes)
                .content(&tag::render("span", label, &self.split_button_span_attributes))
                .render(),
            _ => Button::new().attributes(attributes).content(label).render(),
        }
    }

    fn render_split_button(&self, label: &str) -> String {
        Button::new()
            .attributes(self.split_button_attributes.clone())
            .content(label)
            .render()
    }

    fn render_label(&self, entry: &NormalizedEntry) -> String {
        let mut html = String::new();

        if !entry.icon.is_empty() || !entry.icon_class.is_empty() {
            let mut icon_attributes = entry.icon_attributes.clone();
            icon_attributes.add_class(&entry.icon_class);

            let icon = tag::render("i", &entry.icon, &icon_attributes);
            html = tag::render("span", &icon, &entry.icon_container_attributes);
        }

        html.push_str(&entry.label);
        html
    }
}

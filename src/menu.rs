//! Menu widget.

use serde_yaml::Value;

use crate::attribute::Attributes;
use crate::dropdown::Dropdown;
use crate::error::WidgetResult;
use crate::item::{Item, MenuItem};
use crate::normalize;
use crate::{encode, tag, template};

/// Renders a multi-level menu as nested HTML lists.
///
/// The active item is resolved against [`current_path`](Self::current_path).
/// Items with children are delegated to a [`Dropdown`] prototype,
/// configurable through [`dropdown`](Self::dropdown).
///
/// ```
/// use bs5_widgets::{Menu, MenuItem};
///
/// let html = Menu::new()
///     .current_path("/home")
///     .items(vec![MenuItem::new().label("Home").link("/home").into()])
///     .render()?;
/// assert_eq!(
///     html,
///     "<ul>\n<li>\n<a class=\"active\" href=\"/home\" aria-current=\"page\">Home</a>\n</li>\n</ul>",
/// );
/// # Ok::<(), bs5_widgets::WidgetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    attributes: Attributes,
    active_class: String,
    activate_items: bool,
    after_attributes: Attributes,
    after_content: String,
    after_tag: String,
    before_attributes: Attributes,
    before_content: String,
    before_tag: String,
    container: bool,
    current_path: String,
    disabled_class: String,
    dropdown: Dropdown,
    dropdown_container: bool,
    dropdown_container_attributes: Attributes,
    dropdown_container_tag: String,
    first_item_class: String,
    icon_container_attributes: Attributes,
    items: Vec<Item>,
    items_container: bool,
    items_container_attributes: Attributes,
    items_tag: String,
    label_template: String,
    last_item_class: String,
    link_attributes: Attributes,
    link_class: String,
    link_tag: String,
    tag_name: String,
    template: String,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            active_class: "active".to_string(),
            activate_items: true,
            after_attributes: Attributes::new(),
            after_content: String::new(),
            after_tag: "span".to_string(),
            before_attributes: Attributes::new(),
            before_content: String::new(),
            before_tag: "span".to_string(),
            container: true,
            current_path: String::new(),
            disabled_class: "disabled".to_string(),
            dropdown: Dropdown::new(),
            dropdown_container: true,
            dropdown_container_attributes: Attributes::new(),
            dropdown_container_tag: "li".to_string(),
            first_item_class: String::new(),
            icon_container_attributes: Attributes::new(),
            items: Vec::new(),
            items_container: true,
            items_container_attributes: Attributes::new(),
            items_tag: "li".to_string(),
            label_template: "{label}".to_string(),
            last_item_class: String::new(),
            link_attributes: Attributes::new(),
            link_class: String::new(),
            link_tag: "a".to_string(),
            tag_name: "ul".to_string(),
            template: "{items}".to_string(),
        }
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.active_class = value.to_string();
        new
    }

    /// Whether items are activated by matching the current path.
    pub fn activate_items(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.activate_items = value;
        new
    }

    pub fn after_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.after_attributes = values;
        new
    }

    pub fn after_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.after_attributes.add_class(value);
        new
    }

    /// Raw HTML appended after the item list.
    pub fn after_content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.after_content = value.to_string();
        new
    }

    pub fn after_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.after_tag = value.to_string();
        new
    }

    /// HTML attributes of the root list tag.
    pub fn attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.attributes = values;
        new
    }

    pub fn before_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.before_attributes = values;
        new
    }

    pub fn before_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.before_attributes.add_class(value);
        new
    }

    /// Raw HTML prepended before the item list.
    pub fn before_content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.before_content = value.to_string();
        new
    }

    pub fn before_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.before_tag = value.to_string();
        new
    }

    pub fn class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.add_class(value);
        new
    }

    pub fn container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.container = value;
        new
    }

    pub fn current_path(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.current_path = value.to_string();
        new
    }

    pub fn disabled_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.disabled_class = value.to_string();
        new
    }

    /// The [`Dropdown`] prototype used for items with children.
    pub fn dropdown(&self, value: Dropdown) -> Self {
        let mut new = self.clone();
        new.dropdown = value;
        new
    }

    pub fn dropdown_container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.dropdown_container = value;
        new
    }

    pub fn dropdown_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.dropdown_container_attributes = values;
        new
    }

    pub fn dropdown_container_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.dropdown_container_attributes.add_class(value);
        new
    }

    pub fn dropdown_container_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.dropdown_container_tag = value.to_string();
        new
    }

    /// Class added to the first rendered item's container.
    pub fn first_item_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.first_item_class = value.to_string();
        new
    }

    pub fn icon_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.icon_container_attributes = values;
        new
    }

    pub fn id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.set("id", value);
        new
    }

    pub fn items(&self, values: Vec<Item>) -> Self {
        let mut new = self.clone();
        new.items = values;
        new
    }

    pub fn items_container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.items_container = value;
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

    pub fn items_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.items_tag = value.to_string();
        new
    }

    /// Template for items without a link. The `{label}` token is
    /// replaced with the item label.
    pub fn label_template(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.label_template = value.to_string();
        new
    }

    /// Class added to the last rendered item's container.
    pub fn last_item_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.last_item_class = value.to_string();
        new
    }

    pub fn link_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.link_attributes = values;
        new
    }

    pub fn link_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.link_class = value.to_string();
        new
    }

    pub fn link_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.link_tag = value.to_string();
        new
    }

    pub fn tag_name(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.tag_name = value.to_string();
        new
    }

    /// Template for the whole item list. The `{items}` token is
    /// replaced per rendered line.
    pub fn template(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.template = value.to_string();
        new
    }

    pub fn render(&self) -> WidgetResult<String> {
        let items = normalize::menu(&self.items, &self.current_path, self.activate_items);

        if items.is_empty() {
            return Ok(String::new());
        }

        self.render_menu(&items)
    }

    fn render_menu(&self, items: &[Item]) -> WidgetResult<String> {
        let content = self.render_items(items)?;

        let before = if self.before_content.is_empty() {
            String::new()
        } else {
            format!(
                "{}\n",
                tag::render(&self.before_tag, &self.before_content, &self.before_attributes)
            )
        };
        let after = if self.after_content.is_empty() {
            String::new()
        } else {
            format!(
                "\n{}",
                tag::render(&self.after_tag, &self.after_content, &self.after_attributes)
            )
        };

        Ok(if self.container {
            format!("{}{}{}", before, tag::render(&self.tag_name, &content, &self.attributes), after)
        } else {
            format!("{before}{content}{after}")
        })
    }

    fn render_items(&self, items: &[Item]) -> WidgetResult<String> {
        // Rendered positions drive the first/last item classes, so
        // invisible items and dividers don't consume a slot.
        let rendered: Vec<&Item> = items
            .iter()
            .filter(|item| match item {
                Item::Divider => false,
                Item::Menu(entry) => !entry.items.is_empty() || entry.visible.unwrap_or(true),
            })
            .collect();

        let mut lines = Vec::new();

        for (position, item) in rendered.iter().enumerate() {
            let Item::Menu(entry) = item else {
                continue;
            };

            if !entry.items.is_empty() {
                let dropdown = self.render_dropdown(item)?;
                lines.push(template::substitute(&self.template, &[("{items}", &dropdown)]));
                continue;
            }

            let mut container_attributes = self.items_container_attributes.clone();
            container_attributes.merge(&entry.items_container_attributes);

            if position == 0 && !self.first_item_class.is_empty() {
                container_attributes.add_class(&self.first_item_class);
            }

            if position == rendered.len() - 1 && !self.last_item_class.is_empty() {
                container_attributes.add_class(&self.last_item_class);
            }

            let menu = self.render_item(entry);

            lines.push(if self.items_container {
                tag::render(&self.items_tag, &menu, &container_attributes)
            } else {
                menu
            });
        }

        Ok(lines.join("\n"))
    }

    fn render_item(&self, entry: &MenuItem) -> String {
        let mut link_attributes = entry.link_attributes.clone();
        link_attributes.merge(&self.link_attributes);
        link_attributes.add_class(&self.link_class);

        if entry.active == Some(true) {
            link_attributes.set("aria-current", "page");
            link_attributes.add_class(&self.active_class);
        }

        if entry.disabled == Some(true) {
            link_attributes.add_class(&self.disabled_class);
        }

        let mut label = entry
            .label
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        if entry.encode_label.unwrap_or(true) {
            label = encode::content(&label);
        }

        if let Some(link) = &entry.link {
            link_attributes.set("href", link.clone());
        }

        let label = self.render_label(&label, entry);

        if link_attributes.contains("href") {
            tag::render(&self.link_tag, &label, &link_attributes)
        } else {
            template::substitute(&self.label_template, &[("{label}", &label)])
        }
    }

    fn render_label(&self, label: &str, entry: &MenuItem) -> String {
        let icon = entry.icon.as_deref().unwrap_or_default();
        let icon_class = entry.icon_class.as_deref().unwrap_or_default();

        let mut html = String::new();

        if !icon.is_empty() || !icon_class.is_empty() {
            let mut icon_attributes = entry.icon_attributes.clone();
            icon_attributes.add_class(icon_class);

            let mut icon_container_attributes = self.icon_container_attributes.clone();
            icon_container_attributes.merge(&entry.icon_container_attributes);

            let i = tag::render("i", icon, &icon_attributes);
            html = tag::render("span", &i, &icon_container_attributes);
        }

        html.push_str(label);
        html
    }

    fn render_dropdown(&self, item: &Item) -> WidgetResult<String> {
        let dropdown = self.dropdown.items(vec![item.clone()]).render()?;

        Ok(if self.dropdown_container {
            tag::render(
                &self.dropdown_container_tag,
                &dropdown,
                &self.dropdown_container_attributes,
            )
        } else {
            dropdown
        })
    }
}

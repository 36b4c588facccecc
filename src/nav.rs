//! Nav widget.

use crate::attribute::Attributes;
use crate::dropdown::Dropdown;
use crate::error::WidgetResult;
use crate::item::Item;
use crate::menu::Menu;
use crate::{tag, template};

/// Renders a Bootstrap 5 nav: a [`Menu`] wrapped in a container div,
/// or in an off-canvas panel with its own header and close button.
///
/// The inner menu and the dropdown used for items with children are
/// configured through prototypes, see [`menu`](Self::menu) and
/// [`dropdown`](Self::dropdown).
#[derive(Debug, Clone, PartialEq)]
pub struct Nav {
    attributes: Attributes,
    container: bool,
    current_path: String,
    dropdown: Dropdown,
    items: Vec<Item>,
    menu: Menu,
    off_canvas: bool,
    off_canvas_attributes: Attributes,
    off_canvas_class: String,
    off_canvas_header_attributes: Attributes,
    off_canvas_header_button_attributes: Attributes,
    off_canvas_header_button_class: String,
    off_canvas_header_button_content: String,
    off_canvas_header_button_tag: String,
    off_canvas_header_class: String,
    off_canvas_header_tag: String,
    off_canvas_header_title_attributes: Attributes,
    off_canvas_header_title_class: String,
    off_canvas_header_title_content: String,
    off_canvas_header_title_id: String,
    off_canvas_header_title_tag: String,
    off_canvas_id: String,
    off_canvas_tag: String,
}

impl Default for Nav {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            container: true,
            current_path: String::new(),
            dropdown: Dropdown::new(),
            items: Vec::new(),
            menu: Menu::new(),
            off_canvas: false,
            off_canvas_attributes: Attributes::new(),
            off_canvas_class: "offcanvas offcanvas-end".to_string(),
            off_canvas_header_attributes: Attributes::new(),
            off_canvas_header_button_attributes: Attributes::new(),
            off_canvas_header_button_class: "btn-close".to_string(),
            off_canvas_header_button_content: String::new(),
            off_canvas_header_button_tag: "button".to_string(),
            off_canvas_header_class: "offcanvas-header".to_string(),
            off_canvas_header_tag: "div".to_string(),
            off_canvas_header_title_attributes: Attributes::new(),
            off_canvas_header_title_class: "offcanvas-title".to_string(),
            off_canvas_header_title_content: String::new(),
            off_canvas_header_title_id: String::new(),
            off_canvas_header_title_tag: "h5".to_string(),
            off_canvas_id: String::new(),
            off_canvas_tag: "div".to_string(),
        }
    }
}

impl Nav {
    pub fn new() -> Self {
        Self::default()
    }

    /// HTML attributes of the container div.
    pub fn attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.attributes = values;
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

    /// The [`Dropdown`] prototype forwarded to the inner menu.
    pub fn dropdown(&self, value: Dropdown) -> Self {
        let mut new = self.clone();
        new.dropdown = value;
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

    /// The [`Menu`] prototype the nav renders through. Its current
    /// path, dropdown prototype and items are overridden on render.
    pub fn menu(&self, value: Menu) -> Self {
        let mut new = self.clone();
        new.menu = value;
        new
    }

    /// Render inside an off-canvas panel instead of a plain container.
    pub fn off_canvas(&self) -> Self {
        let mut new = self.clone();
        new.off_canvas = true;
        new
    }

    pub fn off_canvas_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.off_canvas_attributes = values;
        new
    }

    pub fn off_canvas_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_class = value.to_string();
        new
    }

    pub fn off_canvas_header_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_attributes = values;
        new
    }

    pub fn off_canvas_header_button_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_button_attributes = values;
        new
    }

    pub fn off_canvas_header_button_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_button_class = value.to_string();
        new
    }

    pub fn off_canvas_header_button_content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_button_content = value.to_string();
        new
    }

    pub fn off_canvas_header_button_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_button_tag = value.to_string();
        new
    }

    pub fn off_canvas_header_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_class = value.to_string();
        new
    }

    pub fn off_canvas_header_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_tag = value.to_string();
        new
    }

    pub fn off_canvas_header_title_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_title_attributes = values;
        new
    }

    pub fn off_canvas_header_title_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_title_class = value.to_string();
        new
    }

    pub fn off_canvas_header_title_content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_title_content = value.to_string();
        new
    }

    /// Title id, also used as the panel's `aria-labelledby` default.
    pub fn off_canvas_header_title_id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_title_id = value.to_string();
        new
    }

    pub fn off_canvas_header_title_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_header_title_tag = value.to_string();
        new
    }

    pub fn off_canvas_id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_id = value.to_string();
        new
    }

    pub fn off_canvas_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.off_canvas_tag = value.to_string();
        new
    }

    pub fn render(&self) -> WidgetResult<String> {
        let html = if self.off_canvas {
            self.render_off_canvas()?
        } else {
            self.render_container()?
        };

        Ok(template::collapse_line_breaks(&html))
    }

    fn render_container(&self) -> WidgetResult<String> {
        let menu = self.render_menu()?;

        if menu.is_empty() {
            return Ok(String::new());
        }

        Ok(if self.container {
            format!("{}\n", tag::render("div", &menu, &self.attributes))
        } else {
            menu
        })
    }

    fn render_menu(&self) -> WidgetResult<String> {
        self.menu
            .current_path(&self.current_path)
            .dropdown(self.dropdown.clone())
            .items(self.items.clone())
            .render()
    }

    fn render_off_canvas(&self) -> WidgetResult<String> {
        let mut attributes = self.off_canvas_attributes.clone();

        if !self.off_canvas_header_title_id.is_empty() {
            attributes.set_default("aria-labelledby", self.off_canvas_header_title_id.clone());
        }

        attributes.add_class(&self.off_canvas_class);

        if !self.off_canvas_id.is_empty() {
            attributes.set("id", self.off_canvas_id.clone());
        }

        attributes.set_default("tabindex", -1);

        let mut html = self.render_off_canvas_header();
        let container = self.render_container()?;

        if !container.is_empty() {
            html.push('\n');
            html.push_str(&container);
        }

        Ok(format!("{}\n", tag::render(&self.off_canvas_tag, &html, &attributes)))
    }

    fn render_off_canvas_header(&self) -> String {
        let mut attributes = self.off_canvas_header_attributes.clone();
        attributes.add_class(&self.off_canvas_header_class);

        let mut html = self.render_off_canvas_header_title();
        html.push('\n');
        html.push_str(&self.render_off_canvas_header_button());

        tag::render(&self.off_canvas_header_tag, &html, &attributes)
    }

    fn render_off_canvas_header_button(&self) -> String {
        let mut attributes = self.off_canvas_header_button_attributes.clone();
        attributes.set("type", "button");
        attributes.set_default("aria-label", "Close");
        attributes.set_default("data-bs-dismiss", "offcanvas");
        attributes.add_class(&self.off_canvas_header_button_class);

        tag::render(
            &self.off_canvas_header_button_tag,
            &self.off_canvas_header_button_content,
            &attributes,
        )
    }

    fn render_off_canvas_header_title(&self) -> String {
        let mut attributes = self.off_canvas_header_title_attributes.clone();

        if !self.off_canvas_header_title_id.is_empty() {
            attributes.set("id", self.off_canvas_header_title_id.clone());
        }

        attributes.add_class(&self.off_canvas_header_title_class);

        tag::render(
            &self.off_canvas_header_title_tag,
            &self.off_canvas_header_title_content,
            &attributes,
        )
    }
}

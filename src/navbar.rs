//! NavBar widget.
//!
//! Unlike the other widgets, a navbar renders in two halves: content
//! placed between [`begin`](NavBar::begin) and [`end`](NavBar::end)
//! becomes the body of the navbar.

use crate::attribute::Attributes;
use crate::{tag, template};

/// Renders a Bootstrap 5 navbar shell: brand, toggler and an open
/// menu container the caller fills with arbitrary content.
///
/// ```
/// use bs5_widgets::NavBar;
///
/// let navbar = NavBar::new().brand("My site").brand_class("navbar-brand").class("navbar");
/// let html = format!("{}{}", navbar.begin(), navbar.end());
/// assert_eq!(
///     html,
///     "<nav class=\"navbar\">\n<div class=\"container-fluid\">\n<a class=\"navbar-brand\" href=\"#\">My site</a>\n</div>\n</nav>",
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NavBar {
    attributes: Attributes,
    brand: String,
    brand_attributes: Attributes,
    brand_class: String,
    brand_image: String,
    brand_image_attributes: Attributes,
    brand_image_class: String,
    brand_link: String,
    brand_tag: String,
    button_toggle: bool,
    button_toggle_attributes: Attributes,
    button_toggle_class: String,
    button_toggle_content: String,
    button_toggle_id: String,
    container: bool,
    container_attributes: Attributes,
    container_class: String,
    container_tag: String,
    menu_container: bool,
    menu_container_attributes: Attributes,
    menu_container_class: String,
    menu_container_tag: String,
    tag_name: String,
    template: String,
}

impl Default for NavBar {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            brand: String::new(),
            brand_attributes: Attributes::new(),
            brand_class: String::new(),
            brand_image: String::new(),
            brand_image_attributes: Attributes::new(),
            brand_image_class: String::new(),
            brand_link: "#".to_string(),
            brand_tag: "a".to_string(),
            button_toggle: false,
            button_toggle_attributes: Attributes::new(),
            button_toggle_class: String::new(),
            button_toggle_content: "<span class=\"navbar-toggler-icon\"></span>".to_string(),
            button_toggle_id: String::new(),
            container: false,
            container_attributes: Attributes::new(),
            container_class: "container".to_string(),
            container_tag: "div".to_string(),
            menu_container: true,
            menu_container_attributes: Attributes::new(),
            menu_container_class: "container-fluid".to_string(),
            menu_container_tag: "div".to_string(),
            tag_name: "nav".to_string(),
            template: "{containerMenu}{brand}{toggle}".to_string(),
        }
    }
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Brand text or HTML.
    pub fn brand(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.brand = value.to_string();
        new
    }

    pub fn brand_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.brand_attributes = values;
        new
    }

    pub fn brand_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.brand_class = value.to_string();
        new
    }

    /// Brand image source. Rendered inside the brand link, before any
    /// brand text.
    pub fn brand_image(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.brand_image = value.to_string();
        new
    }

    pub fn brand_image_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.brand_image_attributes = values;
        new
    }

    pub fn brand_image_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.brand_image_class = value.to_string();
        new
    }

    pub fn brand_link(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.brand_link = value.to_string();
        new
    }

    pub fn brand_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.brand_tag = value.to_string();
        new
    }

    pub fn button_toggle(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.button_toggle = value;
        new
    }

    pub fn button_toggle_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.button_toggle_attributes = values;
        new
    }

    pub fn button_toggle_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.button_toggle_class = value.to_string();
        new
    }

    pub fn button_toggle_content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.button_toggle_content = value.to_string();
        new
    }

    /// Id of the collapsible target; fills in the toggler's
    /// `data-bs-target` and `aria-controls` defaults.
    pub fn button_toggle_id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.button_toggle_id = value.to_string();
        new
    }

    pub fn class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.add_class(value);
        new
    }

    /// Wrap the whole navbar in an outer container. Disabled by
    /// default.
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

    pub fn id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.set("id", value);
        new
    }

    /// Whether the enclosed content gets its own container div.
    pub fn menu_container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.menu_container = value;
        new
    }

    pub fn menu_container_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.menu_container_attributes = values;
        new
    }

    pub fn menu_container_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.menu_container_class = value.to_string();
        new
    }

    pub fn menu_container_tag(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.menu_container_tag = value.to_string();
        new
    }

    /// Layout template for the opening half. The tokens
    /// `{containerMenu}`, `{brand}` and `{toggle}` are replaced on
    /// render.
    pub fn template(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.template = value.to_string();
        new
    }

    /// Render the opening half of the navbar, up to and including the
    /// open menu container.
    pub fn begin(&self) -> String {
        let mut container_attributes = self.container_attributes.clone();
        container_attributes.add_class(&self.container_class);

        let brand = match self.render_brand() {
            brand if brand.is_empty() => String::new(),
            brand => format!("\n{brand}"),
        };
        let container_menu = if self.menu_container {
            self.render_menu_container()
        } else {
            String::new()
        };
        let toggle = match self.render_button_toggle() {
            toggle if toggle.is_empty() => String::new(),
            toggle => format!("\n{toggle}"),
        };

        let mut content = tag::begin(&self.tag_name, &self.attributes);
        content.push_str(&template::collapse_line_breaks(&template::substitute(
            &self.template,
            &[("{containerMenu}", &container_menu), ("{brand}", &brand), ("{toggle}", &toggle)],
        )));

        if self.container {
            format!("{}\n{}\n", tag::begin(&self.container_tag, &container_attributes), content)
        } else {
            format!("{content}\n")
        }
    }

    /// Render the closing half, matching [`begin`](Self::begin).
    pub fn end(&self) -> String {
        let mut content = String::new();

        if self.menu_container {
            content.push_str(&tag::end(&self.menu_container_tag));
            content.push('\n');
        }

        content.push_str(&tag::end(&self.tag_name));

        if self.container {
            format!("{}\n{}", content, tag::end(&self.container_tag))
        } else {
            content
        }
    }

    fn render_brand(&self) -> String {
        let mut brand = self.brand.clone();
        let mut brand_attributes = self.brand_attributes.clone();
        let mut image_attributes = self.brand_image_attributes.clone();

        brand_attributes.add_class(&self.brand_class);
        brand_attributes.set_default("href", self.brand_link.clone());

        if !self.brand_image.is_empty() {
            image_attributes.set("src", self.brand_image.clone());
            image_attributes.add_class(&self.brand_image_class);

            brand = tag::render("img", "", &image_attributes);

            if !self.brand.is_empty() {
                brand.push_str(&self.brand);
            }
        }

        if brand.is_empty() {
            return String::new();
        }

        let brand_tag = tag::render(&self.brand_tag, &brand, &brand_attributes);

        if self.menu_container {
            brand_tag
        } else {
            format!("\n{brand_tag}")
        }
    }

    fn render_button_toggle(&self) -> String {
        if !self.button_toggle {
            return String::new();
        }

        let mut attributes = self.button_toggle_attributes.clone();
        attributes.add_class(&self.button_toggle_class);
        attributes.set_default("data-bs-toggle", "collapse");

        if !self.button_toggle_id.is_empty() {
            attributes.set_default("data-bs-target", format!("#{}", self.button_toggle_id));
            attributes.set_default("aria-controls", self.button_toggle_id.clone());
        }

        attributes.set_default("aria-expanded", "false");
        attributes.set_default("aria-label", "Toggle navigation");
        attributes.set("type", "button");

        tag::render("button", &self.button_toggle_content, &attributes)
    }

    fn render_menu_container(&self) -> String {
        let mut attributes = self.menu_container_attributes.clone();
        attributes.add_class(&self.menu_container_class);

        format!("\n{}", tag::begin(&self.menu_container_tag, &attributes))
    }
}

//! Button widget.

use crate::attribute::Attributes;
use crate::tag;

/// Renders a Bootstrap 5 button, either as a `<button>` or as a link
/// styled like one.
///
/// ```
/// use bs5_widgets::Button;
///
/// let html = Button::new().class("btn btn-primary").content("Primary").render();
/// assert_eq!(html, "<button class=\"btn btn-primary\" type=\"button\">Primary</button>");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    attributes: Attributes,
    content: String,
    disabled: bool,
    link: String,
    kind: String,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            content: String::new(),
            disabled: false,
            link: "#".to_string(),
            kind: "button".to_string(),
        }
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

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

    /// The button content, interpolated without encoding.
    pub fn content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.content = value.to_string();
        new
    }

    /// Disabled state. Buttons get the `disabled` attribute; links get
    /// the `disabled` class plus `aria-disabled` instead.
    pub fn disabled(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.disabled = value;
        new
    }

    pub fn id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.set("id", value);
        new
    }

    /// Target for the `link` kind. Defaults to `#`.
    pub fn link(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.link = value.to_string();
        new
    }

    /// The button kind: `link` renders an `<a>` tag, anything else a
    /// `<button>` whose `type` attribute is the kind itself.
    pub fn kind(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.kind = value.to_string();
        new
    }

    pub fn render(&self) -> String {
        match self.kind.as_str() {
            "link" => self.render_link(),
            _ => self.render_button(),
        }
    }

    fn render_button(&self) -> String {
        let mut attributes = self.attributes.clone();

        if self.disabled {
            attributes.set("disabled", true);
        }

        attributes.set("type", self.kind.clone());

        tag::render("button", &self.content, &attributes)
    }

    fn render_link(&self) -> String {
        let mut attributes = self.attributes.clone();

        if self.disabled {
            attributes.add_class("disabled");
            attributes.set("aria-disabled", "true");
        }

        attributes.set("href", self.link.clone());
        attributes.set("role", "button");

        tag::render("a", &self.content, &attributes)
    }
}

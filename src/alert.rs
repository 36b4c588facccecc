//! Alert widget.

use crate::attribute::Attributes;
use crate::button::Button;
use crate::error::{WidgetError, WidgetResult};
use crate::{tag, template};

const ALERT_TYPES: &[(&str, &str)] = &[
    ("danger", "alert alert-danger"),
    ("dark", "alert alert-dark"),
    ("info", "alert alert-info"),
    ("light", "alert alert-light"),
    ("primary", "alert alert-primary"),
    ("secondary", "alert alert-secondary"),
    ("success", "alert alert-success"),
    ("warning", "alert alert-warning"),
];

/// Renders a Bootstrap 5 contextual alert.
///
/// ```
/// use bs5_widgets::Alert;
///
/// let html = Alert::new()
///     .kind("success")?
///     .content("A simple success alert")
///     .id("w0-alert")
///     .render();
/// assert_eq!(
///     html,
///     "<div class=\"alert alert-success\" id=\"w0-alert\" role=\"alert\">\nA simple success alert\n</div>",
/// );
/// # Ok::<(), bs5_widgets::WidgetError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    attributes: Attributes,
    button_attributes: Attributes,
    button_class: String,
    button_label: String,
    class: String,
    content: String,
    container: bool,
    dismissing: bool,
    icon_attributes: Attributes,
    icon_class: String,
    icon_value: String,
    template: String,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            attributes: Attributes::new(),
            button_attributes: Attributes::new(),
            button_class: "btn-close".to_string(),
            button_label: String::new(),
            class: String::new(),
            content: String::new(),
            container: true,
            dismissing: false,
            icon_attributes: Attributes::new(),
            icon_class: String::new(),
            icon_value: String::new(),
            template: "{icon}\n{content}\n{dismissing}".to_string(),
        }
    }
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.attributes = values;
        new
    }

    /// HTML attributes of the close button rendered when the alert is
    /// dismissing.
    pub fn button_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.button_attributes = values;
        new
    }

    pub fn button_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.button_class = value.to_string();
        new
    }

    pub fn button_label(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.button_label = value.to_string();
        new
    }

    pub fn class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.class = value.to_string();
        new
    }

    pub fn container(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.container = value;
        new
    }

    /// The message content, interpolated without encoding. An alert
    /// with empty content renders as an empty string.
    pub fn content(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.content = value.to_string();
        new
    }

    /// Make the alert dismissible: adds the `alert-dismissible fade
    /// show` classes and renders a close button.
    pub fn dismissing(&self, value: bool) -> Self {
        let mut new = self.clone();
        new.dismissing = value;
        new
    }

    pub fn icon_attributes(&self, values: Attributes) -> Self {
        let mut new = self.clone();
        new.icon_attributes = values;
        new
    }

    pub fn icon_class(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.icon_class = value.to_string();
        new
    }

    pub fn icon_value(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.icon_value = value.to_string();
        new
    }

    pub fn id(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.attributes.set("id", value);
        new
    }

    /// The contextual kind. Fails for anything outside the eight
    /// Bootstrap contextual types.
    pub fn kind(&self, value: &str) -> WidgetResult<Self> {
        let classes = ALERT_TYPES
            .iter()
            .find(|(kind, _)| *kind == value)
            .map(|(_, classes)| *classes)
            .ok_or_else(|| WidgetError::InvalidAlertType(value.to_string()))?;

        let mut new = self.clone();
        new.attributes.add_class(classes);
        Ok(new)
    }

    /// Layout template. The tokens `{icon}`, `{content}` and
    /// `{dismissing}` are replaced on render.
    pub fn template(&self, value: &str) -> Self {
        let mut new = self.clone();
        new.template = value.to_string();
        new
    }

    pub fn render(&self) -> String {
        if self.content.is_empty() {
            return String::new();
        }

        let mut attributes = self.attributes.clone();
        attributes.add_class(&self.class);

        let dismissing = if self.dismissing {
            self.render_dismissing()
        } else {
            String::new()
        };
        let icon = if !self.icon_class.is_empty() || !self.icon_value.is_empty() {
            self.render_icon()
        } else {
            String::new()
        };

        attributes.set_default("role", "alert");

        let body = template::substitute(
            &self.template,
            &[("{content}", &self.content), ("{dismissing}", &dismissing), ("{icon}", &icon)],
        );
        let body = template::collapse_line_breaks(&body);
        let body = body.trim();

        if self.dismissing {
            attributes.add_class("alert-dismissible fade show");
        }

        if self.container {
            tag::render("div", body, &attributes)
        } else {
            body.to_string()
        }
    }

    fn render_dismissing(&self) -> String {
        let mut attributes = self.button_attributes.clone();
        attributes.set_default("data-bs-dismiss", "alert");
        attributes.set_default("aria-label", "Close");
        attributes.add_class(&self.button_class);

        Button::new().attributes(attributes).content(&self.button_label).render()
    }

    fn render_icon(&self) -> String {
        let mut attributes = self.icon_attributes.clone();
        attributes.add_class(&self.icon_class);

        tag::render("i", &self.icon_value, &attributes)
    }
}

//! Low-level HTML tag rendering.
//!
//! Block-level elements wrap non-empty content in newlines so nested
//! widget output stays readable; inline and void elements render on a
//! single line. Content is interpolated as-is, escaping is the
//! caller's responsibility.

use crate::attribute::Attributes;

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "button", "cite", "code", "data", "dfn", "em", "i", "kbd",
    "label", "mark", "q", "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Render a complete element.
pub fn render(name: &str, content: &str, attributes: &Attributes) -> String {
    if VOID_ELEMENTS.contains(&name) {
        return format!("<{}{}>", name, attributes.render());
    }

    if content.is_empty() || INLINE_ELEMENTS.contains(&name) {
        format!("<{0}{1}>{2}</{0}>", name, attributes.render(), content)
    } else {
        format!("<{0}{1}>\n{2}\n</{0}>", name, attributes.render(), content)
    }
}

/// Render an opening tag only, for widgets that emit begin/end halves.
pub fn begin(name: &str, attributes: &Attributes) -> String {
    format!("<{}{}>", name, attributes.render())
}

/// Render the matching closing tag.
pub fn end(name: &str) -> String {
    format!("</{}>", name)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn block_elements_wrap_content_in_newlines() {
        let attributes = Attributes::new().with("class", "dropdown-menu");

        assert_eq!(
            render("ul", "<li>item</li>", &attributes),
            "<ul class=\"dropdown-menu\">\n<li>item</li>\n</ul>",
        );
    }

    #[test]
    fn inline_elements_render_on_one_line() {
        let attributes = Attributes::new().with("class", "dropdown-item").with("href", "#");

        assert_eq!(
            render("a", "Action", &attributes),
            "<a class=\"dropdown-item\" href=\"#\">Action</a>",
        );
    }

    #[test]
    fn empty_content_renders_on_one_line() {
        assert_eq!(render("div", "", &Attributes::new()), "<div></div>");
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let attributes = Attributes::new().with("class", "dropdown-divider");

        assert_eq!(render("hr", "", &attributes), "<hr class=\"dropdown-divider\">");
        assert_eq!(render("br", "", &Attributes::new()), "<br>");
    }

    #[test]
    fn begin_and_end_halves() {
        let attributes = Attributes::new().with("class", "navbar");

        assert_eq!(begin("nav", &attributes), "<nav class=\"navbar\">");
        assert_eq!(end("nav"), "</nav>");
    }
}

//! Snapshot rendering helpers.
//!
//! Functions for converting element descriptions into indented, HTML-like
//! markup suitable for snapshot-style assertions.

use crate::dom::element::Element;
use crate::widget::Widget;

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Render a widget to markup.
///
/// # Examples
///
/// ```ignore
/// use rad_widgets::testing::render_to_string;
/// use rad_widgets::widgets::Button;
///
/// let markup = render_to_string(&Button::new().brand("primary"));
/// assert!(markup.contains("btn-primary"));
/// ```
pub fn render_to_string(widget: &dyn Widget) -> String {
    element_to_string(&widget.render())
}

/// Convert an element tree to markup, two spaces per nesting level.
///
/// Classes come first, then attributes in name order, then inline styles.
/// Attributes with an empty value render bare (`disabled`), and invisible
/// elements carry a bare `hidden`. An element with text but no children
/// renders on one line. The output has no trailing newline.
pub fn element_to_string(element: &Element) -> String {
    let mut lines = Vec::new();
    write_element(element, 0, &mut lines);
    lines.join("\n")
}

fn open_tag(element: &Element) -> String {
    let mut tag = format!("<{}", element.tag);
    if !element.classes.is_empty() {
        tag.push_str(&format!(" class=\"{}\"", element.classes.join(" ")));
    }
    for (name, value) in &element.attributes {
        if value.is_empty() {
            tag.push_str(&format!(" {name}"));
        } else {
            tag.push_str(&format!(" {name}=\"{value}\""));
        }
    }
    if !element.style.is_empty() {
        let style: Vec<String> = element
            .style
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect();
        tag.push_str(&format!(" style=\"{}\"", style.join("; ")));
    }
    if !element.visible {
        tag.push_str(" hidden");
    }
    tag.push('>');
    tag
}

fn write_element(element: &Element, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    let open = open_tag(element);
    let close = format!("</{}>", element.tag);

    if element.children.is_empty() {
        let text = element.text.as_deref().unwrap_or("");
        lines.push(format!("{indent}{open}{text}{close}"));
        return;
    }

    lines.push(format!("{indent}{open}"));
    if let Some(text) = &element.text {
        lines.push(format!("{indent}  {text}"));
    }
    for child in &element.children {
        write_element(child, depth + 1, lines);
    }
    lines.push(format!("{indent}{close}"));
}

// ===========================================================================
// Tests
// ===========================================================================

//! HTML serialization of element trees.
//!
//! Event handlers are live closures and have no markup form; they are
//! omitted. Empty style, class and attribute values are not written.

use crate::element::{Content, Element};

/// Serialize an element and its descendants as HTML.
pub fn to_html(root: &Element) -> String {
    let mut out = String::new();
    write_element(root, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);

    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.to_string());
    }
    if !element.style.is_empty() {
        write_attr(out, "style", &element.style.to_css());
    }
    for (key, value) in &element.attributes {
        write_attr(out, key, value);
    }

    out.push('>');
    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, out),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn write_attr(out: &mut String, key: &str, value: &str) {
    out.push(' ');
    out.push_str(key);
    out.push_str("=\"");
    escape_into(value, out);
    out.push('"');
}

fn escape_into(text: &str, out: &mut String) {
    out.push_str(&v_htmlescape::escape(text).to_string());
}

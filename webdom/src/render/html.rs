//! Static HTML output for element trees.
//!
//! This is the non-interactive rendering path: the same declarative tree a
//! reconciler would consume, written out as markup text. Reconciliation keys
//! are metadata and are not emitted.

use crate::element::{Content, Element};

/// Serialize an element tree to an HTML string.
pub fn to_html(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_element(element: &Element, out: &mut String) {
    let Some(name) = element.tag.name() else {
        // Fragments have no tag of their own.
        write_content(&element.content, out);
        return;
    };

    out.push('<');
    out.push_str(name);
    if let Some(class) = &element.class {
        if !class.is_empty() {
            out.push_str(" class=\"");
            escape_attr(class, out);
            out.push('"');
        }
    }
    if let Some(style) = &element.style {
        if !style.is_empty() {
            out.push_str(" style=\"");
            escape_attr(&style.css(), out);
            out.push('"');
        }
    }
    if let Some(scope) = element.scope {
        out.push_str(" scope=\"");
        out.push_str(scope.as_str());
        out.push('"');
    }
    out.push('>');

    write_content(&element.content, out);

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_content(content: &Content, out: &mut String) {
    match content {
        Content::None => {}
        Content::Text(text) => escape_text(text, out),
        Content::Children(children) => {
            for child in children {
                write_element(child, out);
            }
        }
    }
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

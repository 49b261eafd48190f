//! HTML serialization.
//!
//! Renders a node tree back to markup. Text is escaped, attribute values
//! are double-quoted (with attributes whose value is empty rendered bare,
//! the boolean form), void elements get no end tag, and the contents of
//! raw-text elements are emitted verbatim. The synthetic `!DOCTYPE` element
//! renders as `<!DOCTYPE html>`.
//!
//! Serializing a parsed tree and reparsing the output yields an equal tree.
//!
//! # Examples
//!
//! ```
//! use htmloxide::{parse, serial::serialize};
//!
//! let nodes = parse("<UL><li>a<li>b</UL>");
//! assert_eq!(serialize(&nodes), "<ul><li>a</li><li>b</li></ul>");
//! ```

use crate::parser::{is_raw_text_element, is_void_element};
use crate::tree::Node;

/// Renders a sequence of nodes as HTML.
#[must_use]
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(nodes, false, &mut out);
    out
}

fn write_nodes(nodes: &[Node], raw: bool, out: &mut String) {
    for node in nodes {
        write_node(node, raw, out);
    }
}

fn write_node(node: &Node, raw: bool, out: &mut String) {
    match node {
        Node::Text(content) => {
            if raw {
                out.push_str(content);
            } else {
                escape_text(content, out);
            }
        }
        Node::Comment(content) => {
            out.push_str("<!--");
            out.push_str(content);
            out.push_str("-->");
        }
        Node::Element {
            name,
            attributes,
            children,
        } => {
            if name == "!DOCTYPE" {
                out.push_str("<!DOCTYPE html>");
                return;
            }
            out.push('<');
            out.push_str(name);
            for attribute in attributes {
                out.push(' ');
                out.push_str(&attribute.name);
                if !attribute.value.is_empty() {
                    out.push_str("=\"");
                    escape_attribute(&attribute.value, out);
                    out.push('"');
                }
            }
            out.push('>');
            if is_void_element(name) && children.is_empty() {
                return;
            }
            write_nodes(children, is_raw_text_element(name), out);
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
    }
}

fn escape_text(content: &str, out: &mut String) {
    for ch in content.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attribute(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

//! Tree queries and traversal.
//!
//! All operations act on a slice of root nodes and recurse through element
//! children only — text and comment nodes are inert. Traversal order is
//! document order (pre-order, depth-first). Results borrow from the tree:
//! element lookups yield `&Node`, attribute lookups yield `&str`, and the
//! bulk index builders key their maps with string slices borrowed from the
//! nodes themselves.
//!
//! # Examples
//!
//! ```
//! use htmloxide::{parse, query};
//!
//! let nodes = parse(r#"<div id="box"><span class="a b">hi</span></div>"#);
//! let span = query::get_elements_by_class_name(&["a", "b"], &nodes);
//! assert_eq!(span.len(), 1);
//! assert_eq!(query::text_content(&nodes), "hi");
//! ```

use std::collections::HashMap;

use crate::tree::{Attribute, Node};

// --- Attribute helpers ---

/// Returns the value of the first attribute with the given name.
///
/// Attribute names in a parsed tree are lowercase; pass the name in
/// lowercase.
#[must_use]
pub fn get_value<'a>(name: &str, attributes: &'a [Attribute]) -> Option<&'a str> {
    attributes
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.as_str())
}

/// Returns the value of the `id` attribute.
#[must_use]
pub fn get_id(attributes: &[Attribute]) -> Option<&str> {
    get_value("id", attributes)
}

/// Returns the whitespace-separated words of the `class` attribute, empty
/// when the attribute is absent.
#[must_use]
pub fn get_class_list(attributes: &[Attribute]) -> Vec<&str> {
    get_value("class", attributes)
        .map(|v| v.split_ascii_whitespace().collect())
        .unwrap_or_default()
}

// --- Traversal ---

/// Visits every element in document order (pre-order, depth-first).
fn walk<'a>(nodes: &'a [Node], visit: &mut impl FnMut(&'a Node)) {
    for node in nodes {
        if let Node::Element { children, .. } = node {
            visit(node);
            walk(children, visit);
        }
    }
}

/// Returns the first element, in document order, for which the predicate
/// holds. The predicate receives the tag name and the attributes.
pub fn find_element<'a, F>(predicate: F, nodes: &'a [Node]) -> Option<&'a Node>
where
    F: Fn(&str, &[Attribute]) -> bool,
{
    fn inner<'a, F>(predicate: &F, nodes: &'a [Node]) -> Option<&'a Node>
    where
        F: Fn(&str, &[Attribute]) -> bool,
    {
        for node in nodes {
            if let Node::Element {
                name,
                attributes,
                children,
            } = node
            {
                if predicate(name, attributes) {
                    return Some(node);
                }
                if let Some(found) = inner(predicate, children) {
                    return Some(found);
                }
            }
        }
        None
    }
    inner(&predicate, nodes)
}

/// Returns every element, in document order, for which the predicate holds
/// — including matches nested inside other matches.
pub fn find_elements<'a, F>(predicate: F, nodes: &'a [Node]) -> Vec<&'a Node>
where
    F: Fn(&str, &[Attribute]) -> bool,
{
    let mut found = Vec::new();
    walk(nodes, &mut |node| {
        if let Node::Element {
            name, attributes, ..
        } = node
        {
            if predicate(name, attributes) {
                found.push(node);
            }
        }
    });
    found
}

/// Returns all elements with the given tag name, in document order. The
/// query name is lowercased before comparison.
#[must_use]
pub fn get_elements_by_tag_name<'a>(name: &str, nodes: &'a [Node]) -> Vec<&'a Node> {
    let name = name.to_ascii_lowercase();
    find_elements(|tag, _| tag == name, nodes)
}

/// Returns all elements whose class list contains **all** of the requested
/// classes, in document order.
#[must_use]
pub fn get_elements_by_class_name<'a>(classes: &[&str], nodes: &'a [Node]) -> Vec<&'a Node> {
    find_elements(
        |_, attributes| {
            let list = get_class_list(attributes);
            classes.iter().all(|c| list.contains(c))
        },
        nodes,
    )
}

/// Returns the first element, in document order, with the given id.
#[must_use]
pub fn get_element_by_id<'a>(id: &str, nodes: &'a [Node]) -> Option<&'a Node> {
    find_element(|_, attributes| get_id(attributes) == Some(id), nodes)
}

// --- Top-level element combinators ---

/// Maps `f` over the top-level elements only (no recursion), skipping text
/// and comment nodes. `f` receives the tag name, attributes, and children.
pub fn map_elements<'a, T, F>(f: F, nodes: &'a [Node]) -> Vec<T>
where
    F: Fn(&'a str, &'a [Attribute], &'a [Node]) -> T,
{
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Element {
                name,
                attributes,
                children,
            } => Some(f(name, attributes, children)),
            _ => None,
        })
        .collect()
}

/// Returns the top-level elements for which the predicate holds (no
/// recursion). The predicate receives the tag name, attributes, and
/// children.
pub fn filter_elements<'a, F>(predicate: F, nodes: &'a [Node]) -> Vec<&'a Node>
where
    F: Fn(&str, &[Attribute], &[Node]) -> bool,
{
    nodes
        .iter()
        .filter(|node| match node {
            Node::Element {
                name,
                attributes,
                children,
            } => predicate(name, attributes, children),
            _ => false,
        })
        .collect()
}

/// Filter-maps `f` over the top-level elements only (no recursion).
pub fn filter_map_elements<'a, T, F>(f: F, nodes: &'a [Node]) -> Vec<T>
where
    F: Fn(&'a str, &'a [Attribute], &'a [Node]) -> Option<T>,
{
    nodes
        .iter()
        .filter_map(|node| match node {
            Node::Element {
                name,
                attributes,
                children,
            } => f(name, attributes, children),
            _ => None,
        })
        .collect()
}

// --- Text extraction ---

/// Returns the concatenated text content of the subtrees, in document
/// order. Comments contribute nothing.
#[must_use]
pub fn text_content(nodes: &[Node]) -> String {
    fn collect(nodes: &[Node], out: &mut String) {
        for node in nodes {
            match node {
                Node::Text(content) => out.push_str(content),
                Node::Element { children, .. } => collect(children, out),
                Node::Comment(_) => {}
            }
        }
    }
    let mut out = String::new();
    collect(nodes, &mut out);
    out
}

// --- Index builders ---

/// Builds an id → elements index in one walk of the tree.
///
/// Every element carrying an `id` attribute contributes, so documents with
/// duplicate ids keep all of them; buckets are in document order.
#[must_use]
pub fn create_id_dict<'a>(nodes: &'a [Node]) -> HashMap<&'a str, Vec<&'a Node>> {
    let mut dict: HashMap<&str, Vec<&Node>> = HashMap::new();
    walk(nodes, &mut |node| {
        if let Some(id) = get_id(node.attributes()) {
            dict.entry(id).or_default().push(node);
        }
    });
    dict
}

/// Builds a tag name → elements index in one walk of the tree.
#[must_use]
pub fn create_tag_dict<'a>(nodes: &'a [Node]) -> HashMap<&'a str, Vec<&'a Node>> {
    let mut dict: HashMap<&str, Vec<&Node>> = HashMap::new();
    walk(nodes, &mut |node| {
        if let Some(name) = node.name() {
            dict.entry(name).or_default().push(node);
        }
    });
    dict
}

/// Builds a class token → elements index in one walk of the tree.
///
/// An element appears in one bucket per distinct token of its class list,
/// so `class="a b"` contributes to both `a` and `b`.
#[must_use]
pub fn create_class_dict<'a>(nodes: &'a [Node]) -> HashMap<&'a str, Vec<&'a Node>> {
    let mut dict: HashMap<&str, Vec<&Node>> = HashMap::new();
    walk(nodes, &mut |node| {
        let list = get_class_list(node.attributes());
        for i in 0..list.len() {
            let token = list[i];
            if list[..i].contains(&token) {
                continue;
            }
            dict.entry(token).or_default().push(node);
        }
    });
    dict
}

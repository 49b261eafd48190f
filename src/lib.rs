//! # htmloxide
//!
//! A forgiving HTML parser. One markup string goes in, a tree of semantic
//! nodes comes out — suitable for traversal, querying, or conversion to a
//! virtual DOM. The parser targets real-world HTML as found on the web and
//! in clipboard payloads from spreadsheets and word processors:
//!
//! - Case-insensitive tag and attribute names (folded to lowercase)
//! - Optional end tags (`<ul><li>a<li>b</ul>` nests correctly)
//! - Void elements that never need closing (`<br>`, `<img>`, `<hr>`, ...)
//! - Unquoted attribute values (`<a href=example.com>`)
//! - Boolean attributes without values (`<input disabled>`)
//! - Named and numeric character references (`&amp;`, `&#38;`, `&#x26;`)
//! - Raw-text handling for `<script>` and `<style>`
//!
//! Parsing is **total**: every input maps to some node sequence. There are no
//! error kinds and no panics — ill-formed markup degrades to text nodes.
//!
//! ## Quick start
//!
//! ```
//! use htmloxide::{parse, query};
//!
//! let nodes = parse("<ul><li>First<li>Second</ul>");
//! let items = query::get_elements_by_tag_name("li", &nodes);
//! assert_eq!(items.len(), 2);
//! assert_eq!(query::text_content(&nodes), "FirstSecond");
//! ```

pub mod entities;
pub mod parser;
pub mod query;
pub mod serial;
pub mod tree;

// Re-export primary types at the crate root for convenience.
pub use parser::parse;
pub use tree::{Attribute, Node};

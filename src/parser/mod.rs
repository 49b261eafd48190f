//! Forgiving HTML parser.
//!
//! A recursive-descent, error-tolerant parser that handles the malformed
//! patterns common in real-world markup:
//!
//! - Missing closing tags (resolved by the HTML optional-end-tag rules)
//! - Unquoted attribute values (`<div class=main>`)
//! - Void elements that never need closing (`<br>`, `<img>`, `<hr>`, ...)
//! - Case-insensitive tag and attribute names
//! - Bare `&` characters (not just `&amp;`)
//! - Boolean attributes without values (`<input disabled>`)
//!
//! The parser is **total**: it never fails, and every input maps to some
//! node sequence. Input the grammar cannot account for degrades to text.
//! Each nesting level is parameterized by the enclosing tag name, so a start
//! tag that may not appear inside the open element (a `<li>` inside a
//! `<li>`, anything inside a `<caption>`) is rejected at that level and
//! re-parsed one level up — this is how omitted end tags find their place.
//!
//! # Examples
//!
//! ```
//! use htmloxide::parse;
//!
//! let nodes = parse("<p>Hello <b>world</b>");
//! assert_eq!(nodes.len(), 1);
//! assert_eq!(nodes[0].name(), Some("p"));
//! ```

mod input;

use memchr::{memchr, memchr2, memmem};

use crate::tree::{Attribute, Node};
use input::ParserInput;

// --- Element classification ---

/// Returns `true` if the given tag name (lowercase) is a void element:
/// it never has children and its syntactic form is a start tag only.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "command"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "keygen"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

/// Returns `true` if `tag` is a raw-text element whose content is not
/// parsed as markup (script, style).
#[must_use]
pub fn is_raw_text_element(tag: &str) -> bool {
    matches!(tag, "script" | "style")
}

/// Returns `true` if `tag` is an element whose end tag may be omitted per
/// the HTML optional-tags rules; its closure is implied by the start of a
/// sibling or by the end of its parent.
#[must_use]
pub fn is_optional_end_tag(tag: &str) -> bool {
    matches!(
        tag,
        "li" | "dt"
            | "dd"
            | "p"
            | "rt"
            | "rp"
            | "optgroup"
            | "option"
            | "colgroup"
            | "caption"
            | "thead"
            | "tbody"
            | "tfoot"
            | "tr"
            | "td"
            | "th"
    )
}

/// Returns `true` if a `child` start tag forces an open `parent` element to
/// close. For example, a `<li>` closes a previous `<li>`, and any start tag
/// other than `<col>` closes a `<colgroup>`.
///
/// The parser realizes this by *rejecting* the child at the parent's level;
/// the rejected tag is then re-parsed in the scope of an ancestor.
fn auto_closes(parent: &str, child: &str) -> bool {
    match parent {
        "head" => child == "body",
        "li" => child == "li",
        "dt" | "dd" => matches!(child, "dt" | "dd"),
        "p" => matches!(
            child,
            "address"
                | "article"
                | "aside"
                | "blockquote"
                | "details"
                | "div"
                | "dl"
                | "fieldset"
                | "figcaption"
                | "figure"
                | "footer"
                | "form"
                | "h1"
                | "h2"
                | "h3"
                | "h4"
                | "h5"
                | "h6"
                | "header"
                | "hgroup"
                | "hr"
                | "main"
                | "menu"
                | "nav"
                | "ol"
                | "p"
                | "pre"
                | "section"
                | "table"
                | "ul"
        ),
        "rt" | "rp" => matches!(child, "rt" | "rp"),
        "optgroup" => child == "optgroup",
        "option" => matches!(child, "option" | "optgroup"),
        "colgroup" => child != "col",
        "caption" => true,
        "thead" => matches!(child, "tbody" | "tfoot"),
        "tbody" => matches!(child, "tbody" | "tfoot" | "table"),
        "tfoot" => child == "table",
        "tr" => matches!(child, "tr" | "thead" | "tbody" | "tfoot"),
        "td" | "th" => matches!(child, "td" | "th" | "tr" | "tbody" | "tfoot"),
        _ => false,
    }
}

// --- Public API ---

/// Parses an HTML string into a sequence of top-level nodes.
///
/// The parser is total: it accepts any input and never fails. Markup that
/// cannot be parsed degrades to text nodes rather than being reported.
///
/// # Examples
///
/// ```
/// use htmloxide::{parse, Node};
///
/// assert_eq!(parse("&amp;"), vec![Node::text("&")]);
///
/// let nodes = parse("<INPUT disabled>");
/// assert_eq!(nodes[0].name(), Some("input"));
/// assert_eq!(nodes[0].attribute("disabled"), Some(""));
/// ```
#[must_use]
pub fn parse(input: &str) -> Vec<Node> {
    let mut parser = HtmlParser::new(input);
    parser.parse_nodes()
}

// --- The parser ---

struct HtmlParser<'a> {
    input: ParserInput<'a>,
}

/// Appends `node` to `nodes`, merging adjacent text nodes.
fn push_node(nodes: &mut Vec<Node>, node: Node) {
    match (nodes.last_mut(), node) {
        (Some(Node::Text(last)), Node::Text(content)) => last.push_str(&content),
        (_, node) => nodes.push(node),
    }
}

impl<'a> HtmlParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: ParserInput::new(input),
        }
    }

    /// Parses the entire input as a sequence of top-level nodes.
    ///
    /// This is the one place markup is allowed to fail outright: a stray
    /// end tag no ancestor matched, or a tag-shaped prefix the grammar
    /// rejects, is absorbed into a text node one character at a time so the
    /// parse always makes progress.
    fn parse_nodes(&mut self) -> Vec<Node> {
        let mut nodes = Vec::new();
        while !self.input.at_end() {
            if let Some(node) = self.parse_node("") {
                push_node(&mut nodes, node);
                continue;
            }
            let mut text = String::new();
            if let Some(ch) = self.input.next_char() {
                text.push(ch);
            }
            if let Some(more) = self.parse_text() {
                text.push_str(&more);
            }
            push_node(&mut nodes, Node::Text(text));
        }
        nodes
    }

    /// Parses one node in the scope of `parent` (empty at the top level).
    ///
    /// Returns `None` without consuming input when nothing in scope can
    /// start here: end of input, an end tag, or a start tag that closes
    /// `parent`.
    fn parse_node(&mut self, parent: &str) -> Option<Node> {
        match self.input.peek()? {
            b'<' => {
                if self.input.looking_at(b"<!--") {
                    return self.parse_comment();
                }
                if self.input.looking_at_ci(b"<!doctype") {
                    return self.parse_doctype();
                }
                if self.input.peek_at(1).is_some_and(|b| b.is_ascii_alphabetic()) {
                    if let Some(element) = self.parse_element(parent) {
                        return Some(element);
                    }
                }
                // End tags, and markup the element parser rejected, surface
                // to the caller; a `<` that starts nothing is plain text.
                self.parse_text().map(Node::Text)
            }
            _ => self.parse_text().map(Node::Text),
        }
    }

    // --- Doctype ---

    /// Parses `<!DOCTYPE ...>` into a synthetic `!DOCTYPE` element. The
    /// declaration's contents are discarded.
    fn parse_doctype(&mut self) -> Option<Node> {
        if !self.input.looking_at_ci(b"<!doctype") {
            return None;
        }
        self.input.advance(9);
        let rest = self.input.rest();
        match memchr(b'>', rest.as_bytes()) {
            Some(i) => self.input.advance(i + 1),
            None => self.input.advance(rest.len()),
        }
        Some(Node::element("!DOCTYPE", Vec::new(), Vec::new()))
    }

    // --- Comments ---

    /// Parses `<!--` up to the first `-->`. A comment left open at end of
    /// input consumes the remainder.
    fn parse_comment(&mut self) -> Option<Node> {
        if !self.input.looking_at(b"<!--") {
            return None;
        }
        self.input.advance(4);
        let rest = self.input.rest();
        match memmem::find(rest.as_bytes(), b"-->") {
            Some(i) => {
                self.input.advance(i + 3);
                Some(Node::Comment(rest[..i].to_string()))
            }
            None => {
                self.input.advance(rest.len());
                Some(Node::Comment(rest.to_string()))
            }
        }
    }

    // --- Elements ---

    fn parse_element(&mut self, parent: &str) -> Option<Node> {
        let start = self.input.checkpoint();
        let (name, attributes, self_closing) = self.parse_start_tag()?;

        // `<br/>`-style tags close on the spot, whatever the element.
        if self_closing {
            return Some(Node::Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        if is_raw_text_element(&name) {
            let children = self.parse_raw_text(&name);
            return Some(Node::Element {
                name,
                attributes,
                children,
            });
        }

        // A start tag that closes the enclosing element is rejected here
        // and re-parsed in an ancestor's scope. This realizes the omitted
        // end tag of the parent.
        if auto_closes(parent, &name) {
            self.input.rewind(start);
            return None;
        }

        if is_void_element(&name) {
            return Some(Node::Element {
                name,
                attributes,
                children: Vec::new(),
            });
        }

        let mut children = Vec::new();
        loop {
            if let Some(child) = self.parse_node(&name) {
                push_node(&mut children, child);
                continue;
            }
            let before = self.input.checkpoint();
            match self.parse_general_end_tag() {
                // Explicit close.
                Some(end) if end == name => break,
                // An end tag for some other element closes an ancestor;
                // leave it unconsumed so the ancestor can match it.
                Some(_) => {
                    self.input.rewind(before);
                    break;
                }
                // End of input or stray markup: close implicitly.
                None => break,
            }
        }

        Some(Node::Element {
            name,
            attributes,
            children,
        })
    }

    // --- Raw text (script/style) ---

    /// Consumes the content of a `<script>` or `<style>` element up to its
    /// case-insensitive matching end tag (or end of input).
    ///
    /// Nested markup is not recognized, with one exception: `<!--` starts a
    /// comment child whose bytes are preserved verbatim up to `-->` — even
    /// when they contain the end tag. Any other `<` is part of the text.
    fn parse_raw_text(&mut self, name: &str) -> Vec<Node> {
        let mut children = Vec::new();
        let mut text = String::new();
        loop {
            match self.input.peek() {
                None => break,
                Some(b'<') => {
                    if self.parse_end_tag(name) {
                        break;
                    }
                    if self.input.looking_at(b"<!--") {
                        if !text.is_empty() {
                            children.push(Node::Text(std::mem::take(&mut text)));
                        }
                        if let Some(comment) = self.parse_comment() {
                            children.push(comment);
                        }
                        continue;
                    }
                    text.push('<');
                    self.input.advance(1);
                }
                Some(_) => {
                    let rest = self.input.rest();
                    let run = memchr(b'<', rest.as_bytes()).unwrap_or(rest.len());
                    text.push_str(&rest[..run]);
                    self.input.advance(run);
                }
            }
        }
        if !text.is_empty() {
            children.push(Node::Text(text));
        }
        children
    }

    // --- Text ---

    /// Parses a maximal run of character data: references and characters
    /// other than `<`, plus any `<` that cannot begin a tag, end tag,
    /// comment, or doctype. Returns `None` on an empty run.
    fn parse_text(&mut self) -> Option<String> {
        let mut text = String::new();
        loop {
            let rest = self.input.rest();
            match memchr2(b'&', b'<', rest.as_bytes()) {
                None => {
                    text.push_str(rest);
                    self.input.advance(rest.len());
                    break;
                }
                Some(0) if rest.as_bytes()[0] == b'&' => {
                    self.input.read_reference(&mut text);
                }
                Some(0) => {
                    if self.at_markup_start() {
                        break;
                    }
                    text.push('<');
                    self.input.advance(1);
                }
                Some(run) => {
                    text.push_str(&rest[..run]);
                    self.input.advance(run);
                }
            }
        }
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Returns `true` if the `<` at the cursor begins something the grammar
    /// recognizes: a start tag, an end tag, a comment, or a doctype.
    fn at_markup_start(&self) -> bool {
        match self.input.peek_at(1) {
            Some(b) if b.is_ascii_alphabetic() => true,
            Some(b'/') => self.input.peek_at(2).is_some_and(|b| b.is_ascii_alphabetic()),
            Some(b'!') => self.input.looking_at(b"<!--") || self.input.looking_at_ci(b"<!doctype"),
            _ => false,
        }
    }

    // --- Tokenizer primitives ---
    // Each primitive either consumes input and yields a value or rewinds
    // the cursor and returns `None`, so alternatives can be tried in order.

    /// `[A-Za-z][A-Za-z0-9-]*`, lowercased.
    fn parse_tag_name(&mut self) -> Option<String> {
        if !self.input.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let name = self
            .input
            .take_while(|b| b.is_ascii_alphanumeric() || b == b'-');
        Some(name.to_ascii_lowercase())
    }

    /// `[A-Za-z][A-Za-z0-9:-]*`, lowercased. The `:` admits namespace-style
    /// names like `xmlns:v` and Excel's `x:num`.
    fn parse_attribute_name(&mut self) -> Option<String> {
        if !self.input.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return None;
        }
        let name = self
            .input
            .take_while(|b| b.is_ascii_alphanumeric() || b == b':' || b == b'-');
        Some(name.to_ascii_lowercase())
    }

    /// A quoted value (entity-decoded) or a bare word (taken verbatim).
    fn parse_attribute_value(&mut self) -> Option<String> {
        match self.input.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                let start = self.input.checkpoint();
                self.input.advance(1);
                let mut value = String::new();
                loop {
                    match self.input.peek() {
                        // Unterminated quote: not a value at all.
                        None => {
                            self.input.rewind(start);
                            return None;
                        }
                        Some(b) if b == quote => {
                            self.input.advance(1);
                            return Some(value);
                        }
                        Some(b'&') => self.input.read_reference(&mut value),
                        Some(_) => {
                            if let Some(ch) = self.input.next_char() {
                                value.push(ch);
                            }
                        }
                    }
                }
            }
            _ => {
                let mut value = String::new();
                while let Some(b) = self.input.peek() {
                    if matches!(
                        b,
                        b'`' | b'"' | b'\'' | b'<' | b'>' | b'=' | b' ' | b'\t' | b'\r' | b'\n'
                    ) {
                        break;
                    }
                    if let Some(ch) = self.input.next_char() {
                        value.push(ch);
                    }
                }
                if value.is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
        }
    }

    /// A name, optionally followed by `= value`. A name alone is a boolean
    /// attribute with an empty value.
    fn parse_attribute(&mut self) -> Option<Attribute> {
        let name = self.parse_attribute_name()?;
        let after_name = self.input.checkpoint();
        self.input.skip_whitespace();
        if self.input.peek() == Some(b'=') {
            self.input.advance(1);
            self.input.skip_whitespace();
            if let Some(value) = self.parse_attribute_value() {
                return Some(Attribute { name, value });
            }
        }
        self.input.rewind(after_name);
        Some(Attribute {
            name,
            value: String::new(),
        })
    }

    /// `<` name (spaces attribute)* spaces (`>` | `/>`). Yields the
    /// lowercased name, the attributes, and whether the tag self-closed.
    fn parse_start_tag(&mut self) -> Option<(String, Vec<Attribute>, bool)> {
        let start = self.input.checkpoint();
        if self.input.peek() != Some(b'<') {
            return None;
        }
        self.input.advance(1);
        let Some(name) = self.parse_tag_name() else {
            self.input.rewind(start);
            return None;
        };

        let mut attributes = Vec::new();
        loop {
            let before = self.input.checkpoint();
            self.input.skip_whitespace();
            match self.parse_attribute() {
                Some(attribute) => attributes.push(attribute),
                None => {
                    self.input.rewind(before);
                    break;
                }
            }
        }

        self.input.skip_whitespace();
        if self.input.looking_at(b"/>") {
            self.input.advance(2);
            return Some((name, attributes, true));
        }
        if self.input.peek() == Some(b'>') {
            self.input.advance(1);
            return Some((name, attributes, false));
        }
        self.input.rewind(start);
        None
    }

    /// `</` name-ci spaces `>` for a known `name`. Consumes only on a match.
    fn parse_end_tag(&mut self, name: &str) -> bool {
        let start = self.input.checkpoint();
        if !self.input.looking_at(b"</") {
            return false;
        }
        self.input.advance(2);
        match self.parse_tag_name() {
            Some(tag) if tag == name => {
                self.input.skip_whitespace();
                if self.input.peek() == Some(b'>') {
                    self.input.advance(1);
                    return true;
                }
                self.input.rewind(start);
                false
            }
            _ => {
                self.input.rewind(start);
                false
            }
        }
    }

    /// `</` name spaces `>` for any name; yields the lowercased name.
    fn parse_general_end_tag(&mut self) -> Option<String> {
        let start = self.input.checkpoint();
        if !self.input.looking_at(b"</") {
            return None;
        }
        self.input.advance(2);
        let Some(name) = self.parse_tag_name() else {
            self.input.rewind(start);
            return None;
        };
        self.input.skip_whitespace();
        if self.input.peek() == Some(b'>') {
            self.input.advance(1);
            return Some(name);
        }
        self.input.rewind(start);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn element(name: &str, attributes: Vec<Attribute>, children: Vec<Node>) -> Node {
        Node::element(name, attributes, children)
    }

    fn attr(name: &str, value: &str) -> Attribute {
        Attribute::new(name, value)
    }

    fn text(content: &str) -> Node {
        Node::text(content)
    }

    // --- Text and references ---

    #[test]
    fn test_plain_text() {
        assert_eq!(parse("hello world"), vec![text("hello world")]);
    }

    #[test]
    fn test_named_reference() {
        assert_eq!(parse("&amp;"), vec![text("&")]);
    }

    #[test]
    fn test_decimal_reference() {
        assert_eq!(parse("&#38;"), vec![text("&")]);
    }

    #[test]
    fn test_hex_reference() {
        assert_eq!(parse("&#x26;"), vec![text("&")]);
    }

    #[test]
    fn test_long_s_reference() {
        assert_eq!(parse("&#383;"), vec![text("\u{017F}")]);
    }

    #[test]
    fn test_unknown_reference_preserved() {
        assert_eq!(parse("&nosuch; &amp;"), vec![text("&nosuch; &")]);
    }

    #[test]
    fn test_bare_ampersand() {
        assert_eq!(parse("fish & chips"), vec![text("fish & chips")]);
    }

    #[test]
    fn test_stray_angle_absorbed_into_text() {
        assert_eq!(parse("1 < 2"), vec![text("1 < 2")]);
        assert_eq!(parse("a <3 b"), vec![text("a <3 b")]);
    }

    // --- Elements and attributes ---

    #[test]
    fn test_case_folding_and_bare_value() {
        assert_eq!(
            parse("<a HREF=example.com></A>"),
            vec![element("a", vec![attr("href", "example.com")], vec![])]
        );
    }

    #[test]
    fn test_boolean_attribute() {
        assert_eq!(
            parse("<input disabled>"),
            vec![element("input", vec![attr("disabled", "")], vec![])]
        );
    }

    #[test]
    fn test_quoted_values_decode_entities() {
        assert_eq!(
            parse("<a href=\"page?a=1&amp;b=2\" title='A &copy; B'></a>"),
            vec![element(
                "a",
                vec![
                    attr("href", "page?a=1&b=2"),
                    attr("title", "A \u{00A9} B"),
                ],
                vec![]
            )]
        );
    }

    #[test]
    fn test_duplicate_attributes_preserved_in_order() {
        assert_eq!(
            parse("<div data-x=1 data-x=2></div>"),
            vec![element(
                "div",
                vec![attr("data-x", "1"), attr("data-x", "2")],
                vec![]
            )]
        );
    }

    #[test]
    fn test_namespaced_attribute_name() {
        assert_eq!(
            parse("<html xmlns:v=\"urn:schemas-microsoft-com:vml\"></html>"),
            vec![element(
                "html",
                vec![attr("xmlns:v", "urn:schemas-microsoft-com:vml")],
                vec![]
            )]
        );
    }

    #[test]
    fn test_simple_nesting() {
        assert_eq!(
            parse("<div><span>hi</span></div>"),
            vec![element(
                "div",
                vec![],
                vec![element("span", vec![], vec![text("hi")])]
            )]
        );
    }

    #[test]
    fn test_unclosed_elements_at_end_of_input() {
        assert_eq!(
            parse("<div><p>Hello"),
            vec![element(
                "div",
                vec![],
                vec![element("p", vec![], vec![text("Hello")])]
            )]
        );
    }

    #[test]
    fn test_unclosed_tag_with_trailing_text() {
        assert_eq!(
            parse("<div>aaa"),
            vec![element("div", vec![], vec![text("aaa")])]
        );
    }

    // --- Void and self-closing elements ---

    #[test]
    fn test_void_element_has_no_children() {
        assert_eq!(
            parse("<p>line1<br>line2</p>"),
            vec![element(
                "p",
                vec![],
                vec![text("line1"), element("br", vec![], vec![]), text("line2")]
            )]
        );
    }

    #[test]
    fn test_void_and_self_closing_forms_agree() {
        for void in ["br", "img", "hr", "meta", "input", "wbr"] {
            let expected = vec![element(void, vec![], vec![])];
            assert_eq!(parse(&format!("<{void}>")), expected);
            assert_eq!(parse(&format!("<{void} />")), expected);
        }
    }

    #[test]
    fn test_self_closing_non_void() {
        assert_eq!(
            parse("<div/>after"),
            vec![element("div", vec![], vec![]), text("after")]
        );
    }

    // --- Optional end tags ---

    #[test]
    fn test_li_omission() {
        assert_eq!(
            parse("<ul><li><li></ul>"),
            vec![element(
                "ul",
                vec![],
                vec![
                    element("li", vec![], vec![]),
                    element("li", vec![], vec![]),
                ]
            )]
        );
    }

    #[test]
    fn test_li_omission_with_content() {
        assert_eq!(
            parse("<ul><li>A<li>B<li>C</ul>"),
            vec![element(
                "ul",
                vec![],
                vec![
                    element("li", vec![], vec![text("A")]),
                    element("li", vec![], vec![text("B")]),
                    element("li", vec![], vec![text("C")]),
                ]
            )]
        );
    }

    #[test]
    fn test_p_closed_by_block_element() {
        assert_eq!(
            parse("<p>one<div>two</div>"),
            vec![
                element("p", vec![], vec![text("one")]),
                element("div", vec![], vec![text("two")]),
            ]
        );
    }

    #[test]
    fn test_dt_dd_omission() {
        assert_eq!(
            parse("<dl><dt>Term<dd>Def<dt>Term2<dd>Def2</dl>"),
            vec![element(
                "dl",
                vec![],
                vec![
                    element("dt", vec![], vec![text("Term")]),
                    element("dd", vec![], vec![text("Def")]),
                    element("dt", vec![], vec![text("Term2")]),
                    element("dd", vec![], vec![text("Def2")]),
                ]
            )]
        );
    }

    #[test]
    fn test_caption_closes_on_anything() {
        assert_eq!(
            parse("<table><caption><col></table>"),
            vec![element(
                "table",
                vec![],
                vec![
                    element("caption", vec![], vec![]),
                    element("col", vec![], vec![]),
                ]
            )]
        );
    }

    #[test]
    fn test_table_section_omission() {
        assert_eq!(
            parse("<table><thead><tr><th>h<tbody><tr><td>a<tr><td>b</table>"),
            vec![element(
                "table",
                vec![],
                vec![
                    element(
                        "thead",
                        vec![],
                        vec![element(
                            "tr",
                            vec![],
                            vec![element("th", vec![], vec![text("h")])]
                        )]
                    ),
                    element(
                        "tbody",
                        vec![],
                        vec![
                            element(
                                "tr",
                                vec![],
                                vec![element("td", vec![], vec![text("a")])]
                            ),
                            element(
                                "tr",
                                vec![],
                                vec![element("td", vec![], vec![text("b")])]
                            ),
                        ]
                    ),
                ]
            )]
        );
    }

    #[test]
    fn test_whitespace_between_table_sections_preserved() {
        assert_eq!(
            parse("<table>\n  <colgroup>\n    <col>\n  </colgroup>\n</table>"),
            vec![element(
                "table",
                vec![],
                vec![
                    text("\n  "),
                    element(
                        "colgroup",
                        vec![],
                        vec![
                            text("\n    "),
                            element("col", vec![], vec![]),
                            text("\n  "),
                        ]
                    ),
                    text("\n"),
                ]
            )]
        );
    }

    #[test]
    fn test_mismatched_end_tag_closes_ancestor() {
        assert_eq!(
            parse("<div><b>bold</div>"),
            vec![element(
                "div",
                vec![],
                vec![element("b", vec![], vec![text("bold")])]
            )]
        );
    }

    // --- Raw text ---

    #[test]
    fn test_script_content_is_not_markup() {
        assert_eq!(
            parse("<script>var x = 1 < 2 && y;</script>"),
            vec![element(
                "script",
                vec![],
                vec![text("var x = 1 < 2 && y;")]
            )]
        );
    }

    #[test]
    fn test_style_content_is_not_markup() {
        assert_eq!(
            parse("<style>p > span { color: red; }</style>"),
            vec![element(
                "style",
                vec![],
                vec![text("p > span { color: red; }")]
            )]
        );
    }

    #[test]
    fn test_script_comment_swallows_end_tag() {
        assert_eq!(
            parse("<script>a<!--</script><script>-->b</script>"),
            vec![element(
                "script",
                vec![],
                vec![
                    text("a"),
                    Node::comment("</script><script>"),
                    text("b"),
                ]
            )]
        );
    }

    #[test]
    fn test_script_entities_left_alone() {
        assert_eq!(
            parse("<script>a &amp;&amp; b</script>"),
            vec![element("script", vec![], vec![text("a &amp;&amp; b")])]
        );
    }

    #[test]
    fn test_script_end_tag_case_insensitive_with_spaces() {
        assert_eq!(
            parse("<script>x</SCRIPT >"),
            vec![element("script", vec![], vec![text("x")])]
        );
    }

    #[test]
    fn test_unterminated_script_consumes_rest() {
        assert_eq!(
            parse("<script>var x;"),
            vec![element("script", vec![], vec![text("var x;")])]
        );
    }

    // --- Comments and doctype ---

    #[test]
    fn test_comment() {
        assert_eq!(
            parse("<!-- hello --><p>text</p>"),
            vec![
                Node::comment(" hello "),
                element("p", vec![], vec![text("text")]),
            ]
        );
    }

    #[test]
    fn test_unterminated_comment_consumes_rest() {
        assert_eq!(parse("a<!-- open"), vec![text("a"), Node::comment(" open")]);
    }

    #[test]
    fn test_comment_content_is_not_decoded() {
        assert_eq!(parse("<!--&amp;-->"), vec![Node::comment("&amp;")]);
    }

    #[test]
    fn test_doctype_becomes_synthetic_element() {
        assert_eq!(
            parse("<!DOCTYPE html><p>x</p>"),
            vec![
                element("!DOCTYPE", vec![], vec![]),
                element("p", vec![], vec![text("x")]),
            ]
        );
    }

    #[test]
    fn test_doctype_contents_discarded() {
        let nodes = parse(
            "<!doctype html PUBLIC \"-//W3C//DTD HTML 4.01//EN\" \"http://www.w3.org/TR/html4/strict.dtd\">",
        );
        assert_eq!(nodes, vec![element("!DOCTYPE", vec![], vec![])]);
    }

    // --- Totality ---

    #[test]
    fn test_stray_end_tag_degrades_to_text() {
        assert_eq!(parse("</div>rest"), vec![text("</div>rest")]);
    }

    #[test]
    fn test_malformed_tag_degrades_to_text() {
        assert_eq!(parse("<div $$$>x"), vec![text("<div $$$>x")]);
    }

    #[test]
    fn test_lone_angle_at_end() {
        assert_eq!(parse("tail<"), vec![text("tail<")]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), Vec::<Node>::new());
    }

    #[test]
    fn test_parse_is_deterministic() {
        let input = "<div id=a><p>x<p>y</div><!--c--><script>1<2</script>";
        assert_eq!(parse(input), parse(input));
    }

    // --- Element classification ---

    #[test]
    fn test_void_table() {
        for tag in [
            "br", "img", "hr", "meta", "input", "embed", "area", "base", "col", "keygen", "link",
            "param", "source", "command", "track", "wbr",
        ] {
            assert!(is_void_element(tag), "{tag} should be void");
        }
        assert!(!is_void_element("div"));
        assert!(!is_void_element("script"));
    }

    #[test]
    fn test_optional_end_table() {
        for tag in [
            "li", "dt", "dd", "p", "rt", "rp", "optgroup", "option", "colgroup", "caption",
            "thead", "tbody", "tfoot", "tr", "td", "th",
        ] {
            assert!(is_optional_end_tag(tag), "{tag} end tag should be optional");
        }
        assert!(!is_optional_end_tag("div"));
        assert!(!is_optional_end_tag("span"));
    }

    #[test]
    fn test_auto_close_pairs() {
        assert!(auto_closes("li", "li"));
        assert!(auto_closes("p", "table"));
        assert!(!auto_closes("p", "b"));
        assert!(auto_closes("colgroup", "tr"));
        assert!(!auto_closes("colgroup", "col"));
        assert!(auto_closes("caption", "anything"));
        assert!(auto_closes("head", "body"));
        assert!(!auto_closes("div", "div"));
    }
}

#![no_main]
use htmloxide::{parse, Node};
use libfuzzer_sys::fuzz_target;

fn check_names(nodes: &[Node]) {
    for node in nodes {
        if let Node::Element {
            name, attributes, ..
        } = node
        {
            if name != "!DOCTYPE" {
                assert!(name
                    .chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')));
            }
            for attribute in attributes {
                assert!(attribute
                    .name
                    .chars()
                    .all(|c| matches!(c, 'a'..='z' | '0'..='9' | ':' | '-')));
            }
            check_names(node.children());
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The parser is total: any input yields a tree, never a panic,
        // and names come out lowercased.
        let nodes = parse(s);
        check_names(&nodes);
    }
});

#![no_main]
use htmloxide::parse;
use htmloxide::serial::serialize;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Serializing a parsed tree and reparsing must be a fixed point.
        let tree = parse(s);
        let reparsed = parse(&serialize(&tree));
        assert_eq!(tree, reparsed);
    }
});

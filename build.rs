//! Generates the named character reference table.
//!
//! `data/entities.txt` is a tab-separated list of `name<TAB>expansion` rows
//! taken from the HTML character reference lists. Rows that do not split into
//! exactly two fields, or whose name is not alphanumeric, are skipped.
//! Duplicate names resolve last-write-wins. The surviving entries are emitted
//! into `OUT_DIR` as a `phf` map so that lookups are O(1) with no runtime
//! initialization.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

const DATA_PATH: &str = "data/entities.txt";

fn main() {
    println!("cargo:rerun-if-changed={DATA_PATH}");
    println!("cargo:rerun-if-changed=build.rs");

    let data = fs::read_to_string(DATA_PATH).expect("entity data file is bundled with the crate");

    let mut entries: BTreeMap<&str, &str> = BTreeMap::new();
    for line in data.lines() {
        let Some((name, expansion)) = line.split_once('\t') else {
            continue;
        };
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
            continue;
        }
        entries.insert(name, expansion);
    }

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let out_path = Path::new(&out_dir).join("entities.rs");
    let mut out = BufWriter::new(fs::File::create(&out_path).expect("create generated table"));

    let mut map = phf_codegen::Map::new();
    for (name, expansion) in &entries {
        map.entry(*name, &format!("{expansion:?}"));
    }

    writeln!(
        out,
        "/// Named character references, keyed without the `&` and `;` delimiters."
    )
    .expect("write generated table");
    writeln!(
        out,
        "static ENTITIES: phf::Map<&'static str, &'static str> = {};",
        map.build()
    )
    .expect("write generated table");
}

//! Named character reference table.
//!
//! The table is generated at build time from `data/entities.txt` (see
//! `build.rs`) and compiled in as a perfect-hash map, so there is no runtime
//! initialization and concurrent readers are safe by construction.
//!
//! Lookups are case-sensitive: `&Omega;` and `&omega;` are distinct
//! references, and a name that differs from the table only in case is a
//! miss. The decoder treats misses as passthrough, so an unknown reference
//! survives verbatim in the output text.

include!(concat!(env!("OUT_DIR"), "/entities.rs"));

/// Returns the expansion for a named character reference, given the name
/// without its `&` and `;` delimiters.
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    ENTITIES.get(name).copied()
}

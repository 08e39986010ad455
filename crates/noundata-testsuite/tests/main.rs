#![allow(unused_crate_dependencies)] // false positives because there is both a library and a binary
#![allow(clippy::unwrap_used)] // no need to be as strict as in production code

//! Integration tests, all contained in this single crate and organized in
//! modules so `rustc` links the library crates once instead of once per test
//! binary. Cargo also runs tests from a single binary in parallel while
//! binaries themselves run sequentially.

mod builtin;
mod decoder;

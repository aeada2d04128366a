//! Fuzz target for network resolution.
//!
//! Tests that resolution never panics and agrees with the candidate list.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_input::{resolve, resolve::matching_networks};

fuzz_target!(|data: &str| {
    let network = resolve::resolve(data);
    let candidates = matching_networks(data);

    match candidates.first() {
        Some(first) => assert_eq!(first.id(), network.id(), "resolve disagrees with candidates"),
        None => assert!(network.is_default(), "no candidates but resolved {}", network.id()),
    }
});

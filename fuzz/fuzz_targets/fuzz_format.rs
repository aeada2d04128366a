//! Fuzz target for card formatting.
//!
//! Tests that formatting functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_input::{catalog, format, resolve};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = format::format_card_number(data);
    let _ = format::strip_formatting(data);

    for network in catalog::networks() {
        let _ = format::format_with_separator(data, network, "-");
        let _ = format::format_with_separator(data, network, "");
        let _ = format::split_into_groups(data, network);
    }

    // Formatting keeps the truncated digits and is idempotent
    let network = resolve(data);
    let formatted = format::format(data, network);
    assert_eq!(
        format::strip_formatting(&formatted),
        format::canonical_digits(data, network),
        "format should preserve digits"
    );
    assert_eq!(format::format(&formatted, network), formatted, "format should be idempotent");
});

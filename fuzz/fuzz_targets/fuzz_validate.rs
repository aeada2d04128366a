//! Fuzz target for card validation.
//!
//! Tests that validation never panics on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_input::{catalog, is_valid_card_number, passes_luhn, validate_card, validate_card_number, CardEntry};

fuzz_target!(|data: &str| {
    // These should never panic, regardless of input
    let _ = validate_card(data);
    let _ = passes_luhn(data);

    for network in catalog::networks() {
        let result = validate_card_number(data, network);
        assert_eq!(result.is_ok(), is_valid_card_number(data, network));
        if let Err(e) = result {
            let _ = e.to_string();
        }
    }

    let entry = CardEntry::new(data);
    let _ = entry.validate();
    let _ = format!("{:?}", entry);
});

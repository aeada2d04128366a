//! Fuzz target for CVV validation.
//!
//! Tests that CVV functions never panic on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use cc_input::{catalog, cvv, CvvEntry};

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = cvv::validate_cvv_any(data);
    let _ = cvv::is_valid_cvv_any(data);

    for expected in 0..=5 {
        let _ = cvv::validate_cvv(data, expected);
    }

    for network in catalog::networks() {
        let _ = cvv::validate_cvv_for(data, network);
        let _ = cvv::is_valid_cvv_for(data, network);
    }

    // A validated CVV reports the digit count it was checked against
    if let Ok(length) = cvv::validate_cvv_any(data) {
        assert_eq!(CvvEntry::new(data, Some(length)).validate(), Ok(length));
    }
});

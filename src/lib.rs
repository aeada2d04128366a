//! # cc_input
//!
//! Payment card input toolkit for Rust. Identifies the card network from a
//! partially typed number, groups digits for display as the user types, and
//! validates the number (Luhn plus network lengths) and the CVV.
//!
//! Every function is pure: a raw string goes in, a result comes out, and the
//! only shared data is a static catalog of network definitions.
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_input::{format, is_valid_card_number, resolve};
//!
//! let raw = "4242 4242 4242 4242";
//! let network = resolve(raw);
//! assert_eq!(network.id(), "visa");
//! assert_eq!(format(raw, network), "4242 4242 4242 4242");
//! assert!(is_valid_card_number(raw, network));
//!
//! // Partial input resolves and formats too
//! assert_eq!(resolve("34").id(), "amex");
//! assert_eq!(format("3782822", resolve("3782822")), "3782 822");
//!
//! // Unknown prefixes fall back to the default definition
//! assert!(resolve("9999").is_default());
//! ```
//!
//! ## CVV Validation
//!
//! ```rust
//! use cc_input::{cvv, resolve};
//!
//! // Exact length
//! assert!(cvv::is_valid_cvv("123", 3));
//! assert!(!cvv::is_valid_cvv("12a", 3));
//!
//! // Length taken from the resolved network (Amex uses 4 digits)
//! assert!(cvv::is_valid_cvv_for("1234", resolve("37")));
//!
//! // No network context: 3 or 4 digits
//! assert!(cvv::is_valid_cvv_any("1234"));
//! ```
//!
//! ## Live Field Snapshots
//!
//! ```rust
//! use cc_input::CardEntry;
//!
//! let entry = CardEntry::new("3782 822463 100059999");
//! assert_eq!(entry.display(), "3782 822463 10005");
//! assert_eq!(entry.icon(), "amex");
//! assert!(entry.is_valid());
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length | Layout | CVV |
//! |---------|--------|--------|--------|-----|
//! | Visa | 4 | 13, 16, 18, 19 | 4-4-4-4-3 | 3 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 4-4-4-4 | 3 |
//! | American Express | 34, 37 | 15 | 4-6-5 | 4 |
//! | Diners Club | 300-305, 36, 38, 39 | 14, 16, 19 | 4-6-9 | 3 |
//! | Discover | 6011, 644-649, 65 | 16, 19 | 4-4-4-4-3 | 3 |
//! | JCB | 2131, 1800, 3528-3589 | 16-19 | 4-4-4-4-3 | 3 |
//! | UnionPay | 62, 81 | 14-19 | 4-4-4-4-3 | 3 |
//! | Maestro | 500000-508999 (gaps), 56-59, 63, 67, 6 | 12-19 | 4-4-4-4-3 | 3 |
//! | Mir | 2200-2204 | 16-19 | 4-4-4-4-3 | 3 |
//! | Elo | various 6-digit BINs | 16 | 4-4-4-4 | 3 |
//! | Hiper | 637095, 637568, ... | 16 | 4-4-4-4 | 3 |
//! | Hipercard | 606282 | 16 | 4-4-4-4 | 3 |
//!
//! When several networks accept the input, the one whose pattern compared
//! the most leading digits wins; remaining ties go to the row listed first.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `generate` | Random test card generation |
//! | `serde` | `Serialize` for catalog entries and field snapshots |
//! | `tracing` | Trace events from the resolver |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly support |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cvv;
pub mod entry;
pub mod error;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod resolve;
pub mod validate;

#[cfg(feature = "wasm")]
#[allow(missing_docs)]
mod wasm;

// Re-export main types at crate root
pub use catalog::{NetworkDefinition, Pattern, CATALOG, DEFAULT_NETWORK};
pub use cvv::{is_valid_cvv, is_valid_cvv_any, is_valid_cvv_for, CvvError};
pub use entry::{CardEntry, CvvEntry};
pub use error::ValidationError;
pub use format::format;
pub use resolve::resolve;
pub use validate::{is_valid_card_number, passes_luhn, validate_card, validate_card_number};

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4242424242424242";
    const VISA_13: &str = "4222222222222";
    const MASTERCARD: &str = "5555555555554444";
    const AMEX: &str = "378282246310005";
    const DISCOVER: &str = "6011111111111117";
    const DINERS: &str = "30569309025904";
    const JCB: &str = "3530111333300000";

    #[test]
    fn test_end_to_end() {
        for (number, id, display) in [
            (VISA_16, "visa", "4242 4242 4242 4242"),
            (VISA_13, "visa", "4222 2222 2222 2"),
            (MASTERCARD, "mastercard", "5555 5555 5555 4444"),
            (AMEX, "amex", "3782 822463 10005"),
            (DISCOVER, "discover", "6011 1111 1111 1117"),
            (DINERS, "diners-club", "3056 930902 5904"),
            (JCB, "jcb", "3530 1113 3330 0000"),
        ] {
            let network = resolve(number);
            assert_eq!(network.id(), id);
            assert_eq!(format(number, network), display);
            assert!(is_valid_card_number(number, network), "{}", number);
            assert!(is_valid_card_number(&format(number, network), network));
        }
    }

    #[test]
    fn test_resolution_precedence() {
        let amex = resolve("34");
        assert_eq!(amex.id(), "amex");
        assert_eq!(amex.valid_lengths(), &[15]);
        assert_eq!(amex.cvv_length(), 4);

        assert_eq!(resolve("4").id(), "visa");
        assert_eq!(resolve("6011").id(), "discover");
        assert!(resolve("9999").is_default());
    }

    #[test]
    fn test_cvv_examples() {
        assert!(is_valid_cvv("123", 3));
        assert!(!is_valid_cvv("1234", 3));
        assert!(!is_valid_cvv("12a", 3));
        assert!(!is_valid_cvv("", 3));
    }

    #[test]
    fn test_reformatting_is_a_no_op() {
        for raw in ["4242424242424242", "37828224631", "6011-1111-1", ""] {
            let network = resolve(raw);
            let once = format(raw, network);
            assert_eq!(format(&once, network), once);
        }
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<&'static NetworkDefinition>();
        assert_send_sync::<ValidationError>();
        assert_send_sync::<CvvError>();
        assert_send_sync::<CardEntry>();
    }

    #[test]
    fn test_concurrent_callers_share_the_catalog() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| resolve(AMEX)))
            .collect();
        for handle in handles {
            assert!(std::ptr::eq(handle.join().unwrap(), resolve(AMEX)));
        }
    }
}

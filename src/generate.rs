//! Test card number generation.
//!
//! Produces Luhn-valid numbers that resolve to a chosen catalog network.
//! These numbers are for exercising forms and tests only; they are not
//! connected to real accounts.
//!
//! # Example
//!
//! ```
//! use cc_input::generate::CardGenerator;
//! use cc_input::{catalog, resolve, validate::is_valid_card_number};
//!
//! let amex = catalog::find("amex").unwrap();
//! let number = CardGenerator::new(amex).generate_deterministic();
//! assert_eq!(number, "340000000000009");
//! assert_eq!(resolve(&number).id(), "amex");
//! assert!(is_valid_card_number(&number, amex));
//! ```

use crate::catalog::NetworkDefinition;
use crate::luhn;

#[cfg(feature = "generate")]
use rand::Rng;

/// Length generated when the caller does not pick one: 16 if the network
/// accepts it, otherwise its shortest length.
pub fn preferred_length(network: &NetworkDefinition) -> usize {
    if network.is_valid_length(16) {
        16
    } else {
        network.min_length()
    }
}

/// Leading digits used for a network: its first pattern's lowest value.
pub fn prefix_for(network: &NetworkDefinition) -> String {
    network
        .patterns()
        .first()
        .map(|p| p.lowest_prefix())
        .unwrap_or_default()
}

/// Builder for test card numbers.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Generator for a network's first prefix at its preferred length.
    pub fn new(network: &NetworkDefinition) -> Self {
        Self {
            prefix: prefix_for(network),
            length: preferred_length(network),
        }
    }

    /// Overrides the total length. Values not longer than the prefix are ignored.
    pub fn length(mut self, length: usize) -> Self {
        if length > self.prefix.len() {
            self.length = length;
        }
        self
    }

    /// Overrides the prefix. Non-digits are discarded; a prefix that leaves
    /// no room for the check digit is ignored.
    pub fn prefix(mut self, prefix: &str) -> Self {
        let digits: String = prefix.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() < self.length {
            self.prefix = digits;
        }
        self
    }

    /// Zero fill after the prefix, then the check digit. No randomness.
    pub fn generate_deterministic(&self) -> String {
        self.complete(|| 0)
    }

    /// Random fill after the prefix using the thread RNG.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        self.generate_with_rng(&mut rand::thread_rng())
    }

    /// Random fill using a caller-supplied (possibly seeded) RNG.
    #[cfg(feature = "generate")]
    pub fn generate_with_rng<R: Rng>(&self, rng: &mut R) -> String {
        self.complete(|| rng.gen_range(0..10))
    }

    fn complete(&self, mut fill: impl FnMut() -> u8) -> String {
        let mut digits: Vec<u8> = self.prefix.bytes().map(|b| b - b'0').collect();

        while digits.len() < self.length.saturating_sub(1) {
            digits.push(fill());
        }

        let check_digit = luhn::generate_check_digit(&digits);
        digits.push(check_digit);

        digits.iter().map(|&d| (b'0' + d) as char).collect()
    }
}

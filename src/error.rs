//! Error types for card number validation.
//!
//! The boolean predicates (`is_valid_card_number`, `is_valid_cvv`) are what
//! forms usually need; these errors back the `validate_*` variants that also
//! say why a value was rejected.

use std::fmt;

/// Reasons a card number fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No digits remained after sanitization.
    Empty,

    /// The digit count is not one the network accepts.
    InvalidLength {
        /// Identifier of the network the number was checked against.
        network: &'static str,
        /// The actual number of digits.
        length: usize,
        /// The valid lengths for this network.
        valid_lengths: &'static [u8],
    },

    /// The Luhn checksum failed, usually a typo.
    InvalidChecksum,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "card number is empty"),

            Self::InvalidLength {
                network,
                length,
                valid_lengths,
            } => {
                let valid_str: Vec<String> =
                    valid_lengths.iter().map(|l| l.to_string()).collect();
                write!(
                    f,
                    "{} cards must have {} digits, got {}",
                    network,
                    valid_str.join(" or "),
                    length
                )
            }

            Self::InvalidChecksum => {
                write!(f, "invalid checksum (Luhn check failed) - please verify the card number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

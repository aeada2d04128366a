//! CVV/CVC/CID validation.
//!
//! The expected length comes from the resolved network: 4 digits for
//! American Express, 3 for everything else in the catalog. When no network
//! context exists the generic rule accepts 3 or 4 digits.
//!
//! Whitespace is stripped before counting. Any other non-digit makes the
//! code invalid rather than being silently dropped, so `"12a"` fails even
//! though it contains two digits.
//!
//! # Example
//!
//! ```
//! use cc_input::cvv::{is_valid_cvv, is_valid_cvv_any, is_valid_cvv_for};
//! use cc_input::resolve;
//!
//! assert!(is_valid_cvv("123", 3));
//! assert!(!is_valid_cvv("1234", 3));
//!
//! assert!(is_valid_cvv_for("1234", resolve("34")));
//! assert!(is_valid_cvv_any("1234"));
//! ```

use crate::catalog::NetworkDefinition;
use std::fmt;

/// Longest code any network uses. UIs cap CVV input at this length when the
/// network is not yet known.
pub const MAX_CVV_LENGTH: usize = 4;

/// Shortest code any network uses.
pub const MIN_CVV_LENGTH: usize = 3;

/// Errors that can occur during CVV validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// Nothing but whitespace was entered.
    Empty,
    /// The CVV contains a non-digit character.
    InvalidCharacter {
        /// The invalid character found.
        character: char,
        /// Position of the invalid character in the raw input.
        position: usize,
    },
    /// The CVV does not have the exact length the network expects.
    WrongLength {
        /// Number of digits provided.
        length: usize,
        /// Expected number of digits.
        expected: usize,
    },
    /// The CVV is neither 3 nor 4 digits (no network context).
    InvalidLength {
        /// Number of digits provided.
        length: usize,
    },
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "CVV is empty"),
            Self::InvalidCharacter { character, position } => {
                write!(
                    f,
                    "invalid character '{}' at position {}",
                    character.escape_default(),
                    position
                )
            }
            Self::WrongLength { length, expected } => {
                write!(f, "CVV must be {} digits, got {}", expected, length)
            }
            Self::InvalidLength { length } => {
                write!(
                    f,
                    "CVV must be {} or {} digits, got {}",
                    MIN_CVV_LENGTH, MAX_CVV_LENGTH, length
                )
            }
        }
    }
}

impl std::error::Error for CvvError {}

/// Counts the digits of a CVV, ignoring whitespace.
fn count_digits(input: &str) -> Result<usize, CvvError> {
    let mut count = 0;

    for (position, character) in input.chars().enumerate() {
        if character.is_whitespace() {
            continue;
        }
        if !character.is_ascii_digit() {
            return Err(CvvError::InvalidCharacter {
                character,
                position,
            });
        }
        count += 1;
    }

    if count == 0 {
        return Err(CvvError::Empty);
    }

    Ok(count)
}

/// Validates a CVV against an exact expected length.
///
/// Returns the digit count on success.
///
/// # Example
///
/// ```
/// use cc_input::cvv::{validate_cvv, CvvError};
///
/// assert_eq!(validate_cvv("123", 3), Ok(3));
/// assert_eq!(
///     validate_cvv("1234", 3),
///     Err(CvvError::WrongLength { length: 4, expected: 3 })
/// );
/// ```
pub fn validate_cvv(input: &str, expected_length: usize) -> Result<usize, CvvError> {
    let length = count_digits(input)?;

    if length != expected_length {
        return Err(CvvError::WrongLength {
            length,
            expected: expected_length,
        });
    }

    Ok(length)
}

/// Validates a CVV without network context: 3 or 4 digits.
pub fn validate_cvv_any(input: &str) -> Result<usize, CvvError> {
    let length = count_digits(input)?;

    if !(MIN_CVV_LENGTH..=MAX_CVV_LENGTH).contains(&length) {
        return Err(CvvError::InvalidLength { length });
    }

    Ok(length)
}

/// Validates a CVV against the length a network expects.
#[inline]
pub fn validate_cvv_for(input: &str, network: &NetworkDefinition) -> Result<usize, CvvError> {
    validate_cvv(input, network.cvv_length())
}

/// Checks a CVV against an exact expected length.
#[inline]
pub fn is_valid_cvv(input: &str, expected_length: usize) -> bool {
    validate_cvv(input, expected_length).is_ok()
}

/// Checks a CVV without network context (3 or 4 digits).
#[inline]
pub fn is_valid_cvv_any(input: &str) -> bool {
    validate_cvv_any(input).is_ok()
}

/// Checks a CVV against the length a network expects.
#[inline]
pub fn is_valid_cvv_for(input: &str, network: &NetworkDefinition) -> bool {
    validate_cvv_for(input, network).is_ok()
}

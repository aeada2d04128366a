//! Card number validation.
//!
//! A number is valid for a network when its digit count is one the network
//! accepts and it passes the Luhn checksum. Input is sanitized first (every
//! non-digit is discarded), so the length compared is the digit count.
//!
//! Nothing here truncates: an over-length value is simply invalid. UIs that
//! want the truncated value should validate
//! [`canonical_digits`](crate::format::canonical_digits).

use crate::catalog::NetworkDefinition;
use crate::error::ValidationError;
use crate::format::sanitize;
use crate::luhn;
use crate::resolve::resolve_digits;

/// Validates a card number against a resolved network.
///
/// Length is checked before the checksum.
///
/// # Example
///
/// ```
/// use cc_input::validate::validate_card_number;
/// use cc_input::{resolve, ValidationError};
///
/// let input = "4242 4242 4242 4242";
/// assert!(validate_card_number(input, resolve(input)).is_ok());
///
/// let input = "4242 4242 4242 4243";
/// assert_eq!(
///     validate_card_number(input, resolve(input)),
///     Err(ValidationError::InvalidChecksum)
/// );
/// ```
pub fn validate_card_number(
    input: &str,
    network: &NetworkDefinition,
) -> Result<(), ValidationError> {
    check_digits(&sanitize(input), network)
}

fn check_digits(digits: &[u8], network: &NetworkDefinition) -> Result<(), ValidationError> {
    if digits.is_empty() {
        return Err(ValidationError::Empty);
    }

    if !network.is_valid_length(digits.len()) {
        return Err(ValidationError::InvalidLength {
            network: network.id(),
            length: digits.len(),
            valid_lengths: network.valid_lengths(),
        });
    }

    if !luhn::validate(digits) {
        return Err(ValidationError::InvalidChecksum);
    }

    Ok(())
}

/// Boolean form of [`validate_card_number`].
///
/// # Example
///
/// ```
/// use cc_input::validate::is_valid_card_number;
/// use cc_input::catalog;
///
/// let amex = catalog::find("amex").unwrap();
/// assert!(is_valid_card_number("378282246310005", amex));
/// assert!(!is_valid_card_number("4242424242424242", amex));
/// assert!(!is_valid_card_number("", amex));
/// ```
#[inline]
pub fn is_valid_card_number(input: &str, network: &NetworkDefinition) -> bool {
    validate_card_number(input, network).is_ok()
}

/// Resolves the network from the input, then validates against it.
///
/// Returns the resolved network on success.
///
/// # Example
///
/// ```
/// use cc_input::validate::validate_card;
///
/// let network = validate_card("3782-822463-10005").unwrap();
/// assert_eq!(network.id(), "amex");
/// ```
pub fn validate_card(input: &str) -> Result<&'static NetworkDefinition, ValidationError> {
    let digits = sanitize(input);
    let network = resolve_digits(&digits);
    check_digits(&digits, network)?;
    Ok(network)
}

/// Checks the Luhn checksum only, ignoring network and length.
///
/// # Example
///
/// ```
/// use cc_input::validate::passes_luhn;
///
/// assert!(passes_luhn("4111 1111 1111 1111"));
/// assert!(!passes_luhn("4111 1111 1111 1112"));
/// assert!(!passes_luhn(""));
/// ```
#[inline]
pub fn passes_luhn(input: &str) -> bool {
    luhn::validate(&sanitize(input))
}

//! Card number formatting for display.
//!
//! Digits are grouped according to the resolved network's segment layout:
//!
//! - **Visa/Mastercard/Discover**: `XXXX XXXX XXXX XXXX`
//! - **American Express**: `XXXX XXXXXX XXXXX`
//! - **Diners Club**: `XXXX XXXXXX XXXX`
//! - **Unknown**: groups of 4
//!
//! Formatting is meant to run on every keystroke. Partial input produces a
//! partial grouping (no padding), and digits beyond the network's maximum
//! length are dropped so the display doubles as an over-length guard.
//!
//! # Example
//!
//! ```
//! use cc_input::format::{format, format_card_number};
//! use cc_input::resolve::resolve;
//!
//! let input = "4242424242424242";
//! assert_eq!(format(input, resolve(input)), "4242 4242 4242 4242");
//!
//! // Amex formatting
//! assert_eq!(format_card_number("378282246310005"), "3782 822463 10005");
//!
//! // Partial input
//! assert_eq!(format_card_number("42424"), "4242 4");
//! ```

use crate::catalog::NetworkDefinition;
use crate::resolve::resolve_digits;

/// Extracts digit values (0-9) from raw input, discarding everything else.
pub(crate) fn sanitize(input: &str) -> Vec<u8> {
    input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Strips all formatting from a card number, leaving only digits.
///
/// # Example
///
/// ```
/// use cc_input::format::strip_formatting;
///
/// assert_eq!(strip_formatting("4111 1111 1111 1111"), "4111111111111111");
/// assert_eq!(strip_formatting("4111-1111-1111-1111"), "4111111111111111");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns the sanitized digits truncated to the network's maximum length.
///
/// This is the canonical field value: what the user effectively entered once
/// formatting characters and over-length digits are removed.
///
/// # Example
///
/// ```
/// use cc_input::format::canonical_digits;
/// use cc_input::catalog;
///
/// let amex = catalog::find("amex").unwrap();
/// assert_eq!(canonical_digits("3782 822463 100059999", amex), "378282246310005");
/// ```
pub fn canonical_digits(input: &str, network: &NetworkDefinition) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(network.max_length())
        .collect()
}

/// Formats input for display using the network's grouping and a space.
///
/// # Example
///
/// ```
/// use cc_input::format::format;
/// use cc_input::catalog;
///
/// let visa = catalog::find("visa").unwrap();
/// assert_eq!(format("4111111111111111", visa), "4111 1111 1111 1111");
/// assert_eq!(format("4111-1111-1", visa), "4111 1111 1");
/// assert_eq!(format("", visa), "");
/// ```
pub fn format(input: &str, network: &NetworkDefinition) -> String {
    format_with_separator(input, network, " ")
}

/// Formats input for display with a custom separator between groups.
///
/// # Example
///
/// ```
/// use cc_input::format::format_with_separator;
/// use cc_input::catalog;
///
/// let visa = catalog::find("visa").unwrap();
/// assert_eq!(
///     format_with_separator("4111111111111111", visa, "-"),
///     "4111-1111-1111-1111"
/// );
/// ```
pub fn format_with_separator(input: &str, network: &NetworkDefinition, separator: &str) -> String {
    let groups = split_into_groups(input, network);
    groups.join(separator)
}

/// Splits input into display groups per the network's segment layout.
///
/// The last group may be shorter than its declared size while the user is
/// still typing.
///
/// # Example
///
/// ```
/// use cc_input::format::split_into_groups;
/// use cc_input::catalog;
///
/// let amex = catalog::find("amex").unwrap();
/// assert_eq!(split_into_groups("378282246310005", amex), vec!["3782", "822463", "10005"]);
/// assert_eq!(split_into_groups("37828", amex), vec!["3782", "8"]);
/// ```
pub fn split_into_groups(input: &str, network: &NetworkDefinition) -> Vec<String> {
    let digits = canonical_digits(input, network);
    let mut groups = Vec::with_capacity(network.segment_layout().len());
    let mut rest = digits.as_str();

    for &size in network.segment_layout() {
        if rest.is_empty() {
            break;
        }
        // ASCII digits only, so byte offsets are char boundaries.
        let (group, tail) = rest.split_at((size as usize).min(rest.len()));
        groups.push(group.to_string());
        rest = tail;
    }

    // A layout shorter than max_length would be a catalog bug; keep the digits anyway.
    if !rest.is_empty() {
        groups.push(rest.to_string());
    }

    groups
}

/// Resolves the network from the input itself, then formats.
///
/// # Example
///
/// ```
/// use cc_input::format::format_card_number;
///
/// assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
/// assert_eq!(format_card_number("30569309025904"), "3056 930902 5904");
/// ```
pub fn format_card_number(input: &str) -> String {
    let network = resolve_digits(&sanitize(input));
    format(input, network)
}

//! Card network resolution using BIN/IIN prefix matching.
//!
//! The Bank Identification Number (BIN), also known as Issuer Identification
//! Number (IIN), is the leading 6-8 digits of a card number. Resolution
//! compares those leading digits against every catalog entry's patterns and
//! picks the entry whose pattern compared the most digits. Ties go to the
//! entry declared first in [`CATALOG`].
//!
//! Partial input is expected: `"3"` is compatible with Amex, Diners Club and
//! JCB at one digit each, so it resolves to Amex by declaration order; `"36"`
//! then narrows to Diners Club.
//!
//! Resolution never fails. Empty or unrecognised input yields
//! [`DEFAULT_NETWORK`].

use crate::catalog::{NetworkDefinition, CATALOG, DEFAULT_NETWORK};
use crate::format::sanitize;

/// Resolves the network for raw input.
///
/// Non-digit characters (spaces, dashes, anything else) are discarded before
/// matching, so text produced by the formatter can be fed straight back in.
///
/// # Example
///
/// ```
/// use cc_input::resolve::resolve;
///
/// assert_eq!(resolve("4").id(), "visa");
/// assert_eq!(resolve("34").id(), "amex");
/// assert_eq!(resolve("6011 0009").id(), "discover");
/// assert!(resolve("9999").is_default());
/// assert!(resolve("").is_default());
/// ```
pub fn resolve(input: &str) -> &'static NetworkDefinition {
    resolve_digits(&sanitize(input))
}

/// Resolves the network from a slice of digit values (0-9).
///
/// Only the leading digits matter; the longest catalog pattern is 8 digits.
///
/// # Example
///
/// ```
/// use cc_input::resolve::resolve_digits;
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(resolve_digits(&amex).id(), "amex");
/// assert!(resolve_digits(&[]).is_default());
/// ```
pub fn resolve_digits(digits: &[u8]) -> &'static NetworkDefinition {
    let mut best: Option<(&'static NetworkDefinition, usize)> = None;

    for network in CATALOG.iter() {
        if let Some(len) = network.match_len(digits) {
            // Strictly greater: earlier declarations keep ties.
            if best.map_or(true, |(_, best_len)| len > best_len) {
                best = Some((network, len));
            }
        }
    }

    let resolved = best.map_or(&DEFAULT_NETWORK, |(network, _)| network);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        network = resolved.id(),
        specificity = best.map_or(0, |(_, len)| len),
        "resolved card network"
    );

    resolved
}

/// Returns every catalog entry compatible with the input, most specific
/// first. Entries with equal specificity keep declaration order.
///
/// An empty result means [`resolve`] would return the default definition.
///
/// # Example
///
/// ```
/// use cc_input::resolve::matching_networks;
///
/// let ids: Vec<_> = matching_networks("3").iter().map(|n| n.id()).collect();
/// assert_eq!(ids, ["amex", "diners-club", "jcb"]);
///
/// let ids: Vec<_> = matching_networks("36").iter().map(|n| n.id()).collect();
/// assert_eq!(ids, ["diners-club"]);
/// ```
pub fn matching_networks(input: &str) -> Vec<&'static NetworkDefinition> {
    let digits = sanitize(input);

    let mut matches: Vec<(&'static NetworkDefinition, usize)> = CATALOG
        .iter()
        .filter_map(|network| network.match_len(&digits).map(|len| (network, len)))
        .collect();

    // sort_by is stable, so declaration order survives among equals
    matches.sort_by(|a, b| b.1.cmp(&a.1));
    matches.into_iter().map(|(network, _)| network).collect()
}

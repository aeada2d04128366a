//! Field snapshots for live card input.
//!
//! A UI calls [`CardEntry::new`] with the raw text of the card number field
//! on every change and renders what comes back: the grouped display string,
//! the icon key and the maximum digit count. Nothing is retained between
//! calls; the snapshot is recomputed from scratch each time.
//!
//! # Example
//!
//! ```
//! use cc_input::entry::{CardEntry, CvvEntry};
//!
//! let card = CardEntry::new("3782 8224");
//! assert_eq!(card.icon(), "amex");
//! assert_eq!(card.display(), "3782 8224");
//! assert_eq!(card.max_length(), 15);
//! assert!(!card.is_complete());
//!
//! let card = CardEntry::new("378282246310005");
//! assert!(card.is_valid());
//!
//! let cvv = CvvEntry::for_card("1234", &card);
//! assert!(cvv.is_valid());
//! ```

use crate::catalog::{NetworkDefinition, DEFAULT_ID};
use crate::cvv::{self, CvvError, MAX_CVV_LENGTH};
use crate::error::ValidationError;
use crate::format;
use crate::resolve::resolve;
use crate::validate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Snapshot of the card number field for one input value.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CardEntry {
    value: String,
    display: String,
    network: &'static NetworkDefinition,
}

impl CardEntry {
    /// Resolves, truncates and formats raw field text.
    pub fn new(raw: &str) -> Self {
        Self::with_network(raw, resolve(raw))
    }

    /// Truncates and formats raw field text for a network chosen by the
    /// caller instead of the resolved one.
    pub fn with_network(raw: &str, network: &'static NetworkDefinition) -> Self {
        Self {
            value: format::canonical_digits(raw, network),
            display: format::format(raw, network),
            network,
        }
    }

    /// Canonical digits: sanitized and truncated to the network maximum.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Grouped string to write back into the field.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Resolved network (the default definition when nothing matches).
    #[inline]
    pub fn network(&self) -> &'static NetworkDefinition {
        self.network
    }

    /// Icon key: `"default"` for an empty field, else the network id.
    pub fn icon(&self) -> &'static str {
        if self.is_empty() {
            DEFAULT_ID
        } else {
            self.network.id()
        }
    }

    /// Maximum number of digits the field should accept.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.network.max_length()
    }

    /// Number of digits entered so far.
    #[inline]
    pub fn length(&self) -> usize {
        self.value.len()
    }

    /// True when no digits have been entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// True when the digit count is one the network accepts, checksum aside.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.network.is_valid_length(self.value.len())
    }

    /// Length and Luhn check against the entry's network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate_card_number(&self.value, self.network)
    }

    /// Boolean form of [`validate`](Self::validate).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// CVV length expected for the resolved network.
    #[inline]
    pub fn cvv_length(&self) -> usize {
        self.network.cvv_length()
    }
}

impl Default for CardEntry {
    fn default() -> Self {
        Self::new("")
    }
}

impl fmt::Debug for CardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Digits are omitted so the entry can be logged.
        f.debug_struct("CardEntry")
            .field("network", &self.network.id())
            .field("length", &self.value.len())
            .finish()
    }
}

/// Snapshot of the CVV field for one input value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CvvEntry {
    value: String,
    expected: Option<usize>,
}

impl CvvEntry {
    /// Wraps raw CVV text. `expected` is the network's CVV length when known.
    pub fn new(raw: &str, expected: Option<usize>) -> Self {
        Self {
            value: raw.to_string(),
            expected,
        }
    }

    /// CVV field tied to the network of a card entry.
    ///
    /// An empty card field gives no network context, so the generic rule
    /// applies.
    pub fn for_card(raw: &str, card: &CardEntry) -> Self {
        let expected = (!card.is_empty()).then(|| card.cvv_length());
        Self::new(raw, expected)
    }

    /// Raw text as entered.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Expected length, when a network is known.
    #[inline]
    pub fn expected(&self) -> Option<usize> {
        self.expected
    }

    /// Maximum number of characters the field should accept.
    #[inline]
    pub fn max_length(&self) -> usize {
        self.expected.unwrap_or(MAX_CVV_LENGTH)
    }

    /// True when nothing but whitespace has been entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Exact-length check when a network is known, 3 or 4 digits otherwise.
    pub fn validate(&self) -> Result<usize, CvvError> {
        match self.expected {
            Some(expected) => cvv::validate_cvv(&self.value, expected),
            None => cvv::validate_cvv_any(&self.value),
        }
    }

    /// Boolean form of [`validate`](Self::validate).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

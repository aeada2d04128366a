//! Static catalog of card network definitions.
//!
//! Every network the toolkit knows about is described once here, as plain
//! data: the IIN/BIN prefixes that identify it, the total lengths a complete
//! number may have, the digit grouping used for display and the expected
//! CVV length.
//!
//! The catalog is read-only and process-wide. Resolution results are
//! `&'static NetworkDefinition` references into it, so they can be shared
//! freely between threads.
//!
//! # Example
//!
//! ```
//! use cc_input::catalog::{self, CATALOG, DEFAULT_NETWORK};
//!
//! let amex = catalog::find("amex").unwrap();
//! assert_eq!(amex.cvv_length(), 4);
//! assert_eq!(amex.max_length(), 15);
//!
//! assert!(CATALOG.iter().all(|n| !n.is_default()));
//! assert!(DEFAULT_NETWORK.is_default());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Identifier carried by the fallback definition.
pub const DEFAULT_ID: &str = "default";

/// A prefix rule identifying a card network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Pattern {
    /// Exact leading digits, e.g. `"34"` for Amex.
    Prefix(&'static str),
    /// Inclusive numeric range over the leading digits, e.g. 2221..=2720.
    ///
    /// Both bounds have the same number of digits; that count is how many
    /// leading digits of the input are compared.
    Range {
        /// Lower bound.
        min: u32,
        /// Upper bound.
        max: u32,
    },
}

impl Pattern {
    /// Number of leading digits this pattern inspects.
    pub fn width(&self) -> usize {
        match self {
            Self::Prefix(prefix) => prefix.len(),
            Self::Range { min, .. } => digit_count(*min),
        }
    }

    /// Tests the pattern against leading digit values (0-9).
    ///
    /// Returns the number of digits that took part in the comparison when
    /// the input is compatible with the pattern. Inputs shorter than the
    /// pattern are compared against the pattern's own leading digits, so
    /// `"3"` is compatible with `Prefix("34")` at one digit of specificity.
    pub fn match_len(&self, digits: &[u8]) -> Option<usize> {
        if digits.is_empty() {
            return None;
        }

        match *self {
            Self::Prefix(prefix) => {
                let compared = prefix.len().min(digits.len());
                let matches = prefix
                    .bytes()
                    .zip(digits)
                    .take(compared)
                    .all(|(p, &d)| p.is_ascii_digit() && p - b'0' == d);
                matches.then_some(compared)
            }
            Self::Range { min, max } => {
                let width = digit_count(min);
                let compared = width.min(digits.len());
                let divisor = 10u32.pow((width - compared) as u32);
                // Overflow means the value is already above any u32 bound.
                let value = digits[..compared].iter().try_fold(0u32, |acc, &d| {
                    acc.checked_mul(10)?.checked_add(u32::from(d))
                })?;
                (value >= min / divisor && value <= max / divisor).then_some(compared)
            }
        }
    }

    /// The lowest digit string this pattern accepts.
    pub fn lowest_prefix(&self) -> String {
        match self {
            Self::Prefix(prefix) => (*prefix).to_string(),
            Self::Range { min, .. } => min.to_string(),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prefix(prefix) => write!(f, "{}", prefix),
            Self::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

fn digit_count(mut value: u32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

/// Everything the toolkit knows about one card network.
#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct NetworkDefinition {
    id: &'static str,
    name: &'static str,
    patterns: &'static [Pattern],
    lengths: &'static [u8],
    layout: &'static [u8],
    cvv_length: u8,
    cvv_name: &'static str,
}

impl NetworkDefinition {
    /// Short unique code, e.g. `"visa"`. Used by UIs to pick an icon.
    #[inline]
    pub const fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable network name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Prefix rules, in declaration order.
    #[inline]
    pub const fn patterns(&self) -> &'static [Pattern] {
        self.patterns
    }

    /// Accepted total digit counts for a complete number, ascending.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        self.lengths
    }

    /// Group sizes used when formatting for display.
    #[inline]
    pub const fn segment_layout(&self) -> &'static [u8] {
        self.layout
    }

    /// Expected number of CVV digits.
    #[inline]
    pub const fn cvv_length(&self) -> usize {
        self.cvv_length as usize
    }

    /// What the network calls its security code (CVV, CVC, CID, ...).
    #[inline]
    pub const fn cvv_name(&self) -> &'static str {
        self.cvv_name
    }

    /// Returns true for the fallback definition used when nothing matches.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.id == DEFAULT_ID
    }

    /// Returns true if the given length is valid for this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.lengths;
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Shortest accepted length.
    pub fn min_length(&self) -> usize {
        self.lengths.iter().copied().min().unwrap_or(0) as usize
    }

    /// Longest accepted length. Input beyond this is dropped by the formatter.
    pub fn max_length(&self) -> usize {
        self.lengths.iter().copied().max().unwrap_or(0) as usize
    }

    /// Most specific match of any of this network's patterns.
    pub(crate) fn match_len(&self, digits: &[u8]) -> Option<usize> {
        self.patterns
            .iter()
            .filter_map(|p| p.match_len(digits))
            .max()
    }
}

impl fmt::Display for NetworkDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

const FOUR_BY_FOUR: &[u8] = &[4, 4, 4, 4];
const NINETEEN: &[u8] = &[4, 4, 4, 4, 3];
const SIXTEEN_TO_NINETEEN: &[u8] = &[16, 17, 18, 19];

/// Fallback used when no catalog entry matches (including empty input).
pub static DEFAULT_NETWORK: NetworkDefinition = NetworkDefinition {
    id: DEFAULT_ID,
    name: "Unknown",
    patterns: &[],
    lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
    layout: NINETEEN,
    cvv_length: 3,
    cvv_name: "CVV",
};

/// Known networks. On equal specificity the earlier entry wins.
pub static CATALOG: [NetworkDefinition; 12] = [
    NetworkDefinition {
        id: "visa",
        name: "Visa",
        patterns: &[Pattern::Prefix("4")],
        lengths: &[13, 16, 18, 19],
        layout: NINETEEN,
        cvv_length: 3,
        cvv_name: "CVV",
    },
    NetworkDefinition {
        id: "mastercard",
        name: "Mastercard",
        patterns: &[
            Pattern::Range { min: 51, max: 55 },
            Pattern::Range { min: 2221, max: 2720 },
        ],
        lengths: &[16],
        layout: FOUR_BY_FOUR,
        cvv_length: 3,
        cvv_name: "CVC",
    },
    NetworkDefinition {
        id: "amex",
        name: "American Express",
        patterns: &[Pattern::Prefix("34"), Pattern::Prefix("37")],
        lengths: &[15],
        layout: &[4, 6, 5],
        cvv_length: 4,
        cvv_name: "CID",
    },
    NetworkDefinition {
        id: "diners-club",
        name: "Diners Club",
        patterns: &[
            Pattern::Range { min: 300, max: 305 },
            Pattern::Prefix("36"),
            Pattern::Prefix("38"),
            Pattern::Prefix("39"),
        ],
        lengths: &[14, 16, 19],
        layout: &[4, 6, 9],
        cvv_length: 3,
        cvv_name: "CVV",
    },
    NetworkDefinition {
        id: "discover",
        name: "Discover",
        patterns: &[
            Pattern::Prefix("6011"),
            Pattern::Range { min: 644, max: 649 },
            Pattern::Prefix("65"),
        ],
        lengths: &[16, 19],
        layout: NINETEEN,
        cvv_length: 3,
        cvv_name: "CID",
    },
    NetworkDefinition {
        id: "jcb",
        name: "JCB",
        patterns: &[
            Pattern::Prefix("2131"),
            Pattern::Prefix("1800"),
            Pattern::Range { min: 3528, max: 3589 },
        ],
        lengths: SIXTEEN_TO_NINETEEN,
        layout: NINETEEN,
        cvv_length: 3,
        cvv_name: "CVV",
    },
    NetworkDefinition {
        id: "unionpay",
        name: "UnionPay",
        patterns: &[Pattern::Prefix("62"), Pattern::Prefix("81")],
        lengths: &[14, 15, 16, 17, 18, 19],
        layout: NINETEEN,
        cvv_length: 3,
        cvv_name: "CVN",
    },
    NetworkDefinition {
        id: "maestro",
        name: "Maestro",
        patterns: &[
            Pattern::Range { min: 500000, max: 504174 },
            Pattern::Range { min: 504176, max: 506698 },
            Pattern::Range { min: 506779, max: 508999 },
            Pattern::Range { min: 56, max: 59 },
            Pattern::Prefix("63"),
            Pattern::Prefix("67"),
            Pattern::Prefix("6"),
        ],
        lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
        layout: NINETEEN,
        cvv_length: 3,
        cvv_name: "CVC",
    },
    NetworkDefinition {
        id: "mir",
        name: "Mir",
        patterns: &[Pattern::Range { min: 2200, max: 2204 }],
        lengths: SIXTEEN_TO_NINETEEN,
        layout: NINETEEN,
        cvv_length: 3,
        cvv_name: "CVP2",
    },
    NetworkDefinition {
        id: "elo",
        name: "Elo",
        patterns: &[
            Pattern::Prefix("401178"),
            Pattern::Prefix("401179"),
            Pattern::Prefix("431274"),
            Pattern::Prefix("438935"),
            Pattern::Prefix("451416"),
            Pattern::Prefix("457393"),
            Pattern::Prefix("457631"),
            Pattern::Prefix("457632"),
            Pattern::Prefix("504175"),
            Pattern::Range { min: 506699, max: 506778 },
            Pattern::Range { min: 509000, max: 509999 },
            Pattern::Prefix("627780"),
            Pattern::Prefix("636297"),
            Pattern::Prefix("636368"),
            Pattern::Range { min: 650031, max: 650033 },
            Pattern::Range { min: 650035, max: 650051 },
            Pattern::Range { min: 650405, max: 650439 },
            Pattern::Range { min: 650485, max: 650538 },
            Pattern::Range { min: 650541, max: 650598 },
            Pattern::Range { min: 650700, max: 650718 },
            Pattern::Range { min: 650720, max: 650727 },
            Pattern::Range { min: 650901, max: 650978 },
            Pattern::Range { min: 651652, max: 651679 },
            Pattern::Range { min: 655000, max: 655019 },
            Pattern::Range { min: 655021, max: 655058 },
        ],
        lengths: &[16],
        layout: FOUR_BY_FOUR,
        cvv_length: 3,
        cvv_name: "CVE",
    },
    NetworkDefinition {
        id: "hiper",
        name: "Hiper",
        patterns: &[
            Pattern::Prefix("637095"),
            Pattern::Prefix("63737423"),
            Pattern::Prefix("63743358"),
            Pattern::Prefix("637568"),
            Pattern::Prefix("637599"),
            Pattern::Prefix("637609"),
            Pattern::Prefix("637612"),
        ],
        lengths: &[16],
        layout: FOUR_BY_FOUR,
        cvv_length: 3,
        cvv_name: "CVC",
    },
    NetworkDefinition {
        id: "hipercard",
        name: "Hipercard",
        patterns: &[Pattern::Prefix("606282")],
        lengths: &[16],
        layout: FOUR_BY_FOUR,
        cvv_length: 3,
        cvv_name: "CVC",
    },
];

/// Looks up a definition by identifier. `"default"` yields [`DEFAULT_NETWORK`].
pub fn find(id: &str) -> Option<&'static NetworkDefinition> {
    if id == DEFAULT_ID {
        return Some(&DEFAULT_NETWORK);
    }
    CATALOG.iter().find(|n| n.id == id)
}

/// Iterates over the catalog entries in declaration order.
pub fn networks() -> impl Iterator<Item = &'static NetworkDefinition> {
    CATALOG.iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_definitions() -> impl Iterator<Item = &'static NetworkDefinition> {
        CATALOG.iter().chain(std::iter::once(&DEFAULT_NETWORK))
    }

    #[test]
    fn test_identifiers_are_unique() {
        let mut seen = HashSet::new();
        for network in all_definitions() {
            assert!(seen.insert(network.id()), "duplicate id {}", network.id());
        }
    }

    #[test]
    fn test_lengths_are_sorted_and_non_empty() {
        for network in all_definitions() {
            let lengths = network.valid_lengths();
            assert!(!lengths.is_empty(), "{} has no lengths", network.id());
            assert!(
                lengths.windows(2).all(|w| w[0] < w[1]),
                "{} lengths not ascending",
                network.id()
            );
        }
    }

    #[test]
    fn test_layout_covers_max_length() {
        for network in all_definitions() {
            let layout = network.segment_layout();
            assert!(layout.iter().all(|&g| g > 0), "{} has empty group", network.id());
            let total: usize = layout.iter().map(|&g| g as usize).sum();
            assert!(
                total >= network.max_length(),
                "{} layout sums to {} but max length is {}",
                network.id(),
                total,
                network.max_length()
            );
        }
    }

    #[test]
    fn test_patterns_are_well_formed() {
        for network in CATALOG.iter() {
            assert!(!network.patterns().is_empty(), "{} has no patterns", network.id());
            for pattern in network.patterns() {
                match *pattern {
                    Pattern::Prefix(prefix) => {
                        assert!(!prefix.is_empty());
                        assert!(prefix.bytes().all(|b| b.is_ascii_digit()));
                    }
                    Pattern::Range { min, max } => {
                        assert!(min <= max, "{} range {} inverted", network.id(), pattern);
                        assert_eq!(digit_count(min), digit_count(max));
                    }
                }
                assert!(pattern.width() <= 8);
            }
        }
    }

    #[test]
    fn test_cvv_lengths() {
        for network in all_definitions() {
            assert!(matches!(network.cvv_length(), 3 | 4));
        }
        assert_eq!(find("amex").unwrap().cvv_length(), 4);
        assert_eq!(find("visa").unwrap().cvv_length(), 3);
    }

    #[test]
    fn test_default_definition() {
        assert!(DEFAULT_NETWORK.patterns().is_empty());
        assert_eq!(DEFAULT_NETWORK.cvv_length(), 3);
        assert_eq!(DEFAULT_NETWORK.min_length(), 12);
        assert_eq!(DEFAULT_NETWORK.max_length(), 19);
        assert!(DEFAULT_NETWORK.segment_layout().iter().take(4).all(|&g| g == 4));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("visa").unwrap().name(), "Visa");
        assert_eq!(find("diners-club").unwrap().name(), "Diners Club");
        assert!(find("default").unwrap().is_default());
        assert!(find("troy").is_none());
        assert_eq!(networks().count(), CATALOG.len());
    }

    #[test]
    fn test_valid_lengths() {
        let visa = find("visa").unwrap();
        assert!(visa.is_valid_length(16));
        assert!(visa.is_valid_length(13));
        assert!(visa.is_valid_length(19));
        assert!(!visa.is_valid_length(15));

        let amex = find("amex").unwrap();
        assert!(amex.is_valid_length(15));
        assert!(!amex.is_valid_length(16));
    }

    #[test]
    fn test_prefix_match_len() {
        let amex = Pattern::Prefix("34");
        assert_eq!(amex.match_len(&[3]), Some(1));
        assert_eq!(amex.match_len(&[3, 4]), Some(2));
        assert_eq!(amex.match_len(&[3, 4, 0, 0]), Some(2));
        assert_eq!(amex.match_len(&[3, 5]), None);
        assert_eq!(amex.match_len(&[]), None);
    }

    #[test]
    fn test_range_match_len() {
        let mastercard = Pattern::Range { min: 2221, max: 2720 };
        assert_eq!(mastercard.match_len(&[2]), Some(1));
        assert_eq!(mastercard.match_len(&[2, 7]), Some(2));
        assert_eq!(mastercard.match_len(&[2, 8]), None);
        assert_eq!(mastercard.match_len(&[2, 2, 2, 0]), None);
        assert_eq!(mastercard.match_len(&[2, 2, 2, 1]), Some(4));
        assert_eq!(mastercard.match_len(&[2, 7, 2, 0, 9]), Some(4));
        assert_eq!(mastercard.match_len(&[2, 7, 2, 1]), None);
    }

    #[test]
    fn test_range_is_numeric_not_lexicographic() {
        let discover = Pattern::Range { min: 644, max: 649 };
        assert_eq!(discover.match_len(&[6, 4, 4]), Some(3));
        assert_eq!(discover.match_len(&[6, 4, 9]), Some(3));
        assert_eq!(discover.match_len(&[6, 4, 3]), None);
        assert_eq!(discover.match_len(&[6, 5, 0]), None);
    }

    #[test]
    fn test_malformed_prefix_never_matches() {
        let slash = Pattern::Prefix("/");
        assert_eq!(slash.match_len(&[0]), None);
        assert_eq!(slash.match_len(&[255]), None);

        let mixed = Pattern::Prefix("3a");
        assert_eq!(mixed.match_len(&[3]), Some(1));
        assert_eq!(mixed.match_len(&[3, 0]), None);
    }

    #[test]
    fn test_ten_digit_range_does_not_overflow() {
        let wide = Pattern::Range {
            min: 1_000_000_000,
            max: 4_000_000_000,
        };
        assert_eq!(wide.match_len(&[3, 9, 9, 9, 9, 9, 9, 9, 9, 9]), Some(10));
        assert_eq!(wide.match_len(&[4, 2, 9, 4, 9, 6, 7, 2, 9, 6]), None);
        assert_eq!(wide.match_len(&[9; 10]), None);
        assert_eq!(wide.match_len(&[2]), Some(1));
    }

    #[test]
    fn test_pattern_display() {
        assert_eq!(Pattern::Prefix("6011").to_string(), "6011");
        assert_eq!(Pattern::Range { min: 51, max: 55 }.to_string(), "51-55");
        assert_eq!(Pattern::Range { min: 3528, max: 3589 }.lowest_prefix(), "3528");
    }
}

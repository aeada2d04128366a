//! Luhn (mod 10) checksum.
//!
//! Starting from the rightmost digit, every second digit is doubled and 9 is
//! subtracted from any doubled value above 9. The number is valid when the
//! sum of all resulting digits is a multiple of 10.

/// Doubled digit with 9 subtracted when the result exceeds 9, indexed by digit.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates digit values (0-9) using the Luhn algorithm.
///
/// Empty input is never valid.
///
/// # Example
///
/// ```
/// use cc_input::luhn::validate;
///
/// let digits = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2];
/// assert!(validate(&digits));
///
/// let invalid = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 3];
/// assert!(!validate(&invalid));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10).
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    weighted_sum(digits, false)
}

/// Computes the check digit to append so the number passes [`validate`].
///
/// # Example
///
/// ```
/// use cc_input::luhn::generate_check_digit;
///
/// let partial = [4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4, 2, 4];
/// assert_eq!(generate_check_digit(&partial), 2);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Once the check digit is appended every existing digit shifts one
    // position left, so the rightmost one here is doubled.
    let sum = weighted_sum(digits, true);
    ((10 - sum % 10) % 10) as u8
}

fn weighted_sum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let doubled = (i % 2 == 1) != double_rightmost;
            if doubled {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! Coercion between the textual and integer forms of bit data.
//!
//! Both directions are total and deterministic: [`binary_value`] parses the
//! leading run of binary digits and defaults to zero, [`bit_char`] maps one
//! bit to its '0'/'1' text form. Sequences and validation rules share these
//! functions so the two representations can never disagree.

/// Parse the leading run of '0'/'1' characters in `text` as a base-2 integer.
///
/// Parsing stops at the first non-binary character; an empty or non-binary
/// prefix yields 0. Values wider than 64 bits saturate at `u64::MAX`.
///
/// # Examples
///
/// ```
/// use bitgate::coerce::binary_value;
///
/// assert_eq!(binary_value("101"), 5);
/// assert_eq!(binary_value(""), 0);
/// assert_eq!(binary_value("10x1"), 2);
/// assert_eq!(binary_value("junk"), 0);
/// ```
pub fn binary_value(text: &str) -> u64 {
    let mut value: u64 = 0;
    for ch in text.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            _ => break,
        };
        value = match value.checked_mul(2).and_then(|v| v.checked_add(bit)) {
            Some(v) => v,
            None => return u64::MAX,
        };
    }
    value
}

/// Text form of a single bit.
pub fn bit_char(set: bool) -> char {
    if set { '1' } else { '0' }
}

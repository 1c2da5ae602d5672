// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-width bit sequences validated by polymorphic rules.
//!
//! A [`BitSequence`] packs a list of truthy/falsy values into a fixed-width
//! run of bits, gives positional read/write access, and renders the whole
//! value as '0'/'1' text or as a base-2 integer. Each sequence carries a
//! [`ValidationRule`] deciding which patterns are acceptable: an exact text
//! pattern, an exact integer, a set of patterns, or an arbitrary predicate.
//!
//! # Quick start
//!
//! ```
//! use bitgate::{BitSequence, SequenceConfig, ValidationRule};
//!
//! // two flags; accept the patterns for 1 and 2
//! let config = SequenceConfig::new()
//!     .size(2)
//!     .validation(ValidationRule::pattern_set([1u64, 2]));
//! let mut seq = BitSequence::new(config, &[&false, &false])?;
//! assert_eq!(seq.to_string(), "00");
//! assert!(!seq.is_valid());
//!
//! seq.set(0, true)?;
//! assert_eq!(seq.to_string(), "10");
//! assert_eq!(seq.to_int(), 2);
//! assert!(seq.is_valid());
//! # Ok::<(), bitgate::BitGateError>(())
//! ```
//!
//! The [`bits!`] macro builds a sequence straight from mixed values:
//!
//! ```
//! let seq = bitgate::bits![true, 0, "x", ""];
//! assert_eq!(seq.to_string(), "1010");
//! ```

pub mod coerce;
pub mod error;
pub mod rules;
pub mod sequence;
pub mod truthy;

pub use error::{BitGateError, Result};
pub use rules::{Pattern, Predicate, ValidationRule};
pub use sequence::{BitSequence, SequenceConfig};
pub use truthy::Truthy;

/// Build a [`BitSequence`] from a variadic list of truthy/falsy values.
///
/// Values may mix types; each contributes one bit through [`Truthy`]. The
/// sequence is sized to the number of values and keeps the default all-ones
/// validation rule.
///
/// ```
/// let seq = bitgate::bits![true, 1, 0.0, "no"];
/// assert_eq!(seq.to_string(), "1101");
/// ```
#[macro_export]
macro_rules! bits {
    ($($value:expr),* $(,)?) => {
        $crate::BitSequence::from_values(&[$(&$value as &dyn $crate::Truthy),*])
    };
}

// SPDX-License-Identifier: MIT OR Apache-2.0
//! The fixed-width bit sequence container.
//!
//! A [`BitSequence`] is built once from a list of truthy/falsy values,
//! right-padded with zero bits to its fixed size, and carries the
//! [`ValidationRule`] that decides whether its current pattern is
//! acceptable. Construction is driven by a [`SequenceConfig`] builder;
//! all configuration errors surface at construction time, before any
//! sequence state exists.

use std::fmt::{self, Write as _};

use serde_json::Value;
use tracing::{debug, trace};

use crate::coerce;
use crate::error::{BitGateError, Result};
use crate::rules::ValidationRule;
use crate::truthy::Truthy;

/// Builder-style construction options for [`BitSequence`].
///
/// ```
/// use bitgate::{BitSequence, SequenceConfig, ValidationRule};
///
/// let config = SequenceConfig::new()
///     .size(3)
///     .validation(ValidationRule::exact_int(5));
/// let seq = BitSequence::new(config, &[&true, &false, &true])?;
/// assert!(seq.is_valid());
/// # Ok::<(), bitgate::BitGateError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SequenceConfig {
    size: Option<usize>,
    validation: Option<RuleSpec>,
}

/// Validation slot contents: already typed, or a payload still to classify.
#[derive(Debug, Clone)]
enum RuleSpec {
    Typed(ValidationRule),
    Payload(Value),
}

impl SequenceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the sequence width. Without this the width follows the number
    /// of initial values.
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Attach a typed validation rule (or anything convertible into one,
    /// such as `"101"`, `5u64`, or a pattern list).
    pub fn validation(mut self, rule: impl Into<ValidationRule>) -> Self {
        self.validation = Some(RuleSpec::Typed(rule.into()));
        self
    }

    /// Attach an untyped validation payload. Classification happens during
    /// [`BitSequence::new`], which is where an unsupported shape fails.
    pub fn validation_payload(mut self, payload: Value) -> Self {
        self.validation = Some(RuleSpec::Payload(payload));
        self
    }
}

/// Fixed-width sequence of bits with an attached validation rule.
///
/// The width is fixed at construction; [`set`](BitSequence::set) is the
/// only mutator and never changes the width.
#[derive(Debug, Clone)]
pub struct BitSequence {
    size: usize,
    bits: Vec<bool>,
    rule: ValidationRule,
}

impl BitSequence {
    /// Build a sequence from `values` under `config`.
    ///
    /// The width is `config.size` when set, otherwise the number of values.
    /// Missing trailing values pad with zero bits; surplus values fail with
    /// [`BitGateError::TooManyValues`] rather than truncating. A configured
    /// payload is classified here, so [`BitGateError::InvalidValidation`]
    /// also surfaces from this constructor. Without a configured rule the
    /// sequence accepts only the all-ones pattern of its width.
    pub fn new(config: SequenceConfig, values: &[&dyn Truthy]) -> Result<Self> {
        let size = config.size.unwrap_or(values.len());
        if config.size.is_some() && values.len() > size {
            return Err(BitGateError::TooManyValues {
                size,
                got: values.len(),
            });
        }
        let rule = match config.validation {
            Some(RuleSpec::Typed(rule)) => rule,
            Some(RuleSpec::Payload(payload)) => ValidationRule::from_payload(&payload)?,
            None => all_ones(size),
        };
        Ok(Self::assemble(size, rule, values))
    }

    /// Build a sequence sized to `values` with the default all-ones rule.
    ///
    /// The [`bits!`](crate::bits) macro is sugar over this constructor.
    pub fn from_values(values: &[&dyn Truthy]) -> Self {
        Self::assemble(values.len(), all_ones(values.len()), values)
    }

    fn assemble(size: usize, rule: ValidationRule, values: &[&dyn Truthy]) -> Self {
        let mut bits = vec![false; size];
        for (bit, value) in bits.iter_mut().zip(values) {
            *bit = value.is_truthy();
        }
        debug!(
            size,
            rule = rule.kind_name(),
            values = values.len(),
            "built bit sequence"
        );
        BitSequence { size, bits, rule }
    }

    /// Fixed width of the sequence.
    pub fn size(&self) -> usize {
        self.size
    }

    fn check_position(&self, pos: usize) -> Result<()> {
        if pos >= self.size {
            return Err(BitGateError::IllegalPosition {
                pos,
                size: self.size,
            });
        }
        Ok(())
    }

    /// Bit at `pos` as an integer, `0` or `1`.
    pub fn get(&self, pos: usize) -> Result<u8> {
        self.check_position(pos)?;
        Ok(u8::from(self.bits[pos]))
    }

    /// Bit at `pos` as text, `'0'` or `'1'`.
    pub fn get_text(&self, pos: usize) -> Result<char> {
        self.check_position(pos)?;
        Ok(coerce::bit_char(self.bits[pos]))
    }

    /// Overwrite the bit at `pos` with the truthiness of `value`.
    ///
    /// Returns `&mut self` so writes chain:
    /// `seq.set(0, true)?.set(1, 0)?`.
    pub fn set(&mut self, pos: usize, value: impl Truthy) -> Result<&mut Self> {
        self.check_position(pos)?;
        let bit = value.is_truthy();
        self.bits[pos] = bit;
        trace!(pos, bit, "wrote bit");
        Ok(self)
    }

    /// The whole sequence as a base-2 integer, saturating at `u64::MAX`
    /// for sequences wider than 64 bits.
    pub fn to_int(&self) -> u64 {
        coerce::binary_value(&self.to_string())
    }

    /// Check the current pattern against the attached rule.
    pub fn is_valid(&self) -> bool {
        self.rule.is_valid(&self.to_string())
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_char(coerce::bit_char(bit))?;
        }
        Ok(())
    }
}

fn all_ones(size: usize) -> ValidationRule {
    ValidationRule::exact_text("1".repeat(size))
}

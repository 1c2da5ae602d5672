// SPDX-License-Identifier: MIT OR Apache-2.0
//! Validation rules for bit sequences.
//!
//! A [`ValidationRule`] decides whether a sequence's rendered text form is
//! acceptable. Rules come in four kinds: an arbitrary predicate over the
//! text, an exact text match, an exact integer match against the coerced
//! value, and a set of [`Pattern`]s where any single match accepts.
//!
//! Rules can also be classified from untyped JSON payloads via
//! [`ValidationRule::from_payload`], which rejects shapes that have no rule
//! meaning (objects, booleans, floats) with
//! [`BitGateError::InvalidValidation`].

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::coerce;
use crate::error::{BitGateError, Result};

/// Shared predicate over a sequence's text form.
pub type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// One acceptable form inside a [`ValidationRule::PatternSet`].
///
/// Untagged on the wire: JSON strings become [`Pattern::Text`], JSON
/// integers become [`Pattern::Int`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    /// Matches when the text form is exactly this string.
    Text(String),
    /// Matches when the coerced integer value equals this number.
    Int(u64),
}

impl Pattern {
    /// Check this pattern against a rendered text form.
    ///
    /// Text patterns compare the string as-is; integer patterns compare
    /// against [`coerce::binary_value`] of the text, so `"0101"` matches
    /// the pattern `5`.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Pattern::Text(text) => text == value,
            Pattern::Int(expected) => *expected == coerce::binary_value(value),
        }
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Text(text.to_owned())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Text(text)
    }
}

impl From<u64> for Pattern {
    fn from(value: u64) -> Self {
        Pattern::Int(value)
    }
}

/// Acceptance rule attached to a bit sequence.
#[derive(Clone)]
pub enum ValidationRule {
    /// Accepts when the predicate returns `true` for the text form.
    Predicate(Predicate),
    /// Accepts exactly one text form.
    ExactText(String),
    /// Accepts any text form whose coerced integer value equals this number.
    ExactInt(u64),
    /// Accepts when any one pattern matches. An empty set accepts nothing.
    PatternSet(Vec<Pattern>),
}

impl ValidationRule {
    /// Rule backed by an arbitrary predicate.
    pub fn predicate(check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        ValidationRule::Predicate(Arc::new(check))
    }

    /// Rule accepting exactly `text`.
    pub fn exact_text(text: impl Into<String>) -> Self {
        ValidationRule::ExactText(text.into())
    }

    /// Rule accepting any text that coerces to `value`.
    pub fn exact_int(value: u64) -> Self {
        ValidationRule::ExactInt(value)
    }

    /// Rule accepting any of the given patterns.
    pub fn pattern_set<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Pattern>,
    {
        ValidationRule::PatternSet(patterns.into_iter().map(Into::into).collect())
    }

    /// Classify an untyped JSON payload into a rule.
    ///
    /// Strings become [`ValidationRule::ExactText`], non-negative integers
    /// become [`ValidationRule::ExactInt`], and arrays of strings and
    /// non-negative integers become [`ValidationRule::PatternSet`]. Every
    /// other shape, at the top level or inside an array, is rejected with
    /// [`BitGateError::InvalidValidation`] naming the offending shape.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let rule = match payload {
            Value::String(text) => ValidationRule::ExactText(text.clone()),
            Value::Number(number) => {
                let Some(value) = number.as_u64() else {
                    return Err(BitGateError::InvalidValidation {
                        type_name: shape_name(payload).to_owned(),
                    });
                };
                ValidationRule::ExactInt(value)
            }
            Value::Array(items) => {
                let patterns = items.iter().map(list_pattern).collect::<Result<Vec<_>>>()?;
                ValidationRule::PatternSet(patterns)
            }
            other => {
                return Err(BitGateError::InvalidValidation {
                    type_name: shape_name(other).to_owned(),
                });
            }
        };
        debug!(kind = rule.kind_name(), "classified validation payload");
        Ok(rule)
    }

    /// Check a rendered text form against this rule.
    pub fn is_valid(&self, value: &str) -> bool {
        let valid = match self {
            ValidationRule::Predicate(check) => check(value),
            ValidationRule::ExactText(text) => text == value,
            ValidationRule::ExactInt(expected) => *expected == coerce::binary_value(value),
            ValidationRule::PatternSet(patterns) => {
                patterns.iter().any(|pattern| pattern.matches(value))
            }
        };
        trace!(kind = self.kind_name(), value, valid, "evaluated validation rule");
        valid
    }

    /// Short name of the rule kind, for log events.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ValidationRule::Predicate(_) => "predicate",
            ValidationRule::ExactText(_) => "exact-text",
            ValidationRule::ExactInt(_) => "exact-int",
            ValidationRule::PatternSet(_) => "pattern-set",
        }
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationRule::Predicate(_) => f.debug_tuple("Predicate").field(&"<closure>").finish(),
            ValidationRule::ExactText(text) => f.debug_tuple("ExactText").field(text).finish(),
            ValidationRule::ExactInt(value) => f.debug_tuple("ExactInt").field(value).finish(),
            ValidationRule::PatternSet(patterns) => {
                f.debug_tuple("PatternSet").field(patterns).finish()
            }
        }
    }
}

impl From<&str> for ValidationRule {
    fn from(text: &str) -> Self {
        ValidationRule::exact_text(text)
    }
}

impl From<String> for ValidationRule {
    fn from(text: String) -> Self {
        ValidationRule::ExactText(text)
    }
}

impl From<u64> for ValidationRule {
    fn from(value: u64) -> Self {
        ValidationRule::ExactInt(value)
    }
}

impl From<Vec<Pattern>> for ValidationRule {
    fn from(patterns: Vec<Pattern>) -> Self {
        ValidationRule::PatternSet(patterns)
    }
}

fn list_pattern(item: &Value) -> Result<Pattern> {
    match item {
        Value::String(text) => Ok(Pattern::Text(text.clone())),
        Value::Number(number) => {
            number
                .as_u64()
                .map(Pattern::Int)
                .ok_or_else(|| BitGateError::InvalidValidation {
                    type_name: format!("{} in pattern list", shape_name(item)),
                })
        }
        other => Err(BitGateError::InvalidValidation {
            type_name: format!("{} in pattern list", shape_name(other)),
        }),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(number) if number.is_u64() => "integer",
        Value::Number(number) if number.is_i64() => "negative integer",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

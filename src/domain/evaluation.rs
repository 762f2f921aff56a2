// ============================================================================
// Evaluation Result
// ============================================================================

use crate::numeric::{format_display, UNDEFINED_TEXT};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounded numeric value paired with its display text.
///
/// Produced fresh on every evaluation and never cached. Equality is
/// bit-identity of the value plus text equality, so two undefined results
/// compare equal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EvaluationResult {
    pub value: f64,
    pub text: String,
}

impl EvaluationResult {
    /// The undefined sentinel: NaN shown as `—`.
    pub fn undefined() -> Self {
        Self {
            value: f64::NAN,
            text: UNDEFINED_TEXT.to_string(),
        }
    }

    /// Signed infinity shown as `∞` or `−∞`.
    pub fn infinite(negative: bool) -> Self {
        let value = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        Self {
            value,
            text: format_display(value),
        }
    }

    /// Wrap an already rounded value, formatting its display text.
    pub fn from_rounded(value: f64) -> Self {
        Self {
            value,
            text: format_display(value),
        }
    }

    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.value.is_nan()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl PartialEq for EvaluationResult {
    fn eq(&self, other: &Self) -> bool {
        self.value.to_bits() == other.value.to_bits() && self.text == other.text
    }
}

impl fmt::Display for EvaluationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Operation Symbol
// The fixed, order-significant set of binary operations
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four binary operations.
///
/// The declaration order is a contract: dial sectors and gesture directions are
/// mapped by index into [`OperationSymbol::ALL`], so `+ × − :` must never be
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperationSymbol {
    /// `+`
    Add,
    /// `×`
    #[default]
    Multiply,
    /// `−`
    Subtract,
    /// `:` (division)
    Divide,
}

impl OperationSymbol {
    /// Number of operations in the cycle.
    pub const COUNT: usize = 4;

    /// The fixed cyclic order: addition, multiplication, subtraction, division.
    pub const ALL: [OperationSymbol; Self::COUNT] = [
        OperationSymbol::Add,
        OperationSymbol::Multiply,
        OperationSymbol::Subtract,
        OperationSymbol::Divide,
    ];

    /// Position in [`OperationSymbol::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            OperationSymbol::Add => 0,
            OperationSymbol::Multiply => 1,
            OperationSymbol::Subtract => 2,
            OperationSymbol::Divide => 3,
        }
    }

    /// Look up an operation by index.
    ///
    /// # Errors
    /// Returns `OperationIndexOutOfRange` for indices past the last symbol.
    pub fn from_index(index: usize) -> NumericResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(NumericError::OperationIndexOutOfRange(index))
    }

    /// Look up an operation by index, wrapping around the cycle.
    #[inline]
    pub const fn from_index_wrapping(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Next operation in the cycle.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index_wrapping(self.index() + 1)
    }

    /// Previous operation in the cycle.
    #[inline]
    pub const fn previous(self) -> Self {
        Self::from_index_wrapping(self.index() + Self::COUNT - 1)
    }

    /// Display glyph.
    pub const fn glyph(self) -> &'static str {
        match self {
            OperationSymbol::Add => "+",
            OperationSymbol::Multiply => "\u{00d7}",
            OperationSymbol::Subtract => "\u{2212}",
            OperationSymbol::Divide => ":",
        }
    }

    /// Parse a display glyph.
    ///
    /// # Errors
    /// Returns `UnknownOperation` for anything outside the four glyphs.
    pub fn from_glyph(glyph: &str) -> NumericResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.glyph() == glyph)
            .ok_or(NumericError::UnknownOperation)
    }

    /// Raw double-precision result, before any rounding.
    #[inline]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            OperationSymbol::Add => a + b,
            OperationSymbol::Multiply => a * b,
            OperationSymbol::Subtract => a - b,
            OperationSymbol::Divide => a / b,
        }
    }
}

impl fmt::Display for OperationSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for OperationSymbol {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_glyph(s)
    }
}

// ============================================================================
// Numeric Errors
// Error types for parsing calculator input at the text boundary
// ============================================================================

use std::fmt;

/// Errors raised when converting external text or indices into calculator types.
///
/// Evaluation and entry transitions never fail; these errors only surface where
/// a UI bridge hands the core raw strings, characters or indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Operand text does not match `-?\d*(\.\d*)?`
    InvalidOperand,
    /// Character is not a decimal digit
    InvalidDigit(char),
    /// Glyph is not one of the four operation symbols
    UnknownOperation,
    /// Operation index outside the fixed symbol sequence
    OperationIndexOutOfRange(usize),
    /// Slot name is neither `A` nor `B`
    UnknownSlot,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidOperand => {
                write!(f, "invalid operand: text is not a partial decimal number")
            },
            NumericError::InvalidDigit(c) => write!(f, "invalid digit: {:?}", c),
            NumericError::UnknownOperation => write!(f, "unknown operation symbol"),
            NumericError::OperationIndexOutOfRange(idx) => {
                write!(f, "operation index {} out of range (0..4)", idx)
            },
            NumericError::UnknownSlot => write!(f, "unknown operand slot: expected A or B"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for parsing operations
pub type NumericResult<T> = Result<T, NumericError>;

// ============================================================================
// Operand Domain Model
// ============================================================================

use crate::numeric::{NumericError, NumericResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Operand Slot
// ============================================================================

/// Identifies one of the two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperandSlot {
    #[default]
    A,
    B,
}

impl OperandSlot {
    pub const ALL: [OperandSlot; 2] = [OperandSlot::A, OperandSlot::B];

    /// The opposite slot.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            OperandSlot::A => OperandSlot::B,
            OperandSlot::B => OperandSlot::A,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            OperandSlot::A => 0,
            OperandSlot::B => 1,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            OperandSlot::A => "A",
            OperandSlot::B => "B",
        }
    }
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperandSlot {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(OperandSlot::A),
            "B" => Ok(OperandSlot::B),
            _ => Err(NumericError::UnknownSlot),
        }
    }
}

// ============================================================================
// Digit
// ============================================================================

/// A single decimal digit `0`-`9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);

    /// `0` through `9`, indexed by value.
    pub const ALL: [Digit; 10] = [
        Digit(0),
        Digit(1),
        Digit(2),
        Digit(3),
        Digit(4),
        Digit(5),
        Digit(6),
        Digit(7),
        Digit(8),
        Digit(9),
    ];

    /// # Errors
    /// Returns `InvalidDigit` for values above 9.
    pub fn new(value: u8) -> NumericResult<Self> {
        if value <= 9 {
            Ok(Self(value))
        } else {
            Err(NumericError::InvalidDigit(char::from(b'0'.saturating_add(value))))
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }
}

impl TryFrom<char> for Digit {
    type Error = NumericError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        c.to_digit(10)
            .map(|d| Self(d as u8))
            .ok_or(NumericError::InvalidDigit(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Operand Text
// ============================================================================

/// Textual operand, possibly partially entered.
///
/// Always matches `-?\d*(\.\d*)?`: empty (unset, shown as `0`), a bare sign,
/// a bare or signed decimal point, or a signed decimal. Only the entry
/// functions in [`crate::engine::entry`] produce new values from old ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct OperandText(String);

impl OperandText {
    /// Empty (unset) operand.
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Wrap text already known to satisfy the grammar.
    #[inline]
    pub(crate) fn from_valid(text: String) -> Self {
        debug_assert!(is_operand_text(&text), "invalid operand text {:?}", text);
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.starts_with('-')
    }

    #[inline]
    pub fn has_decimal_point(&self) -> bool {
        self.0.contains('.')
    }

    /// True once at least one digit has been entered.
    #[inline]
    pub fn has_digits(&self) -> bool {
        self.0.bytes().any(|b| b.is_ascii_digit())
    }

    /// Text for display: blank shows as `0`.
    pub fn display(&self) -> &str {
        if self.0.is_empty() {
            "0"
        } else {
            &self.0
        }
    }

    /// Numeric value of the text.
    ///
    /// Text without any digit (`""`, `"-"`, `"."`, `"-."`) is zero; otherwise
    /// the text parses as a decimal (`"12."` is 12, `"-.5"` is -0.5).
    pub fn to_number(&self) -> f64 {
        if !self.has_digits() {
            return 0.0;
        }
        self.0.parse().unwrap_or(f64::NAN)
    }
}

impl fmt::Display for OperandText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OperandText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for OperandText {
    type Err = NumericError;

    /// Parse operand text, rejecting anything outside `-?\d*(\.\d*)?`.
    ///
    /// # Examples
    /// - `""` -> blank
    /// - `"-."` -> sign and point, no digits yet
    /// - `"-12.50"` -> kept verbatim
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_operand_text(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(NumericError::InvalidOperand)
        }
    }
}

impl TryFrom<String> for OperandText {
    type Error = NumericError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if is_operand_text(&s) {
            Ok(Self(s))
        } else {
            Err(NumericError::InvalidOperand)
        }
    }
}

impl From<OperandText> for String {
    fn from(text: OperandText) -> Self {
        text.0
    }
}

/// Check `s` against `-?\d*(\.\d*)?`.
fn is_operand_text(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (body, ""),
    };
    int_part.bytes().all(|b| b.is_ascii_digit()) && frac_part.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Reduced Precision
// 48-bit mantissa rounding and display formatting for f64 results
// ============================================================================

/// Mantissa bits kept after rounding.
pub const KEPT_MANTISSA_BITS: u32 = 48;

/// Low mantissa bits discarded by rounding (the rounding guard).
pub const GUARD_BITS: u32 = 52 - KEPT_MANTISSA_BITS;

/// Display text for an undefined result (NaN, 0 : 0, non-finite operands).
pub const UNDEFINED_TEXT: &str = "\u{2014}";

/// Display text for positive infinity.
pub const INFINITY_TEXT: &str = "\u{221e}";

/// Display text for negative infinity (U+2212 minus sign).
pub const NEG_INFINITY_TEXT: &str = "\u{2212}\u{221e}";

// ============================================================================
// IEEE-754 Layout
// ============================================================================

const SIGN_SHIFT: u32 = 63;
const EXPONENT_SHIFT: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff;
const MANTISSA_MASK: u64 = (1 << EXPONENT_SHIFT) - 1;
const GUARD_MASK: u64 = (1 << GUARD_BITS) - 1;
const GUARD_HALF: u64 = 1 << (GUARD_BITS - 1);
const KEPT_OVERFLOW: u64 = 1 << KEPT_MANTISSA_BITS;

// ============================================================================
// Display Constants
// ============================================================================

/// Magnitudes at or above this switch to scientific notation.
const SCIENTIFIC_UPPER: f64 = 1e12;

/// Non-zero magnitudes below this switch to scientific notation.
const SCIENTIFIC_LOWER: f64 = 1e-6;

const FIXED_DECIMALS: usize = 12;
const SIGNIFICANT_DIGITS: usize = 12;

/// Round a double to a 48-bit mantissa using round half to even.
///
/// The low 4 mantissa bits act as the rounding guard. A carry out of the kept
/// field renormalizes into the exponent; an exponent carry into the reserved
/// all-ones range produces signed infinity. Zero, subnormals, infinities and
/// NaN are returned unchanged.
///
/// # Example
/// ```
/// use operand_calc::numeric::round_to_48_bits;
///
/// let noisy = 0.1 + 0.2;
/// let rounded = round_to_48_bits(noisy);
/// assert_eq!(rounded.to_bits() & 0xf, 0);
/// assert_eq!(round_to_48_bits(rounded), rounded);
/// ```
#[inline]
pub fn round_to_48_bits(value: f64) -> f64 {
    let bits = value.to_bits();
    let sign = bits >> SIGN_SHIFT;
    let mut exponent = (bits >> EXPONENT_SHIFT) & EXPONENT_MASK;
    let mantissa = bits & MANTISSA_MASK;

    if exponent == 0 || exponent == EXPONENT_MASK {
        return value;
    }

    let mut kept = mantissa >> GUARD_BITS;
    let guard = mantissa & GUARD_MASK;

    let round_up = guard > GUARD_HALF || (guard == GUARD_HALF && kept & 1 == 1);
    if round_up {
        kept += 1;
        if kept == KEPT_OVERFLOW {
            kept = 0;
            exponent += 1;
            if exponent == EXPONENT_MASK {
                return if sign == 1 {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                };
            }
        }
    }

    f64::from_bits((sign << SIGN_SHIFT) | (exponent << EXPONENT_SHIFT) | (kept << GUARD_BITS))
}

/// Render a value as calculator display text.
///
/// Fixed-point with 12 decimals for magnitudes in `[1e-6, 1e12)` (and zero),
/// 12 significant digits in scientific notation otherwise. Both round the
/// exact binary value half away from zero, so an exact tie such as
/// `0.0001220703125` shows as `0.000122070313`. Trailing fraction zeros and a
/// bare decimal point are stripped and `-0` renders as `0`. Non-finite values
/// render as the sentinel glyphs.
pub fn format_display(value: f64) -> String {
    if value.is_nan() {
        return UNDEFINED_TEXT.to_string();
    }
    if value.is_infinite() {
        return infinity_text(value).to_string();
    }

    let magnitude = value.abs();
    let scientific =
        magnitude >= SCIENTIFIC_UPPER || (magnitude != 0.0 && magnitude < SCIENTIFIC_LOWER);
    let mut digits = DecimalDigits::exact(magnitude);

    let body = if scientific {
        digits.round_half_up(SIGNIFICANT_DIGITS);
        digits.to_scientific()
    } else {
        let kept = digits.point + FIXED_DECIMALS as i32;
        if kept < 0 {
            digits.digits.clear();
        } else {
            digits.round_half_up(kept as usize);
        }
        digits.to_fixed()
    };

    // A value that rounds to zero loses its sign
    if value.is_sign_negative() && !digits.digits.is_empty() {
        format!("-{}", body)
    } else {
        body
    }
}

/// Sentinel text for a signed infinity.
#[inline]
pub(crate) fn infinity_text(value: f64) -> &'static str {
    if value.is_sign_negative() {
        NEG_INFINITY_TEXT
    } else {
        INFINITY_TEXT
    }
}

// ============================================================================
// Exact Decimal Expansion
// ============================================================================

/// Fraction digits needed to print any finite double exactly (2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Significant decimal digits of a non-negative value: `0.d1d2… × 10^point`.
///
/// No leading or trailing zeros are stored; zero has no digits.
#[derive(Debug, Clone, PartialEq, Eq)]
struct DecimalDigits {
    digits: Vec<u8>,
    point: i32,
}

impl DecimalDigits {
    fn exact(magnitude: f64) -> Self {
        let text = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes())
            .map(|b| b - b'0')
            .collect();
        let leading = digits.iter().take_while(|&&d| d == 0).count();
        digits.drain(..leading);

        let mut out = Self {
            digits,
            point: int_part.len() as i32 - leading as i32,
        };
        out.trim();
        out
    }

    /// Keep `kept` leading digits, rounding a dropped tail of one half or
    /// more away from zero.
    fn round_half_up(&mut self, kept: usize) {
        if self.digits.len() <= kept {
            return;
        }
        let up = self.digits[kept] >= 5;
        self.digits.truncate(kept);
        if up {
            let mut i = kept;
            loop {
                if i == 0 {
                    self.digits.insert(0, 1);
                    self.point += 1;
                    break;
                }
                i -= 1;
                if self.digits[i] == 9 {
                    self.digits[i] = 0;
                } else {
                    self.digits[i] += 1;
                    break;
                }
            }
        }
        self.trim();
    }

    fn trim(&mut self) {
        while self.digits.last() == Some(&0) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.point = 0;
        }
    }

    fn char_at(&self, index: i32) -> char {
        match usize::try_from(index).ok().and_then(|i| self.digits.get(i)) {
            Some(d) => char::from(b'0' + d),
            None => '0',
        }
    }

    fn to_fixed(&self) -> String {
        let len = self.digits.len() as i32;
        let mut out = String::new();
        if self.point <= 0 {
            out.push('0');
        } else {
            out.extend((0..self.point).map(|i| self.char_at(i)));
        }
        if len > self.point {
            out.push('.');
            out.extend((self.point.min(0)..0).map(|_| '0'));
            out.extend((self.point.max(0)..len).map(|i| self.char_at(i)));
        }
        out
    }

    fn to_scientific(&self) -> String {
        if self.digits.is_empty() {
            return "0e+0".to_string();
        }
        let exponent = self.point - 1;
        let mut out = String::new();
        out.push(self.char_at(0));
        if self.digits.len() > 1 {
            out.push('.');
            out.extend((1..self.digits.len() as i32).map(|i| self.char_at(i)));
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{}", out, sign, exponent.abs())
    }
}

// ============================================================================
// Tests
// ============================================================================

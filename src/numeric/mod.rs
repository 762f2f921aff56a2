// ============================================================================
// Numeric Module
// Reduced-precision rounding and display formatting for evaluation results
// ============================================================================
//
// This module provides:
// - round_to_48_bits: IEEE-754 double rounded to a 48-bit mantissa
// - format_display: rounded value rendered as calculator display text
// - NumericError: Error types for text-boundary parsing
//
// Design principles:
// - Pure functions, bit-exact and deterministic
// - Round half to even on the 4 discarded mantissa bits
// - Subnormals and special values pass through unrounded

mod errors;
mod precision;

pub use errors::{NumericError, NumericResult};
pub use precision::{
    format_display, round_to_48_bits, GUARD_BITS, INFINITY_TEXT, KEPT_MANTISSA_BITS,
    NEG_INFINITY_TEXT, UNDEFINED_TEXT,
};

// ============================================================================
// Evaluator
// Binary operation evaluation with 48-bit result precision
// ============================================================================

use crate::domain::{EvaluationResult, OperandText, OperationSymbol};
use crate::numeric::round_to_48_bits;

/// Evaluate `a op b` and round the result to a 48-bit mantissa.
///
/// Total over its inputs:
/// - a non-finite operand yields the undefined sentinel
/// - `x : 0` yields signed infinity by the sign of `x`, `0 : 0` is undefined
/// - a raw or renormalized result that overflows yields signed infinity
///
/// # Example
/// ```
/// use operand_calc::engine::evaluate;
/// use operand_calc::domain::OperationSymbol;
///
/// assert_eq!(evaluate(OperationSymbol::Add, 0.1, 0.2).text, "0.3");
/// assert_eq!(evaluate(OperationSymbol::Divide, 5.0, 0.0).text, "∞");
/// ```
pub fn evaluate(op: OperationSymbol, a: f64, b: f64) -> EvaluationResult {
    if !a.is_finite() || !b.is_finite() {
        return EvaluationResult::undefined();
    }

    if op == OperationSymbol::Divide && b == 0.0 {
        if a == 0.0 {
            return EvaluationResult::undefined();
        }
        return EvaluationResult::infinite(a.is_sign_negative());
    }

    let raw = op.apply(a, b);
    if raw.is_nan() {
        return EvaluationResult::undefined();
    }
    if raw.is_infinite() {
        return EvaluationResult::infinite(raw.is_sign_negative());
    }

    // Renormalization can still carry a finite value up to infinity
    let rounded = round_to_48_bits(raw);
    if rounded.is_infinite() {
        return EvaluationResult::infinite(rounded.is_sign_negative());
    }

    EvaluationResult::from_rounded(rounded)
}

/// Evaluate with the operation given as a display glyph.
///
/// An unrecognized glyph is not a programming error: it yields the undefined
/// sentinel like any other result without a finite value.
pub fn evaluate_symbol(glyph: &str, a: f64, b: f64) -> EvaluationResult {
    match OperationSymbol::from_glyph(glyph) {
        Ok(op) => evaluate(op, a, b),
        Err(_) => EvaluationResult::undefined(),
    }
}

/// Evaluate two operand texts, coercing digit-less text to zero.
pub fn evaluate_operands(
    op: OperationSymbol,
    a: &OperandText,
    b: &OperandText,
) -> EvaluationResult {
    evaluate(op, a.to_number(), b.to_number())
}

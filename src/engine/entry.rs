// ============================================================================
// Operand Entry
// Pure, total text transitions over OperandText
// ============================================================================
//
// Every function maps a valid operand text to a valid operand text; none can
// fail. Sign prefixes survive every transition except `toggle_sign` and the
// collapsing cases of `backspace`.

use crate::domain::{Digit, OperandText};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Collapse leading zeros that are followed by another digit.
///
/// `"007"` becomes `"7"`, `"-00"` becomes `"-0"`, while `"0."` and `"0.05"`
/// are kept: a zero directly before the decimal point is significant.
pub fn normalize_leading_zeros(text: &OperandText) -> OperandText {
    OperandText::from_valid(normalize_str(text.as_str()))
}

/// Append a digit, seeding `""` as `"0"` and `"-"` as `"-0"` first.
pub fn append_digit(text: &OperandText, digit: Digit) -> OperandText {
    let mut s = match text.as_str() {
        "" => String::from("0"),
        "-" => String::from("-0"),
        other => other.to_string(),
    };
    s.push(digit.as_char());
    OperandText::from_valid(normalize_str(&s))
}

/// Append a decimal point unless one is already present.
///
/// Blank or sign-only text gets a leading `0` first, so `""` becomes `"0."`.
pub fn append_decimal_point(text: &OperandText) -> OperandText {
    let mut s = text.as_str().to_string();
    if s.is_empty() || s == "-" {
        s.push('0');
    }
    if !s.contains('.') {
        s.push('.');
    }
    OperandText::from_valid(s)
}

/// Flip the sign prefix; blank text becomes a bare `"-"`.
pub fn toggle_sign(text: &OperandText) -> OperandText {
    let s = match text.as_str().strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", text.as_str()),
    };
    OperandText::from_valid(s)
}

/// Remove the last character.
///
/// Text of length one or less, or a sign plus a single character with no
/// decimal point, collapses to `"0"`.
pub fn backspace(text: &OperandText) -> OperandText {
    let s = text.as_str();
    let collapses = s.len() <= 1 || (s.len() == 2 && s.starts_with('-') && !s.contains('.'));
    if collapses {
        return OperandText::from_valid(String::from("0"));
    }
    // Operand text is ASCII, so byte slicing is char slicing
    OperandText::from_valid(s[..s.len() - 1].to_string())
}

/// Blank the operand (displays as `0`).
pub fn clear(_text: &OperandText) -> OperandText {
    OperandText::new()
}

fn normalize_str(s: &str) -> String {
    let (sign, mut body) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    while body.len() > 1 && body.starts_with('0') && body.as_bytes()[1].is_ascii_digit() {
        body = &body[1..];
    }
    format!("{}{}", sign, body)
}

// ============================================================================
// Entry Edits
// ============================================================================

/// A single entry transition, as requested by a presentation adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntryEdit {
    Digit(Digit),
    DecimalPoint,
    ToggleSign,
    Backspace,
    Clear,
}

impl EntryEdit {
    /// Apply the edit, returning the new operand text.
    pub fn apply(self, text: &OperandText) -> OperandText {
        match self {
            EntryEdit::Digit(digit) => append_digit(text, digit),
            EntryEdit::DecimalPoint => append_decimal_point(text),
            EntryEdit::ToggleSign => toggle_sign(text),
            EntryEdit::Backspace => backspace(text),
            EntryEdit::Clear => clear(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    fn t(s: &str) -> OperandText {
        s.parse().unwrap()
    }

    fn d(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    #[test]
    fn test_leading_zeros_collapse() {
        let s = append_digit(&append_digit(&append_digit(&t(""), d('0')), d('0')), d('5'));
        assert_eq!(s.as_str(), "5");
    }

    #[test]
    fn test_append_digit_seeds() {
        assert_eq!(append_digit(&t(""), d('7')).as_str(), "7");
        assert_eq!(append_digit(&t("-"), d('5')).as_str(), "-5");
        assert_eq!(append_digit(&t("-"), d('0')).as_str(), "-0");
        assert_eq!(append_digit(&t("0"), d('0')).as_str(), "0");
        assert_eq!(append_digit(&t("12"), d('3')).as_str(), "123");
    }

    #[test]
    fn test_append_digit_after_point() {
        assert_eq!(append_digit(&t("0."), d('0')).as_str(), "0.0");
        assert_eq!(append_digit(&t("-."), d('5')).as_str(), "-.5");
        assert_eq!(append_digit(&t("."), d('0')).as_str(), ".0");
    }

    #[test]
    fn test_decimal_point_idempotent() {
        let once = append_decimal_point(&t("0"));
        assert_eq!(once.as_str(), "0.");
        assert_eq!(append_decimal_point(&once).as_str(), "0.");
        assert_eq!(append_decimal_point(&t("")).as_str(), "0.");
        assert_eq!(append_decimal_point(&t("-")).as_str(), "-0.");
        assert_eq!(append_decimal_point(&t("1.5")).as_str(), "1.5");
    }

    #[test]
    fn test_toggle_sign() {
        assert_eq!(toggle_sign(&t("12")).as_str(), "-12");
        assert_eq!(toggle_sign(&toggle_sign(&t("12"))).as_str(), "12");
        assert_eq!(toggle_sign(&t("")).as_str(), "-");
        assert_eq!(toggle_sign(&t("-")).as_str(), "");
    }

    #[test]
    fn test_dot_then_sign() {
        let s = toggle_sign(&append_decimal_point(&t("")));
        assert_eq!(s.as_str(), "-0.");
    }

    #[test]
    fn test_backspace() {
        assert_eq!(backspace(&t("123")).as_str(), "12");
        assert_eq!(backspace(&t("1")).as_str(), "0");
        assert_eq!(backspace(&t("")).as_str(), "0");
        assert_eq!(backspace(&t("-5")).as_str(), "0");
        assert_eq!(backspace(&t("-.")).as_str(), "-");
        assert_eq!(backspace(&t("0.")).as_str(), "0");
        assert_eq!(backspace(&t("-12")).as_str(), "-1");
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_leading_zeros(&t("007")).as_str(), "7");
        assert_eq!(normalize_leading_zeros(&t("-00")).as_str(), "-0");
        assert_eq!(normalize_leading_zeros(&t("00.5")).as_str(), "0.5");
        assert_eq!(normalize_leading_zeros(&t("0.05")).as_str(), "0.05");
        assert_eq!(normalize_leading_zeros(&t("-.")).as_str(), "-.");
        assert_eq!(normalize_leading_zeros(&t("")).as_str(), "");
    }

    #[test]
    fn test_clear() {
        assert!(EntryEdit::Clear.apply(&t("-12.5")).is_blank());
    }

    fn edit_strategy() -> impl Strategy<Value = EntryEdit> {
        prop_oneof![
            (0u8..10).prop_map(|v| EntryEdit::Digit(Digit::new(v).unwrap())),
            Just(EntryEdit::DecimalPoint),
            Just(EntryEdit::ToggleSign),
            Just(EntryEdit::Backspace),
            Just(EntryEdit::Clear),
        ]
    }

    proptest! {
        #[test]
        fn edits_preserve_operand_grammar(edits in prop::collection::vec(edit_strategy(), 0..40)) {
            let mut text = OperandText::new();
            for edit in edits {
                text = edit.apply(&text);
                prop_assert!(text.as_str().parse::<OperandText>().is_ok(), "{:?}", text);
                prop_assert!(!text.to_number().is_nan());
            }
        }

        #[test]
        fn at_most_one_decimal_point(edits in prop::collection::vec(edit_strategy(), 0..40)) {
            let mut text = OperandText::new();
            for edit in edits {
                text = edit.apply(&text);
                prop_assert!(text.as_str().matches('.').count() <= 1);
            }
        }
    }

    quickcheck! {
        fn sign_round_trip(digits: Vec<u8>) -> bool {
            let text = digits
                .iter()
                .map(|v| Digit::new(v % 10).unwrap())
                .fold(OperandText::new(), |acc, digit| append_digit(&acc, digit));
            toggle_sign(&toggle_sign(&text)) == text
        }
    }
}

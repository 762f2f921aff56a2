// ============================================================================
// Presentation Adapter Interface
// Contract between a calculator's state and an interaction metaphor
// ============================================================================

use crate::domain::{Digit, OperandSlot, OperationSymbol};
use crate::engine::{CalculatorState, EntryEdit};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Input
// ============================================================================

/// A key on a keypad or key ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    Digit(Digit),
    Point,
    Sign,
}

impl Key {
    /// Map a key label (`0`-`9`, `.`, `±`).
    pub fn from_label(label: char) -> Option<Self> {
        match label {
            '.' => Some(Key::Point),
            '\u{00b1}' => Some(Key::Sign),
            c => Digit::try_from(c).ok().map(Key::Digit),
        }
    }

    pub fn label(self) -> char {
        match self {
            Key::Digit(d) => d.as_char(),
            Key::Point => '.',
            Key::Sign => '\u{00b1}',
        }
    }

    /// Entry transition triggered by the key.
    pub fn edit(self) -> EntryEdit {
        match self {
            Key::Digit(d) => EntryEdit::Digit(d),
            Key::Point => EntryEdit::DecimalPoint,
            Key::Sign => EntryEdit::ToggleSign,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Buttons outside the key ring or keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Command {
    /// Blank the active operand
    ClearActive,
    /// Blank both operands and reset focus
    ClearAll,
    Backspace,
    Swap,
    /// Flip the keypad latch
    ToggleLatch,
    /// Centre button flipping the active operand
    ToggleActive,
}

/// Raw input delivered by the UI layer.
///
/// Ring coordinates are relative to the ring centre, in units of the outer
/// radius, with `y` growing downwards as on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputEvent {
    /// Pointer pressed on a key, starting a gesture
    KeyPress(Key),
    /// Gesture moved onto a key
    KeyEnter(Key),
    /// Gesture moved off the keys
    KeyLeave,
    /// Discrete activation without a gesture (keyboard, synthetic click)
    KeyActivate(Key),
    /// Pointer released or cancelled
    GestureEnd,
    /// Pointer pressed on a key ring at a polar offset
    RingPress { dx: f64, dy: f64 },
    /// Pointer moved over a key ring during a gesture
    RingMove { dx: f64, dy: f64 },
    /// Pointer on the operation wheel
    WheelPointer { dx: f64, dy: f64 },
    /// Operation button tapped
    SelectOperation(OperationSymbol),
    /// Operand field tapped
    FieldTap(OperandSlot),
    Command(Command),
}

// ============================================================================
// State Transitions
// ============================================================================

/// A state change requested by an adapter and applied by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transition {
    /// Entry transition on the active operand
    Edit(EntryEdit),
    SetActive(OperandSlot),
    ToggleActive,
    ToggleLock(OperandSlot),
    SelectOperation(OperationSymbol),
    /// Exchange the operand texts; focus is untouched
    SwapOperands,
    /// Blank both operands; focus is untouched
    ClearOperands,
    /// Blank both operands and reset focus to the initial slot
    ResetAll,
}

/// Transitions produced by a single input event.
pub type Transitions = SmallVec<[Transition; 4]>;

// ============================================================================
// Output
// ============================================================================

/// Everything a view needs to paint one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplaySnapshot {
    pub operand_a: String,
    pub operand_b: String,
    pub operation: String,
    /// `A op B`, e.g. `12.5 × 3`
    pub expression: String,
    pub result: String,
    pub active: OperandSlot,
    pub locked: Option<OperandSlot>,
    /// Adapter-specific status line
    pub caption: String,
}

impl DisplaySnapshot {
    pub fn from_state(state: &CalculatorState, caption: String) -> Self {
        let operand_a = state.operand(OperandSlot::A).display().to_string();
        let operand_b = state.operand(OperandSlot::B).display().to_string();
        let operation = state.operation().glyph().to_string();
        let expression = format!("{} {} {}", operand_a, operation, operand_b);
        let focus = state.focus().state();

        Self {
            operand_a,
            operand_b,
            operation,
            expression,
            result: state.result().text,
            active: focus.active,
            locked: focus.locked,
            caption,
        }
    }

    /// Serialize for a UI bridge.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ============================================================================
// Adapter Trait
// ============================================================================

/// One interaction metaphor.
///
/// Adapters keep only gesture bookkeeping of their own (swipe in progress,
/// last key touched); operand texts, the operation and focus live in the
/// calculator's state and change only through returned transitions.
pub trait PresentationAdapter: Send {
    /// Adapter name for logging
    fn name(&self) -> &'static str;

    /// Translate an input event into state transitions
    fn handle_input(&mut self, event: &InputEvent, state: &CalculatorState) -> Transitions;

    /// Status line shown beside the operands
    fn caption(&self, state: &CalculatorState) -> String {
        format!("Typing \u{2192} {}", state.focus().active())
    }

    /// Render the current state
    fn render(&self, state: &CalculatorState) -> DisplaySnapshot {
        DisplaySnapshot::from_state(state, self.caption(state))
    }
}

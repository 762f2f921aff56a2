// ============================================================================
// Clock Adapter
// Twelve-key clock face with per-operand locks
// ============================================================================

use crate::domain::{OperandSlot, OperationSymbol};
use crate::engine::{CalculatorState, EntryEdit};
use crate::interfaces::{Command, InputEvent, Key, PresentationAdapter, Transition, Transitions};
use smallvec::smallvec;

/// Clock face.
///
/// Each gesture replaces one operand. After a gesture the next one targets
/// the other operand, unless a field is locked: then every gesture retypes
/// the unlocked operand.
///
/// Clear-all also puts the operation back to `×` unless configured otherwise.
#[derive(Debug, Clone)]
pub struct ClockAdapter {
    gesture_active: bool,
    last_key: Option<Key>,
    /// Set once a gesture has typed into the active operand
    flip_armed: bool,
    /// Operation selected by clear-all; `None` keeps the current one
    reset_operation: Option<OperationSymbol>,
}

impl Default for ClockAdapter {
    fn default() -> Self {
        Self {
            gesture_active: false,
            last_key: None,
            flip_armed: false,
            reset_operation: Some(OperationSymbol::default()),
        }
    }
}

impl ClockAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reset_operation(mut self, op: Option<OperationSymbol>) -> Self {
        self.reset_operation = op;
        self
    }

    fn begin(&mut self, key: Key, state: &CalculatorState) -> Transitions {
        let mut out = Transitions::new();
        if state.focus().locked().is_some() {
            out.push(Transition::Edit(EntryEdit::Clear));
        } else if self.flip_armed {
            out.push(Transition::ToggleActive);
            out.push(Transition::Edit(EntryEdit::Clear));
        }
        out.push(Transition::Edit(key.edit()));
        self.gesture_active = true;
        self.last_key = Some(key);
        self.flip_armed = true;
        out
    }

    fn end(&mut self) {
        self.gesture_active = false;
        self.last_key = None;
    }
}

impl PresentationAdapter for ClockAdapter {
    fn name(&self) -> &'static str {
        "clock"
    }

    fn handle_input(&mut self, event: &InputEvent, state: &CalculatorState) -> Transitions {
        match *event {
            InputEvent::KeyPress(key) => self.begin(key, state),
            InputEvent::KeyEnter(key) => {
                if self.gesture_active && self.last_key != Some(key) {
                    self.last_key = Some(key);
                    smallvec![Transition::Edit(key.edit())]
                } else {
                    Transitions::new()
                }
            },
            InputEvent::KeyLeave => {
                self.last_key = None;
                Transitions::new()
            },
            InputEvent::GestureEnd => {
                self.end();
                Transitions::new()
            },
            InputEvent::KeyActivate(key) => {
                let out = self.begin(key, state);
                self.end();
                out
            },
            InputEvent::SelectOperation(op) => smallvec![Transition::SelectOperation(op)],
            InputEvent::FieldTap(slot) => {
                let locking = state.focus().locked() != Some(slot);
                if locking {
                    self.flip_armed = false;
                }
                smallvec![Transition::ToggleLock(slot)]
            },
            InputEvent::Command(command) => match command {
                Command::ClearActive => {
                    self.flip_armed = false;
                    smallvec![Transition::Edit(EntryEdit::Clear)]
                },
                Command::Backspace => {
                    self.flip_armed = false;
                    smallvec![Transition::Edit(EntryEdit::Backspace)]
                },
                Command::ClearAll => {
                    self.flip_armed = false;
                    let mut out: Transitions = smallvec![Transition::ResetAll];
                    if let Some(op) = self.reset_operation {
                        out.push(Transition::SelectOperation(op));
                    }
                    out
                },
                Command::Swap => smallvec![Transition::SwapOperands],
                Command::ToggleActive => smallvec![Transition::ToggleActive],
                Command::ToggleLatch => Transitions::new(),
            },
            InputEvent::RingPress { .. }
            | InputEvent::RingMove { .. }
            | InputEvent::WheelPointer { .. } => Transitions::new(),
        }
    }

    fn caption(&self, state: &CalculatorState) -> String {
        match state.focus().locked() {
            Some(locked) => format!("{} locked, typing {}", locked, state.active()),
            None => format!("Typing {}", state.active()),
        }
    }
}

// ============================================================================
// Orbital Adapter
// Operand fields orbit a key ring; swipes alternate between them
// ============================================================================

use crate::domain::OperandSlot;
use crate::engine::{CalculatorState, EntryEdit};
use crate::interfaces::{Command, InputEvent, Key, PresentationAdapter, Transition, Transitions};
use smallvec::smallvec;

/// Orbital key ring.
///
/// Like the dial, a swipe begun on A starts a new pair. Leaving the keys
/// does not forget the last key, so a repeated digit needs a fresh swipe.
#[derive(Debug, Clone, Default)]
pub struct OrbitalAdapter {
    swiping: bool,
    last_key: Option<Key>,
}

impl OrbitalAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PresentationAdapter for OrbitalAdapter {
    fn name(&self) -> &'static str {
        "orbital"
    }

    fn handle_input(&mut self, event: &InputEvent, state: &CalculatorState) -> Transitions {
        match *event {
            InputEvent::KeyPress(key) => {
                self.swiping = true;
                self.last_key = Some(key);
                let mut out = Transitions::new();
                if state.active() == OperandSlot::A {
                    out.push(Transition::ClearOperands);
                }
                out.push(Transition::Edit(key.edit()));
                out
            },
            InputEvent::KeyEnter(key) => {
                if self.swiping && self.last_key != Some(key) {
                    self.last_key = Some(key);
                    smallvec![Transition::Edit(key.edit())]
                } else {
                    Transitions::new()
                }
            },
            InputEvent::KeyLeave => Transitions::new(),
            InputEvent::GestureEnd => {
                if !self.swiping {
                    return Transitions::new();
                }
                self.swiping = false;
                self.last_key = None;
                smallvec![Transition::ToggleActive]
            },
            InputEvent::KeyActivate(key) => {
                smallvec![Transition::Edit(key.edit()), Transition::ToggleActive]
            },
            InputEvent::SelectOperation(op) => smallvec![Transition::SelectOperation(op)],
            InputEvent::FieldTap(slot) => smallvec![Transition::SetActive(slot)],
            InputEvent::Command(command) => match command {
                Command::ClearActive => smallvec![Transition::Edit(EntryEdit::Clear)],
                Command::Backspace => smallvec![Transition::Edit(EntryEdit::Backspace)],
                Command::Swap => smallvec![Transition::SwapOperands],
                Command::ClearAll => smallvec![Transition::ResetAll],
                Command::ToggleActive => smallvec![Transition::ToggleActive],
                Command::ToggleLatch => Transitions::new(),
            },
            InputEvent::RingPress { .. }
            | InputEvent::RingMove { .. }
            | InputEvent::WheelPointer { .. } => Transitions::new(),
        }
    }
}

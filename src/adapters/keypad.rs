// ============================================================================
// Keypad Adapter
// One shared keypad; a latch decides which operand receives keystrokes
// ============================================================================

use crate::domain::OperandSlot;
use crate::engine::{CalculatorState, EntryEdit};
use crate::interfaces::{Command, InputEvent, PresentationAdapter, Transition, Transitions};
use smallvec::smallvec;

/// Single keypad with an input latch.
///
/// The latch is the active slot itself, so the adapter carries no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeypadAdapter;

impl KeypadAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl PresentationAdapter for KeypadAdapter {
    fn name(&self) -> &'static str {
        "keypad"
    }

    fn handle_input(&mut self, event: &InputEvent, _state: &CalculatorState) -> Transitions {
        match *event {
            InputEvent::KeyActivate(key) | InputEvent::KeyPress(key) => {
                smallvec![Transition::Edit(key.edit())]
            },
            InputEvent::SelectOperation(op) => smallvec![Transition::SelectOperation(op)],
            InputEvent::FieldTap(slot) => smallvec![Transition::SetActive(slot)],
            InputEvent::Command(command) => match command {
                Command::ToggleLatch | Command::ToggleActive => {
                    smallvec![Transition::ToggleActive]
                },
                // Latch follows the text it was on
                Command::Swap => smallvec![Transition::SwapOperands, Transition::ToggleActive],
                Command::ClearAll => smallvec![Transition::ResetAll],
                Command::ClearActive => smallvec![Transition::Edit(EntryEdit::Clear)],
                Command::Backspace => smallvec![Transition::Edit(EntryEdit::Backspace)],
            },
            // No gestures on a flat keypad
            InputEvent::KeyEnter(_)
            | InputEvent::KeyLeave
            | InputEvent::GestureEnd
            | InputEvent::RingPress { .. }
            | InputEvent::RingMove { .. }
            | InputEvent::WheelPointer { .. } => Transitions::new(),
        }
    }

    fn caption(&self, state: &CalculatorState) -> String {
        match state.active() {
            OperandSlot::A => "Left operand".to_string(),
            OperandSlot::B => "Right operand".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CalculatorConfig, OperationSymbol};
    use crate::engine::Calculator;
    use crate::interfaces::{Key, NoOpEventHandler};
    use std::sync::Arc;

    fn press(calc: &mut Calculator, pad: &mut KeypadAdapter, labels: &str) {
        for label in labels.chars() {
            let key = Key::from_label(label).unwrap();
            calc.dispatch(pad, &InputEvent::KeyActivate(key));
        }
    }

    fn setup() -> (Calculator, KeypadAdapter) {
        let calc = Calculator::new(&CalculatorConfig::keypad("pad"), Arc::new(NoOpEventHandler));
        (calc, KeypadAdapter::new())
    }

    #[test]
    fn test_latch_routes_keys() {
        let (mut calc, mut pad) = setup();
        press(&mut calc, &mut pad, "12.5");
        calc.dispatch(&mut pad, &InputEvent::Command(Command::ToggleLatch));
        press(&mut calc, &mut pad, "3");

        let frame = calc.render(&pad);
        assert_eq!(frame.expression, "12.5 × 3");
        assert_eq!(frame.result, "37.5");
        assert_eq!(frame.caption, "Right operand");
    }

    #[test]
    fn test_swap_moves_latch() {
        let (mut calc, mut pad) = setup();
        press(&mut calc, &mut pad, "5");
        calc.dispatch(&mut pad, &InputEvent::FieldTap(OperandSlot::B));
        press(&mut calc, &mut pad, "2");
        calc.dispatch(&mut pad, &InputEvent::SelectOperation(OperationSymbol::Divide));

        let frame = calc.dispatch(&mut pad, &InputEvent::Command(Command::Swap));
        assert_eq!(frame.operand_a, "2");
        assert_eq!(frame.operand_b, "5");
        assert_eq!(frame.result, "0.4");
        assert_eq!(frame.active, OperandSlot::A);
    }

    #[test]
    fn test_clear_and_backspace() {
        let (mut calc, mut pad) = setup();
        press(&mut calc, &mut pad, "42");
        calc.dispatch(&mut pad, &InputEvent::Command(Command::Backspace));
        assert_eq!(calc.state().operand(OperandSlot::A).as_str(), "4");

        calc.dispatch(&mut pad, &InputEvent::Command(Command::ClearActive));
        assert!(calc.state().operand(OperandSlot::A).is_blank());

        press(&mut calc, &mut pad, "7");
        calc.dispatch(&mut pad, &InputEvent::Command(Command::ToggleActive));
        press(&mut calc, &mut pad, "8");
        let frame = calc.dispatch(&mut pad, &InputEvent::Command(Command::ClearAll));
        assert_eq!(frame.expression, "0 × 0");
        assert_eq!(frame.active, OperandSlot::A);
    }

    #[test]
    fn test_gestures_ignored() {
        let (calc, mut pad) = setup();
        for event in [
            InputEvent::GestureEnd,
            InputEvent::KeyLeave,
            InputEvent::RingPress { dx: 0.8, dy: 0.0 },
            InputEvent::WheelPointer { dx: 0.5, dy: 0.5 },
        ] {
            assert!(pad.handle_input(&event, calc.state()).is_empty());
        }
    }
}

// ============================================================================
// Calculator
// Per-widget state object: two operands, an operation and focus routing
// ============================================================================

use super::entry::EntryEdit;
use super::evaluator::evaluate_operands;
use super::focus::{FocusLockManager, FocusState};
use crate::domain::{
    CalculatorConfig, CalculatorId, EvaluationResult, OperandSlot, OperandText, OperationSymbol,
};
use crate::interfaces::{
    CalculatorEvent, DisplaySnapshot, EventBatch, EventHandler, InputEvent, PresentationAdapter,
    Transition,
};
use chrono::Utc;
use std::sync::Arc;

// ============================================================================
// Calculator State
// ============================================================================

/// Observable state of one widget.
///
/// Read by presentation adapters; mutated only by [`Calculator::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    a: OperandText,
    b: OperandText,
    operation: OperationSymbol,
    focus: FocusLockManager,
}

impl CalculatorState {
    /// Blank operands with the given operation and active slot.
    pub fn new(operation: OperationSymbol, active: OperandSlot) -> Self {
        Self {
            a: OperandText::new(),
            b: OperandText::new(),
            operation,
            focus: FocusLockManager::new(active),
        }
    }

    #[inline]
    pub fn operand(&self, slot: OperandSlot) -> &OperandText {
        match slot {
            OperandSlot::A => &self.a,
            OperandSlot::B => &self.b,
        }
    }

    /// Text of the slot currently receiving input.
    #[inline]
    pub fn active_operand(&self) -> &OperandText {
        self.operand(self.focus.active())
    }

    #[inline]
    pub fn operation(&self) -> OperationSymbol {
        self.operation
    }

    #[inline]
    pub fn focus(&self) -> &FocusLockManager {
        &self.focus
    }

    #[inline]
    pub fn active(&self) -> OperandSlot {
        self.focus.active()
    }

    /// Evaluate the current operands; digit-less text counts as zero.
    pub fn result(&self) -> EvaluationResult {
        evaluate_operands(self.operation, &self.a, &self.b)
    }

    fn operand_mut(&mut self, slot: OperandSlot) -> &mut OperandText {
        match slot {
            OperandSlot::A => &mut self.a,
            OperandSlot::B => &mut self.b,
        }
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// One calculator widget: explicit state plus the handler observing it.
pub struct Calculator {
    id: CalculatorId,

    /// Widget label (e.g., "main-dial")
    label: Arc<String>,

    /// Slot activated on a full reset
    initial_active: OperandSlot,

    state: CalculatorState,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl Calculator {
    /// Create a new calculator in its initial state
    pub fn new(config: &CalculatorConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            id: CalculatorId::new(),
            label: Arc::new(config.label.clone()),
            initial_active: config.initial_active,
            state: CalculatorState::new(config.initial_operation, config.initial_active),
            event_handler,
        }
    }

    #[inline]
    pub fn id(&self) -> CalculatorId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Evaluate the current operands, fresh on every call
    pub fn result(&self) -> EvaluationResult {
        self.state.result()
    }

    /// Apply one transition, notifying the event handler
    pub fn apply(&mut self, transition: Transition) -> EventBatch {
        self.apply_all(std::iter::once(transition))
    }

    /// Apply transitions in order; the handler receives a single batch
    pub fn apply_all(&mut self, transitions: impl IntoIterator<Item = Transition>) -> EventBatch {
        let mut events = EventBatch::new();
        for transition in transitions {
            tracing::trace!(calculator = %self.label, ?transition, "applying transition");
            self.apply_one(transition, &mut events);
        }
        if !events.is_empty() {
            self.event_handler.on_events(events.clone());
        }
        events
    }

    /// Route an input event through an adapter and render the outcome
    pub fn dispatch(
        &mut self,
        adapter: &mut dyn PresentationAdapter,
        event: &InputEvent,
    ) -> DisplaySnapshot {
        let transitions = adapter.handle_input(event, &self.state);
        if transitions.is_empty() {
            tracing::trace!(
                calculator = %self.label,
                adapter = adapter.name(),
                ?event,
                "input produced no transition"
            );
        }
        self.apply_all(transitions);
        adapter.render(&self.state)
    }

    /// Render through an adapter without changing state
    pub fn render(&self, adapter: &dyn PresentationAdapter) -> DisplaySnapshot {
        adapter.render(&self.state)
    }

    fn apply_one(&mut self, transition: Transition, events: &mut EventBatch) {
        let calculator_id = self.id;
        match transition {
            Transition::Edit(edit) => self.edit_active(edit, events),
            Transition::SetActive(slot) => {
                let before = self.state.focus.state();
                let after = self.state.focus.set_active(slot);
                self.push_focus_change(before, after, events);
            },
            Transition::ToggleActive => {
                let before = self.state.focus.state();
                let after = self.state.focus.toggle_active();
                self.push_focus_change(before, after, events);
            },
            Transition::ToggleLock(slot) => {
                let before = self.state.focus.state();
                let after = self.state.focus.toggle_lock(slot);
                self.push_focus_change(before, after, events);
            },
            Transition::SelectOperation(operation) => {
                if self.state.operation != operation {
                    self.state.operation = operation;
                    events.push(CalculatorEvent::OperationSelected {
                        calculator_id,
                        operation,
                        timestamp: Utc::now(),
                    });
                }
            },
            Transition::SwapOperands => {
                std::mem::swap(&mut self.state.a, &mut self.state.b);
                events.push(CalculatorEvent::OperandsSwapped {
                    calculator_id,
                    timestamp: Utc::now(),
                });
            },
            Transition::ClearOperands => {
                if self.state.a.is_blank() && self.state.b.is_blank() {
                    return;
                }
                self.state.a = OperandText::new();
                self.state.b = OperandText::new();
                events.push(CalculatorEvent::OperandsCleared {
                    calculator_id,
                    timestamp: Utc::now(),
                });
            },
            Transition::ResetAll => {
                self.state.a = OperandText::new();
                self.state.b = OperandText::new();
                self.state.focus.reset(self.initial_active);
                events.push(CalculatorEvent::Reset {
                    calculator_id,
                    timestamp: Utc::now(),
                });
            },
        }
    }

    fn edit_active(&mut self, edit: EntryEdit, events: &mut EventBatch) {
        let slot = self.state.focus.active();
        let operand = self.state.operand_mut(slot);
        let next = edit.apply(operand);
        if next == *operand {
            return;
        }
        *operand = next.clone();
        events.push(CalculatorEvent::OperandEdited {
            calculator_id: self.id,
            slot,
            edit,
            text: next,
            timestamp: Utc::now(),
        });
    }

    fn push_focus_change(&self, before: FocusState, after: FocusState, events: &mut EventBatch) {
        if before != after {
            events.push(CalculatorEvent::FocusChanged {
                calculator_id: self.id,
                focus: after,
                timestamp: Utc::now(),
            });
        }
    }
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Digit;
    use crate::interfaces::{NoOpEventHandler, RecordingEventHandler};

    fn calculator() -> Calculator {
        Calculator::new(&CalculatorConfig::keypad("test"), Arc::new(NoOpEventHandler))
    }

    fn digit(c: char) -> Transition {
        Transition::Edit(EntryEdit::Digit(Digit::try_from(c).unwrap()))
    }

    fn type_text(calc: &mut Calculator, text: &str) {
        for c in text.chars() {
            let t = match c {
                '.' => Transition::Edit(EntryEdit::DecimalPoint),
                '-' => Transition::Edit(EntryEdit::ToggleSign),
                c => digit(c),
            };
            calc.apply(t);
        }
    }

    #[test]
    fn test_initial_state() {
        let calc = calculator();
        assert!(calc.state().operand(OperandSlot::A).is_blank());
        assert!(calc.state().operand(OperandSlot::B).is_blank());
        assert_eq!(calc.state().operation(), OperationSymbol::Multiply);
        assert_eq!(calc.state().active(), OperandSlot::A);
        assert_eq!(calc.result().text, "0");
    }

    #[test]
    fn test_edits_go_to_active_slot() {
        let mut calc = calculator();
        type_text(&mut calc, "12.5");
        calc.apply(Transition::SetActive(OperandSlot::B));
        type_text(&mut calc, "3");

        assert_eq!(calc.state().operand(OperandSlot::A).as_str(), "12.5");
        assert_eq!(calc.state().operand(OperandSlot::B).as_str(), "3");
        assert_eq!(calc.result().text, "37.5");
    }

    #[test]
    fn test_locked_slot_never_receives_edits() {
        let mut calc = calculator();
        calc.apply(Transition::ToggleLock(OperandSlot::A));
        calc.apply(Transition::SetActive(OperandSlot::A));
        type_text(&mut calc, "9");

        assert!(calc.state().operand(OperandSlot::A).is_blank());
        assert_eq!(calc.state().operand(OperandSlot::B).as_str(), "9");
    }

    #[test]
    fn test_swap_and_clear() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.apply(Transition::SwapOperands);
        assert!(calc.state().operand(OperandSlot::A).is_blank());
        assert_eq!(calc.state().operand(OperandSlot::B).as_str(), "5");

        calc.apply(Transition::ClearOperands);
        assert!(calc.state().operand(OperandSlot::B).is_blank());
    }

    #[test]
    fn test_reset_all_restores_focus() {
        let mut calc = calculator();
        calc.apply(Transition::ToggleLock(OperandSlot::A));
        type_text(&mut calc, "7");
        calc.apply(Transition::SelectOperation(OperationSymbol::Add));
        calc.apply(Transition::ResetAll);

        let state = calc.state();
        assert!(state.operand(OperandSlot::B).is_blank());
        assert_eq!(state.active(), OperandSlot::A);
        assert_eq!(state.focus().locked(), None);
        // The selected operation survives a reset
        assert_eq!(state.operation(), OperationSymbol::Add);
    }

    #[test]
    fn test_events_emitted() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::new(&CalculatorConfig::keypad("events"), handler.clone());

        calc.apply(digit('4'));
        calc.apply(Transition::SelectOperation(OperationSymbol::Multiply)); // unchanged
        calc.apply(Transition::SelectOperation(OperationSymbol::Divide));
        calc.apply(Transition::SetActive(OperandSlot::A)); // unchanged
        calc.apply(Transition::ToggleActive);

        let events = handler.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(
            &events[0],
            CalculatorEvent::OperandEdited { slot: OperandSlot::A, text, .. }
                if text.as_str() == "4"
        ));
        assert!(matches!(
            events[1],
            CalculatorEvent::OperationSelected { operation: OperationSymbol::Divide, .. }
        ));
        assert!(matches!(
            events[2],
            CalculatorEvent::FocusChanged { calculator_id, .. } if calculator_id == calc.id()
        ));
    }

    #[test]
    fn test_no_event_for_noop_edit() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::new(&CalculatorConfig::keypad("noop"), handler.clone());

        calc.apply(Transition::Edit(EntryEdit::DecimalPoint));
        calc.apply(Transition::Edit(EntryEdit::DecimalPoint));
        assert_eq!(handler.len(), 1);
    }

    #[test]
    fn test_clear_operands_silent_when_blank() {
        let handler = Arc::new(RecordingEventHandler::new());
        let mut calc = Calculator::new(&CalculatorConfig::dial("clear"), handler.clone());

        assert!(calc.apply(Transition::ClearOperands).is_empty());

        calc.apply(digit('3'));
        handler.take();
        let events = calc.apply(Transition::ClearOperands);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], CalculatorEvent::OperandsCleared { .. }));
        assert!(calc.state().operand(OperandSlot::A).is_blank());
        assert_eq!(handler.len(), 1);
    }

    #[test]
    fn test_apply_all_single_batch() {
        let mut calc = calculator();
        let events = calc.apply_all([digit('1'), digit('2'), Transition::SwapOperands]);
        assert_eq!(events.len(), 3);
        assert_eq!(calc.state().operand(OperandSlot::B).as_str(), "12");
    }

    #[test]
    fn test_instances_are_independent() {
        let mut first = calculator();
        let second = calculator();
        type_text(&mut first, "8");
        assert!(second.state().operand(OperandSlot::A).is_blank());
        assert_ne!(first.id(), second.id());
    }
}

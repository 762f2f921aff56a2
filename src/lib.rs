// ============================================================================
// Operand Calculator Library
// Two-operand calculator core with pluggable presentation adapters
// ============================================================================

//! # Operand Calculator
//!
//! A two-operand calculator: operand A, one of four operations, operand B,
//! and a live result. The arithmetic and the entry rules are shared; only the
//! way the user reaches them changes.
//!
//! ## Features
//!
//! - **48-bit evaluation** rounding every result half-to-even before display
//! - **Total entry transitions** that keep operand text well-formed
//! - **Focus/lock routing** deciding which operand receives input
//! - **Pluggable presentation adapters** (dial, keypad, clock, orbital)
//! - **State change events** delivered in one batch per input
//!
//! ## Example
//!
//! ```rust
//! use operand_calc::prelude::*;
//! use std::sync::Arc;
//!
//! let mut widget = CalculatorBuilder::new("main")
//!     .keypad()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! for label in "12.5".chars() {
//!     let key = Key::from_label(label).unwrap();
//!     widget.handle_input(&InputEvent::KeyActivate(key));
//! }
//! widget.handle_input(&InputEvent::Command(Command::ToggleLatch));
//! let frame = widget.handle_input(&InputEvent::KeyActivate(Key::from_label('3').unwrap()));
//!
//! assert_eq!(frame.expression, "12.5 × 3");
//! assert_eq!(frame.result, "37.5");
//! ```

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::adapters::{ClockAdapter, DialAdapter, KeypadAdapter, OrbitalAdapter};
    pub use crate::domain::{
        AdapterKind, CalculatorConfig, CalculatorId, Digit, EvaluationResult, OperandSlot,
        OperandText, OperationSymbol,
    };
    pub use crate::engine::{
        create_from_config, evaluate, evaluate_symbol, Calculator, CalculatorBuilder,
        CalculatorState, CalculatorWidget, EntryEdit, FocusLockManager,
    };
    pub use crate::interfaces::{
        CalculatorEvent, Command, DisplaySnapshot, EventHandler, InputEvent, Key,
        LoggingEventHandler, NoOpEventHandler, PresentationAdapter, RecordingEventHandler,
        Transition,
    };
}

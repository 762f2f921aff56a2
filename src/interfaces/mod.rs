// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod event_handler;
mod presentation;

pub use event_handler::{
    CalculatorEvent, EventBatch, EventHandler, LoggingEventHandler, NoOpEventHandler,
    RecordingEventHandler,
};
pub use presentation::{
    Command, DisplaySnapshot, InputEvent, Key, PresentationAdapter, Transition, Transitions,
};

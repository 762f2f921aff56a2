// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculator state changes
// ============================================================================

use crate::domain::{CalculatorId, OperandSlot, OperandText, OperationSymbol};
use crate::engine::{EntryEdit, FocusState};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by a calculator widget
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalculatorEvent {
    /// Entry transition changed an operand's text
    OperandEdited {
        calculator_id: CalculatorId,
        slot: OperandSlot,
        edit: EntryEdit,
        text: OperandText,
        timestamp: DateTime<Utc>,
    },

    /// Operation selection changed
    OperationSelected {
        calculator_id: CalculatorId,
        operation: OperationSymbol,
        timestamp: DateTime<Utc>,
    },

    /// Active or locked slot changed
    FocusChanged {
        calculator_id: CalculatorId,
        focus: FocusState,
        timestamp: DateTime<Utc>,
    },

    /// Operand texts exchanged
    OperandsSwapped {
        calculator_id: CalculatorId,
        timestamp: DateTime<Utc>,
    },

    /// Both operand texts blanked, focus kept
    OperandsCleared {
        calculator_id: CalculatorId,
        timestamp: DateTime<Utc>,
    },

    /// Full clear: operands blanked, focus back to its initial state
    Reset {
        calculator_id: CalculatorId,
        timestamp: DateTime<Utc>,
    },
}

/// Events produced by one `apply` call; most transitions emit zero or one.
pub type EventBatch = SmallVec<[CalculatorEvent; 2]>;

/// Event handler trait for processing calculator events
/// Implementations can handle logging, UI sync, analytics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalculatorEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: EventBatch) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalculatorEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        tracing::debug!("Calculator event: {:?}", event);
    }
}

/// Keeps every event in memory, in arrival order.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalculatorEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all recorded events
    pub fn events(&self) -> Vec<CalculatorEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<CalculatorEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalculatorEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: EventBatch) {
        self.events.lock().extend(events);
    }
}

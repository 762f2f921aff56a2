// ============================================================================
// Calculator Configuration
// Per-widget configuration: initial state and interaction metaphor
// ============================================================================

use super::operand::OperandSlot;
use super::operation::OperationSymbol;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Adapter Kind
// ============================================================================

/// Interaction metaphor used to drive a calculator widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AdapterKind {
    /// Circular canvas: swipe across a 12-key ring, operation wheel
    /// - A swipe begun on A starts a new pair
    /// - Releasing a swipe flips the active operand
    #[default]
    Dial,

    /// Single keypad with an input latch selecting the target operand
    Keypad,

    /// Clock face ring with per-operand locks
    /// - The first key of each new gesture flips to the other operand
    Clock,

    /// Orbital ring of keys around the operation wheel
    Orbital,
}

impl AdapterKind {
    pub const fn name(self) -> &'static str {
        match self {
            AdapterKind::Dial => "dial",
            AdapterKind::Keypad => "keypad",
            AdapterKind::Clock => "clock",
            AdapterKind::Orbital => "orbital",
        }
    }
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for creating a calculator widget
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Widget label used in log lines (e.g., "main-dial")
    pub label: String,

    /// Operation selected when the widget mounts and after a full reset
    pub initial_operation: OperationSymbol,

    /// Slot receiving input when the widget mounts and after a full reset
    pub initial_active: OperandSlot,

    /// Presentation adapter driving the widget
    pub adapter: AdapterKind,
}

impl CalculatorConfig {
    /// Create a new configuration with the standard initial state
    pub fn new(label: impl Into<String>, adapter: AdapterKind) -> Self {
        Self {
            label: label.into(),
            initial_operation: OperationSymbol::Multiply,
            initial_active: OperandSlot::A,
            adapter,
        }
    }

    /// Builder method: Set the initial operation
    pub fn with_initial_operation(mut self, op: OperationSymbol) -> Self {
        self.initial_operation = op;
        self
    }

    /// Builder method: Set the initial active slot
    pub fn with_initial_active(mut self, slot: OperandSlot) -> Self {
        self.initial_active = slot;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.label.trim().is_empty() {
            return Err("Label cannot be empty".to_string());
        }

        if self.label.chars().any(char::is_control) {
            return Err("Label cannot contain control characters".to_string());
        }

        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Circular swipe dial
    pub fn dial(label: impl Into<String>) -> Self {
        Self::new(label, AdapterKind::Dial)
    }

    /// Single keypad with input latch
    pub fn keypad(label: impl Into<String>) -> Self {
        Self::new(label, AdapterKind::Keypad)
    }

    /// Clock face with operand locks
    pub fn clock(label: impl Into<String>) -> Self {
        Self::new(label, AdapterKind::Clock)
    }

    /// Orbital key ring
    pub fn orbital(label: impl Into<String>) -> Self {
        Self::new(label, AdapterKind::Orbital)
    }
}

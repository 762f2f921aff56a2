// ============================================================================
// Calculator Factory
// Creates calculator widgets with proper configuration
// ============================================================================

use crate::adapters::{ClockAdapter, DialAdapter, KeypadAdapter, OrbitalAdapter};
use crate::domain::config::{AdapterKind, CalculatorConfig};
use crate::domain::{OperandSlot, OperationSymbol};
use crate::engine::{Calculator, CalculatorState};
use crate::interfaces::{DisplaySnapshot, EventHandler, InputEvent, PresentationAdapter};
use std::sync::Arc;

// ============================================================================
// Widget
// ============================================================================

/// A calculator bundled with the adapter driving it.
pub struct CalculatorWidget {
    calculator: Calculator,
    adapter: Box<dyn PresentationAdapter>,
}

impl CalculatorWidget {
    pub fn new(calculator: Calculator, adapter: Box<dyn PresentationAdapter>) -> Self {
        Self {
            calculator,
            adapter,
        }
    }

    /// Feed one input event and return the frame to paint
    pub fn handle_input(&mut self, event: &InputEvent) -> DisplaySnapshot {
        self.calculator.dispatch(self.adapter.as_mut(), event)
    }

    /// Feed a sequence of events, returning the last frame
    pub fn handle_inputs<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a InputEvent>,
    ) -> DisplaySnapshot {
        for event in events {
            self.calculator.dispatch(self.adapter.as_mut(), event);
        }
        self.render()
    }

    pub fn render(&self) -> DisplaySnapshot {
        self.calculator.render(self.adapter.as_ref())
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    pub fn adapter_name(&self) -> &'static str {
        self.adapter.name()
    }
}

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator widget from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for state change events
///
/// # Returns
/// * `Result<CalculatorWidget, String>` - Configured widget or error
///
/// # Example
/// ```
/// use operand_calc::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::keypad("main");
/// let widget = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(widget.adapter_name(), "keypad");
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<CalculatorWidget, String> {
    // Validate configuration first
    config.validate()?;

    let adapter = create_adapter(config.adapter);
    let calculator = Calculator::new(&config, event_handler);

    tracing::debug!(
        calculator = %calculator.id(),
        label = %config.label,
        adapter = adapter.name(),
        "calculator widget created"
    );

    Ok(CalculatorWidget::new(calculator, adapter))
}

/// Creates the presentation adapter for an interaction metaphor
pub fn create_adapter(kind: AdapterKind) -> Box<dyn PresentationAdapter> {
    match kind {
        AdapterKind::Dial => Box::new(DialAdapter::new()),
        AdapterKind::Keypad => Box::new(KeypadAdapter::new()),
        AdapterKind::Clock => Box::new(ClockAdapter::new()),
        AdapterKind::Orbital => Box::new(OrbitalAdapter::new()),
    }
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating calculator widgets with fluent API
///
/// # Example
/// ```
/// use operand_calc::prelude::*;
/// use std::sync::Arc;
///
/// let widget = CalculatorBuilder::new("wall-clock")
///     .clock()
///     .with_initial_operation(OperationSymbol::Add)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// assert_eq!(widget.state().operation(), OperationSymbol::Add);
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder for the specified widget label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(label, AdapterKind::Dial),
        }
    }

    /// Use the circular swipe dial
    pub fn dial(mut self) -> Self {
        self.config.adapter = AdapterKind::Dial;
        self
    }

    /// Use the single keypad with input latch
    pub fn keypad(mut self) -> Self {
        self.config.adapter = AdapterKind::Keypad;
        self
    }

    /// Use the clock face with operand locks
    pub fn clock(mut self) -> Self {
        self.config.adapter = AdapterKind::Clock;
        self
    }

    /// Use the orbital key ring
    pub fn orbital(mut self) -> Self {
        self.config.adapter = AdapterKind::Orbital;
        self
    }

    /// Set the operation selected at mount
    pub fn with_initial_operation(mut self, op: OperationSymbol) -> Self {
        self.config = self.config.with_initial_operation(op);
        self
    }

    /// Set the slot active at mount and after a reset
    pub fn with_initial_active(mut self, slot: OperandSlot) -> Self {
        self.config = self.config.with_initial_active(slot);
        self
    }

    /// Build the widget
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<CalculatorWidget, String> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration (for inspection)
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }
}

// ============================================================================
// Domain Models Module
// Contains all core domain entities and value objects
// ============================================================================

pub mod config;
pub mod evaluation;
pub mod identity;
pub mod operand;
pub mod operation;

pub use config::{AdapterKind, CalculatorConfig};
pub use evaluation::EvaluationResult;
pub use identity::CalculatorId;
pub use operand::{Digit, OperandSlot, OperandText};
pub use operation::OperationSymbol;

// ============================================================================
// Engine Module
// Contains the calculator core: evaluation, entry, focus routing
// ============================================================================

mod calculator;
mod evaluator;
mod focus;

pub mod entry;
pub mod factory;

pub use calculator::{Calculator, CalculatorState};
pub use entry::{
    append_decimal_point, append_digit, backspace, clear, normalize_leading_zeros, toggle_sign,
    EntryEdit,
};
pub use evaluator::{evaluate, evaluate_operands, evaluate_symbol};
pub use factory::{create_adapter, create_from_config, CalculatorBuilder, CalculatorWidget};
pub use focus::{FocusLockManager, FocusState};

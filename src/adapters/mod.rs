// ============================================================================
// Adapters Module
// Contains the presentation adapters, one per interaction metaphor
// ============================================================================

mod clock;
mod dial;
mod keypad;
mod orbital;

pub use clock::ClockAdapter;
pub use dial::{wheel_operation_at, DialAdapter, RingGeometry, RingHit, RING_KEYS};
pub use keypad::KeypadAdapter;
pub use orbital::OrbitalAdapter;

// ============================================================================
// Dial Adapter
// Circular canvas: swipe across a 12-key ring, operation wheel in quadrants
// ============================================================================

use crate::domain::{Digit, OperandSlot, OperationSymbol};
use crate::engine::{CalculatorState, EntryEdit};
use crate::interfaces::{Command, InputEvent, Key, PresentationAdapter, Transition, Transitions};
use smallvec::smallvec;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Keys clockwise from 12 o'clock: `. 1 2 3 4 5 6 7 8 9 0 ±`
pub const RING_KEYS: [Key; 12] = [
    Key::Point,
    Key::Digit(Digit::ALL[1]),
    Key::Digit(Digit::ALL[2]),
    Key::Digit(Digit::ALL[3]),
    Key::Digit(Digit::ALL[4]),
    Key::Digit(Digit::ALL[5]),
    Key::Digit(Digit::ALL[6]),
    Key::Digit(Digit::ALL[7]),
    Key::Digit(Digit::ALL[8]),
    Key::Digit(Digit::ALL[9]),
    Key::Digit(Digit::ALL[0]),
    Key::Sign,
];

/// Clockwise angle from 12 o'clock in `[0, 2π)`, screen coordinates.
fn clock_angle(dx: f64, dy: f64) -> f64 {
    (dy.atan2(dx) + FRAC_PI_2).rem_euclid(TAU)
}

/// Operation under a point on the wheel.
///
/// Quadrants run clockwise from 12 o'clock in the fixed symbol order:
/// upper-right `+`, lower-right `×`, lower-left `−`, upper-left `:`.
pub fn wheel_operation_at(dx: f64, dy: f64) -> OperationSymbol {
    let sector = (clock_angle(dx, dy) / FRAC_PI_2) as usize;
    OperationSymbol::from_index_wrapping(sector)
}

// ============================================================================
// Ring Geometry
// ============================================================================

/// Annulus holding the key ring, in units of the outer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl Default for RingGeometry {
    fn default() -> Self {
        Self {
            inner_radius: 0.6,
            outer_radius: 1.0,
        }
    }
}

/// What a ring press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingHit {
    Key(Key),
    /// Inner half of the hole: the new-pair button
    Center,
}

impl RingGeometry {
    /// Key under a polar offset; sector boundaries sit half a step either
    /// side of each key's centre.
    pub fn key_at(&self, dx: f64, dy: f64) -> Option<Key> {
        let r = dx.hypot(dy);
        if r < self.inner_radius || r > self.outer_radius {
            return None;
        }
        let step = TAU / RING_KEYS.len() as f64;
        let shifted = (clock_angle(dx, dy) + step / 2.0).rem_euclid(TAU);
        let idx = (shifted / step) as usize % RING_KEYS.len();
        Some(RING_KEYS[idx])
    }

    pub fn hit(&self, dx: f64, dy: f64) -> Option<RingHit> {
        if dx.hypot(dy) <= self.inner_radius * 0.5 {
            return Some(RingHit::Center);
        }
        self.key_at(dx, dy).map(RingHit::Key)
    }
}

// ============================================================================
// Adapter
// ============================================================================

/// Swipe dial.
///
/// A swipe begun while A is active starts a new pair; each newly entered key
/// is applied to the active operand and releasing flips to the other operand.
/// Tapping a field focuses it for editing, which suspends swiping.
#[derive(Debug, Clone, Default)]
pub struct DialAdapter {
    geometry: RingGeometry,
    swiping: bool,
    last_key: Option<Key>,
    focused_field: Option<OperandSlot>,
}

impl DialAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geometry(geometry: RingGeometry) -> Self {
        Self {
            geometry,
            ..Self::default()
        }
    }

    pub fn focused_field(&self) -> Option<OperandSlot> {
        self.focused_field
    }

    pub fn is_swiping(&self) -> bool {
        self.swiping
    }

    fn start_swipe(&mut self, key: Key, state: &CalculatorState) -> Transitions {
        if self.focused_field.is_some() {
            return Transitions::new();
        }
        self.swiping = true;
        self.last_key = Some(key);
        let mut out = Transitions::new();
        if state.active() == OperandSlot::A {
            out.push(Transition::ClearOperands);
        }
        out.push(Transition::Edit(key.edit()));
        out
    }

    fn enter_key(&mut self, key: Option<Key>) -> Transitions {
        if !self.swiping {
            return Transitions::new();
        }
        match key {
            Some(key) if self.last_key != Some(key) => {
                self.last_key = Some(key);
                smallvec![Transition::Edit(key.edit())]
            },
            Some(_) => Transitions::new(),
            None => {
                self.last_key = None;
                Transitions::new()
            },
        }
    }

    fn new_pair(&mut self) -> Transitions {
        self.focused_field = None;
        smallvec![Transition::ResetAll]
    }
}

impl PresentationAdapter for DialAdapter {
    fn name(&self) -> &'static str {
        "dial"
    }

    fn handle_input(&mut self, event: &InputEvent, state: &CalculatorState) -> Transitions {
        match *event {
            InputEvent::KeyPress(key) => self.start_swipe(key, state),
            InputEvent::RingPress { dx, dy } => match self.geometry.hit(dx, dy) {
                Some(RingHit::Key(key)) => self.start_swipe(key, state),
                Some(RingHit::Center) => self.new_pair(),
                None => Transitions::new(),
            },
            InputEvent::KeyEnter(key) => self.enter_key(Some(key)),
            InputEvent::RingMove { dx, dy } => {
                let key = self.geometry.key_at(dx, dy);
                self.enter_key(key)
            },
            InputEvent::KeyLeave => self.enter_key(None),
            InputEvent::KeyActivate(key) => smallvec![Transition::Edit(key.edit())],
            InputEvent::GestureEnd => {
                if !self.swiping {
                    return Transitions::new();
                }
                self.swiping = false;
                self.last_key = None;
                smallvec![Transition::ToggleActive]
            },
            InputEvent::WheelPointer { dx, dy } => {
                smallvec![Transition::SelectOperation(wheel_operation_at(dx, dy))]
            },
            InputEvent::SelectOperation(op) => smallvec![Transition::SelectOperation(op)],
            InputEvent::FieldTap(slot) => {
                self.focused_field = if self.focused_field == Some(slot) {
                    None
                } else {
                    Some(slot)
                };
                smallvec![Transition::SetActive(slot)]
            },
            InputEvent::Command(Command::Backspace) => match self.focused_field {
                Some(_) => smallvec![Transition::Edit(EntryEdit::Backspace)],
                None => Transitions::new(),
            },
            InputEvent::Command(Command::ClearActive) => {
                smallvec![Transition::Edit(EntryEdit::Clear)]
            },
            InputEvent::Command(Command::ClearAll) => self.new_pair(),
            InputEvent::Command(Command::Swap | Command::ToggleActive) => {
                self.focused_field = None;
                smallvec![Transition::ToggleActive]
            },
            InputEvent::Command(Command::ToggleLatch) => Transitions::new(),
        }
    }

    fn caption(&self, state: &CalculatorState) -> String {
        match self.focused_field {
            Some(slot) => format!("Editing {}", slot),
            None => format!("Swipe \u{2192} {}", state.active()),
        }
    }
}

// ============================================================================
// Focus/Lock Manager
// Routes input to one of two operand slots, optionally excluding one
// ============================================================================

use crate::domain::OperandSlot;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Snapshot of the focus state returned by every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FocusState {
    pub active: OperandSlot,
    pub locked: Option<OperandSlot>,
}

/// Tracks the active operand slot and an optional locked slot.
///
/// Invariant, re-established after every mutation: a locked slot is never
/// the active slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FocusLockManager {
    active: OperandSlot,
    locked: Option<OperandSlot>,
}

impl FocusLockManager {
    pub fn new(initial: OperandSlot) -> Self {
        Self {
            active: initial,
            locked: None,
        }
    }

    #[inline]
    pub fn active(&self) -> OperandSlot {
        self.active
    }

    #[inline]
    pub fn locked(&self) -> Option<OperandSlot> {
        self.locked
    }

    #[inline]
    pub fn is_locked(&self, slot: OperandSlot) -> bool {
        self.locked == Some(slot)
    }

    #[inline]
    pub fn state(&self) -> FocusState {
        FocusState {
            active: self.active,
            locked: self.locked,
        }
    }

    /// Make `slot` active; a locked slot redirects to the other one.
    pub fn set_active(&mut self, slot: OperandSlot) -> FocusState {
        self.active = slot;
        self.enforce()
    }

    /// Flip the active slot. With a lock set the active slot cannot move.
    pub fn toggle_active(&mut self) -> FocusState {
        self.active = self.active.other();
        self.enforce()
    }

    /// Unlock `slot` if it is locked, otherwise lock it and activate the other.
    pub fn toggle_lock(&mut self, slot: OperandSlot) -> FocusState {
        if self.locked == Some(slot) {
            self.locked = None;
        } else {
            self.locked = Some(slot);
            self.active = slot.other();
        }
        self.enforce()
    }

    /// Lock `slot` unconditionally.
    pub fn lock_to(&mut self, slot: OperandSlot) -> FocusState {
        self.locked = Some(slot);
        self.active = slot.other();
        self.enforce()
    }

    pub fn clear_lock(&mut self) -> FocusState {
        self.locked = None;
        self.state()
    }

    /// Drop any lock and activate `initial`.
    pub fn reset(&mut self, initial: OperandSlot) -> FocusState {
        self.locked = None;
        self.active = initial;
        self.state()
    }

    fn enforce(&mut self) -> FocusState {
        if let Some(locked) = self.locked {
            if self.active == locked {
                self.active = locked.other();
            }
        }
        self.state()
    }
}

impl Default for FocusLockManager {
    fn default() -> Self {
        Self::new(OperandSlot::A)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::domain::OperandSlot::{A, B};

    #[test]
    fn test_initial_state() {
        let focus = FocusLockManager::default();
        assert_eq!(focus.active(), A);
        assert_eq!(focus.locked(), None);
    }

    #[test]
    fn test_set_active() {
        let mut focus = FocusLockManager::default();
        assert_eq!(focus.set_active(B).active, B);
        assert_eq!(focus.set_active(A).active, A);
    }

    #[test]
    fn test_set_active_respects_lock() {
        let mut focus = FocusLockManager::default();
        focus.toggle_lock(B);
        let state = focus.set_active(B);
        assert_eq!(state.active, A);
        assert_eq!(state.locked, Some(B));
    }

    #[test]
    fn test_toggle_lock() {
        let mut focus = FocusLockManager::default();

        let state = focus.toggle_lock(A);
        assert_eq!(state, FocusState { active: B, locked: Some(A) });
        assert!(focus.is_locked(A));
        assert!(!focus.is_locked(B));

        let state = focus.toggle_lock(A);
        assert_eq!(state, FocusState { active: B, locked: None });

        // Locking the other slot moves the lock and the focus
        focus.toggle_lock(A);
        let state = focus.toggle_lock(B);
        assert_eq!(state, FocusState { active: A, locked: Some(B) });
    }

    #[test]
    fn test_toggle_active_with_lock() {
        let mut focus = FocusLockManager::default();
        assert_eq!(focus.toggle_active().active, B);
        focus.lock_to(B);
        assert_eq!(focus.toggle_active().active, A);
    }

    #[test]
    fn test_reset() {
        let mut focus = FocusLockManager::default();
        focus.toggle_lock(A);
        let state = focus.reset(A);
        assert_eq!(state, FocusState { active: A, locked: None });
        assert_eq!(focus.reset(B).active, B);
    }

    #[test]
    fn test_clear_lock_keeps_active() {
        let mut focus = FocusLockManager::default();
        focus.lock_to(A);
        let state = focus.clear_lock();
        assert_eq!(state, FocusState { active: B, locked: None });
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        SetActive(OperandSlot),
        ToggleLock(OperandSlot),
        LockTo(OperandSlot),
        ToggleActive,
        ClearLock,
    }

    fn slot() -> impl Strategy<Value = OperandSlot> {
        prop_oneof![Just(A), Just(B)]
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            slot().prop_map(Op::SetActive),
            slot().prop_map(Op::ToggleLock),
            slot().prop_map(Op::LockTo),
            Just(Op::ToggleActive),
            Just(Op::ClearLock),
        ]
    }

    proptest! {
        #[test]
        fn locked_slot_is_never_active(ops in prop::collection::vec(op(), 0..64)) {
            let mut focus = FocusLockManager::default();
            for op in ops {
                let state = match op {
                    Op::SetActive(s) => focus.set_active(s),
                    Op::ToggleLock(s) => focus.toggle_lock(s),
                    Op::LockTo(s) => focus.lock_to(s),
                    Op::ToggleActive => focus.toggle_active(),
                    Op::ClearLock => focus.clear_lock(),
                };
                prop_assert_eq!(state, focus.state());
                if let Some(locked) = state.locked {
                    prop_assert_ne!(state.active, locked);
                }
            }
        }
    }
}

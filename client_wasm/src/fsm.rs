//! Game loop state machine
//!
//! The interval keeps firing from page load; this decides what a tick does.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Loop states
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Assets still loading, ticks are no-ops
    Loading,
    Running,
    /// Interval cleared, nothing runs again
    Stopped,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    AssetsSettled,
    Stop,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: LoopState,
    pub to_state: LoopState,
    pub action: LoopAction,
}

#[derive(Debug)]
pub struct LoopFsm {
    state: LoopState,
}

impl LoopFsm {
    pub fn new() -> Self {
        Self {
            state: LoopState::Loading,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn can_transition(&self, action: LoopAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: LoopAction) -> TransitionResult {
        let from_state = self.state;

        match self.next_state(action) {
            Some(next_state) => {
                self.state = next_state;
                TransitionResult {
                    success: true,
                    from_state,
                    to_state: next_state,
                    action,
                }
            }
            None => TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            },
        }
    }

    fn next_state(&self, action: LoopAction) -> Option<LoopState> {
        use LoopAction::*;
        use LoopState::*;

        match (self.state, action) {
            (Loading, AssetsSettled) => Some(Running),
            (Loading | Running, Stop) => Some(Stopped),
            _ => None,
        }
    }
}

impl Default for LoopFsm {
    fn default() -> Self {
        Self::new()
    }
}

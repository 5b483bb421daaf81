//! Per-turn state machine

use crate::error::{PilotError, PilotResult};
use parking_lot::Mutex;
use std::fmt;
use tracing::trace;

/// Where the session is within a conversational turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    #[default]
    Idle,
    AwaitingProviderResponse,
    ApplyingToolEffects,
}

impl TurnState {
    pub fn is_busy(&self) -> bool {
        *self != TurnState::Idle
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::AwaitingProviderResponse => write!(f, "awaiting provider response"),
            Self::ApplyingToolEffects => write!(f, "applying tool effects"),
        }
    }
}

/// Holds the session out of `Idle` for the duration of one turn.
///
/// Dropping the guard returns the state to `Idle` on every path, including
/// early returns and unwinding.
pub(super) struct TurnGuard<'a> {
    state: &'a Mutex<TurnState>,
}

impl<'a> TurnGuard<'a> {
    /// Move from `Idle` to `AwaitingProviderResponse`, or reject if a turn is running
    pub(super) fn begin(state: &'a Mutex<TurnState>) -> PilotResult<Self> {
        let mut current = state.lock();
        if current.is_busy() {
            return Err(PilotError::Busy);
        }
        *current = TurnState::AwaitingProviderResponse;
        trace!("turn started");
        Ok(Self { state })
    }

    pub(super) fn advance(&self, next: TurnState) {
        let mut current = self.state.lock();
        trace!(from = %*current, to = %next, "turn state change");
        *current = next;
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock() = TurnState::Idle;
        trace!("turn finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_rejects_second_turn() {
        let state = Mutex::new(TurnState::Idle);
        let guard = TurnGuard::begin(&state).unwrap();
        assert_eq!(*state.lock(), TurnState::AwaitingProviderResponse);
        assert!(matches!(TurnGuard::begin(&state), Err(PilotError::Busy)));
        drop(guard);
        assert_eq!(*state.lock(), TurnState::Idle);
    }

    #[test]
    fn test_guard_clears_from_any_state() {
        let state = Mutex::new(TurnState::Idle);
        {
            let guard = TurnGuard::begin(&state).unwrap();
            guard.advance(TurnState::ApplyingToolEffects);
            assert!(state.lock().is_busy());
        }
        assert!(!state.lock().is_busy());
    }

    #[test]
    fn test_guard_clears_on_panic() {
        let state = Mutex::new(TurnState::Idle);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TurnGuard::begin(&state).unwrap();
            panic!("boom");
        }));
        assert!(result.is_err());
        assert_eq!(*state.lock(), TurnState::Idle);
    }
}

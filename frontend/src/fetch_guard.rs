use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether a spawned request still belongs to the current effect run.
///
/// The effect hands a clone to its future and calls [`FetchGuard::cancel`]
/// from its cleanup, so a response that arrives after the deps changed is
/// dropped instead of overwriting newer state.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    cancelled: Rc<Cell<bool>>,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_current(&self) -> bool {
        !self.cancelled.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_guard_is_current() {
        assert!(FetchGuard::new().is_current());
    }

    #[test]
    fn test_cancel_is_seen_by_clones() {
        let guard = FetchGuard::new();
        let in_flight = guard.clone();

        guard.cancel();
        assert!(!in_flight.is_current());
    }

    #[test]
    fn test_each_run_gets_its_own_guard() {
        let first = FetchGuard::new();
        let second = FetchGuard::new();

        first.cancel();
        assert!(!first.is_current());
        assert!(second.is_current());
    }
}

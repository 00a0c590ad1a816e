use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Liveness of one view mount.
///
/// Clones share the same flag. The view tears it down when it unmounts and
/// in-flight work checks it before publishing results.
#[derive(Debug, Clone, Default)]
pub struct Lifecycle {
    torn_down: Arc<AtomicBool>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teardown(&self) {
        self.torn_down.store(true, Ordering::Release);
    }

    pub fn is_active(&self) -> bool {
        !self.torn_down.load(Ordering::Acquire)
    }

    /// Passes `value` through while the mount is alive, drops it otherwise.
    pub fn deliver<T>(&self, value: T) -> Option<T> {
        self.is_active().then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teardown_is_shared_between_clones() {
        let lifecycle = Lifecycle::new();
        let view_side = lifecycle.clone();
        assert_eq!(lifecycle.deliver(1), Some(1));

        view_side.teardown();
        assert!(!lifecycle.is_active());
        assert_eq!(lifecycle.deliver(1), None);
    }
}

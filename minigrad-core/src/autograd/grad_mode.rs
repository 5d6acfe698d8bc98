//! Thread-local switch deciding whether operations record graph history.
//!
//! While grad mode is disabled, newly applied operations produce constants and their
//! [`Context`](super::Context) is created with `no_grad = true`.

use std::cell::Cell;

thread_local! {
    static GRAD_ENABLED: Cell<bool> = const { Cell::new(true) };
}

/// Check if gradient tracking is currently enabled on this thread.
pub fn is_grad_enabled() -> bool {
    GRAD_ENABLED.with(|enabled| enabled.get())
}

/// Enables or disables gradient tracking and returns the previous state.
pub fn set_grad_enabled(enabled: bool) -> bool {
    GRAD_ENABLED.with(|flag| flag.replace(enabled))
}

/// Execute a closure without gradient tracking.
///
/// The previous mode is restored afterwards, also when `f` panics.
pub fn no_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = NoGradGuard::new();
    f()
}

/// Disables gradient tracking until dropped.
#[derive(Debug)]
pub struct NoGradGuard {
    prev: bool,
}

impl NoGradGuard {
    pub fn new() -> Self {
        NoGradGuard {
            prev: set_grad_enabled(false),
        }
    }
}

impl Default for NoGradGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for NoGradGuard {
    fn drop(&mut self) {
        set_grad_enabled(self.prev);
    }
}

/// Execute a closure with gradient tracking enabled, whatever the current mode.
pub fn enable_grad<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = EnableGradGuard::new();
    f()
}

/// Enables gradient tracking until dropped.
#[derive(Debug)]
pub struct EnableGradGuard {
    prev: bool,
}

impl EnableGradGuard {
    pub fn new() -> Self {
        EnableGradGuard {
            prev: set_grad_enabled(true),
        }
    }
}

impl Default for EnableGradGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EnableGradGuard {
    fn drop(&mut self) {
        set_grad_enabled(self.prev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_grad_scope() {
        assert!(is_grad_enabled());
        no_grad(|| {
            assert!(!is_grad_enabled());
        });
        assert!(is_grad_enabled());
    }

    #[test]
    fn test_nested_no_grad() {
        no_grad(|| {
            no_grad(|| assert!(!is_grad_enabled()));
            assert!(!is_grad_enabled());
        });
        assert!(is_grad_enabled());
    }

    #[test]
    fn test_guard_restores_previous_state() {
        {
            let _guard = NoGradGuard::new();
            assert!(!is_grad_enabled());
        }
        assert!(is_grad_enabled());
    }

    #[test]
    fn test_set_grad_enabled_returns_previous() {
        assert!(set_grad_enabled(false));
        assert!(!set_grad_enabled(true));
        assert!(is_grad_enabled());
    }

    #[test]
    fn test_enable_grad_inside_no_grad() {
        no_grad(|| {
            enable_grad(|| assert!(is_grad_enabled()));
            assert!(!is_grad_enabled());
        });
        assert!(is_grad_enabled());
    }
}

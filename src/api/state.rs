//! Application state for the salary breakup API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::PayrollConfig;

/// Shared application state.
///
/// Holds the payroll configuration every request is calculated with. It is
/// never mutated after start-up, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<PayrollConfig>,
}

impl AppState {
    /// Creates a new application state with the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns a shared handle to the payroll configuration.
    pub fn shared_config(&self) -> Arc<PayrollConfig> {
        Arc::clone(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::new(PayrollConfig::default());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.config(), cloned.config()));
    }

    #[test]
    fn test_shared_config_does_not_copy() {
        let state = AppState::new(PayrollConfig::default());
        let shared = state.shared_config();
        assert!(std::ptr::eq(state.config(), shared.as_ref()));
    }
}

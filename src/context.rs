//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Snapshot of the configuration
    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

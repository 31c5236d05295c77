//! View liveness for async continuations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page submit handlers spawn requests whose continuations may run after the
//! user navigated away. They must check [`ViewLifetime::is_alive`] before
//! touching view-local signals or navigating.

#[cfg(test)]
#[path = "lifetime_test.rs"]
mod lifetime_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl ViewLifetime {
    /// A lifetime that ends when the current reactive owner is cleaned up.
    pub fn for_current_view() -> Self {
        let lifetime = Self::default();
        let ended = lifetime.clone();
        leptos::prelude::on_cleanup(move || ended.end());
        lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

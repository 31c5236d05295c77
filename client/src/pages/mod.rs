//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form signals and submit orchestration and delegates
//! rendering details to `components`. Validation failures stay inline;
//! remote failures become error toasts with the cause logged at `warn`.

pub mod dashboard;
pub mod forgot_password;
pub mod profile;
pub mod reset_password;
pub mod sign_in;
pub mod sign_up;

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use leptos::prelude::expect_context;

use crate::config::ClientConfig;
use crate::util::route_guard::GuardRoutes;

/// Landing routes from the provided `ClientConfig`; pages navigate to these
/// after a finished flow instead of hard-coded paths.
pub(crate) fn landing_routes() -> GuardRoutes {
    expect_context::<ClientConfig>().routes
}

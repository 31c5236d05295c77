//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once via Leptos context from `App`; pages and services read the
//! API base URL, storage namespace, toast lifetime, and guard routes from here
//! instead of hard-coding them.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use crate::state::session::StorageKeys;
use crate::util::route_guard::GuardRoutes;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_NAMESPACE: &str = "@GoBarber";
pub const DEFAULT_PUBLIC_LANDING: &str = "/";
pub const DEFAULT_AUTHENTICATED_LANDING: &str = "/dashboard";

/// Toasts expire this long after they are added unless dismissed earlier.
pub const TOAST_TTL: Duration = Duration::from_millis(3000);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub storage_namespace: String,
    pub toast_ttl: Duration,
    pub routes: GuardRoutes,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_owned(),
            toast_ttl: TOAST_TTL,
            routes: GuardRoutes {
                public_landing: DEFAULT_PUBLIC_LANDING.to_owned(),
                authenticated_landing: DEFAULT_AUTHENTICATED_LANDING.to_owned(),
            },
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `GOBARBER_API_URL`: remote API base URL (default `http://localhost:3333`)
    /// - `GOBARBER_STORAGE_NAMESPACE`: localStorage key prefix (default `@GoBarber`)
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("GOBARBER_API_URL"), option_env!("GOBARBER_STORAGE_NAMESPACE"))
    }

    fn from_values(api_base_url: Option<&str>, storage_namespace: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.api_base_url, |v| v.trim_end_matches('/').to_owned());
        let storage_namespace = storage_namespace
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or(defaults.storage_namespace, str::to_owned);
        Self { api_base_url, storage_namespace, ..defaults }
    }

    pub fn storage_keys(&self) -> StorageKeys {
        StorageKeys::namespaced(&self.storage_namespace)
    }
}

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! view lifetimes) and pure decision logic (validation, route guard) from page
//! and component code to improve reuse and testability.

pub mod auth;
pub mod lifetime;
pub mod route_guard;
pub mod storage;
pub mod toast;
pub mod validation;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form chrome, route gating, and toast feedback while
//! reading shared services (`AuthContext`, `ToastContext`) from Leptos
//! context providers.

pub mod guarded;
pub mod text_input;
pub mod toast_container;

//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `toast`) and kept free of Leptos
//! types so transitions can be unit tested natively; `util::auth` and
//! `util::toast` wrap them in signals for the view tree.

pub mod session;
pub mod toast;

//! Transient notification queue.
//!
//! DESIGN
//! ======
//! `ToastQueue` is the ordered list rendered by `ToastContainer`;
//! `ToastTimers` owns one abortable expiry future per toast. They are kept
//! apart so the queue stays cheap to clone into the reactive graph while the
//! timer handles stay out of it.
//!
//! INVARIANTS
//! ==========
//! - Ids are UUID v4 strings, never reused within a process.
//! - The list is append-only: order is insertion order.
//! - `remove` is idempotent; removing an absent id changes nothing.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::collections::HashMap;
use std::future::Future;

use futures::future::{AbortHandle, abortable};

/// Visual intent of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at_ms: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Append a toast and return its freshly assigned id.
    pub fn add(&mut self, kind: ToastKind, title: &str, detail: Option<&str>, now_ms: f64) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            title: title.to_owned(),
            detail: detail.map(str::to_owned),
            created_at_ms: now_ms,
        });
        id
    }

    /// Remove the toast with `id`. Returns `false` if it was already gone.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn contains(&self, id: &str) -> bool {
        self.toasts.iter().any(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Pending auto-removal timers keyed by toast id.
#[derive(Debug, Default)]
pub struct ToastTimers {
    handles: HashMap<String, AbortHandle>,
}

impl ToastTimers {
    /// Register an expiry timer for `id` driven by `delay`.
    ///
    /// The returned future resolves to `Some(id)` once `delay` completes, or
    /// `None` if [`ToastTimers::cancel`] aborted it first.
    pub fn arm<F>(&mut self, id: &str, delay: F) -> impl Future<Output = Option<String>> + use<F>
    where
        F: Future<Output = ()>,
    {
        let (delay, handle) = abortable(delay);
        if let Some(previous) = self.handles.insert(id.to_owned(), handle) {
            previous.abort();
        }
        let id = id.to_owned();
        async move { delay.await.ok().map(|()| id) }
    }

    /// Abort the pending timer for `id`. Returns whether one was pending.
    pub fn cancel(&mut self, id: &str) -> bool {
        match self.handles.remove(id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Forget the handle of a timer that already fired.
    pub fn disarm(&mut self, id: &str) {
        self.handles.remove(id);
    }

    pub fn pending(&self) -> usize {
        self.handles.len()
    }
}

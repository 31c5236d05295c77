//! Reactive toast handle shared through Leptos context.
//!
//! Every mutation goes through `update`/`maybe_update` on the signal so
//! concurrent sources (timers, clicks, request continuations) always apply
//! to the latest list, never to a captured copy.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastQueue, ToastTimers};

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
    timers: StoredValue<ToastTimers>,
    ttl: Duration,
}

impl ToastContext {
    pub fn new(ttl: Duration) -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()), timers: StoredValue::new(ToastTimers::default()), ttl }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    /// Append a toast that removes itself after the configured TTL.
    pub fn add(&self, kind: ToastKind, title: &str, detail: Option<&str>) -> String {
        let mut id = String::new();
        self.queue.update(|q| id = q.add(kind, title, detail, now_ms()));
        self.schedule_expiry(&id);
        id
    }

    pub fn success(&self, title: &str, detail: Option<&str>) -> String {
        self.add(ToastKind::Success, title, detail)
    }

    pub fn error(&self, title: &str, detail: Option<&str>) -> String {
        self.add(ToastKind::Error, title, detail)
    }

    /// Dismiss `id` now and cancel its pending expiry. Absent ids are ignored.
    pub fn remove(&self, id: &str) {
        self.timers.update_value(|t| {
            t.cancel(id);
        });
        self.queue.maybe_update(|q| q.remove(id));
    }

    fn schedule_expiry(&self, id: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(expiry) = self.expire_after(id, gloo_timers::future::sleep(self.ttl)) {
                leptos::task::spawn_local(expiry);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, self.ttl);
        }
    }

    /// Arm the expiry of `id` on `delay`. The returned future removes the
    /// toast once `delay` completes and does nothing if the timer was
    /// cancelled first. `None` if the timer store is already disposed.
    #[cfg(any(test, feature = "hydrate"))]
    fn expire_after<F>(&self, id: &str, delay: F) -> Option<impl Future<Output = ()> + use<F>>
    where
        F: Future<Output = ()>,
    {
        let expiry = self.timers.try_update_value(|t| t.arm(id, delay))?;
        let this = *self;
        Some(async move {
            if let Some(id) = expiry.await {
                this.timers.update_value(|t| t.disarm(&id));
                this.queue.maybe_update(|q| q.remove(&id));
            }
        })
    }

    #[cfg(test)]
    fn pending_expiries(&self) -> usize {
        self.timers.with_value(ToastTimers::pending)
    }
}

fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

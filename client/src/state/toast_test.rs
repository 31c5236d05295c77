use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

/// A delay future that completes when the returned sender fires.
fn manual_delay() -> (oneshot::Sender<()>, impl Future<Output = ()>) {
    let (tx, rx) = oneshot::channel::<()>();
    (tx, async move {
        let _ = rx.await;
    })
}

// =============================================================
// ToastQueue
// =============================================================

#[test]
fn queue_default_is_empty() {
    let queue = ToastQueue::default();
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn add_preserves_insertion_order() {
    let mut queue = ToastQueue::default();
    let a = queue.add(ToastKind::Info, "first", None, 1.0);
    let b = queue.add(ToastKind::Success, "second", Some("detail"), 2.0);
    let c = queue.add(ToastKind::Error, "third", None, 3.0);

    let ids = queue.toasts().iter().map(|t| t.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids, vec![a, b.clone(), c]);
    let second = &queue.toasts()[1];
    assert_eq!(second.id, b);
    assert_eq!(second.kind, ToastKind::Success);
    assert_eq!(second.detail.as_deref(), Some("detail"));
    assert!((second.created_at_ms - 2.0).abs() < f64::EPSILON);
}

#[test]
fn add_assigns_unique_ids() {
    let mut queue = ToastQueue::default();
    let ids = (0..50)
        .map(|i| queue.add(ToastKind::Info, &format!("t{i}"), None, 0.0))
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(ids.len(), 50);
}

#[test]
fn length_tracks_adds_minus_removals() {
    let mut queue = ToastQueue::default();
    let ids = (0..5)
        .map(|i| queue.add(ToastKind::Info, &format!("t{i}"), None, 0.0))
        .collect::<Vec<_>>();
    assert!(queue.remove(&ids[1]));
    assert!(queue.remove(&ids[3]));

    assert_eq!(queue.len(), 3);
    let remaining = queue.toasts().iter().map(|t| t.title.as_str()).collect::<Vec<_>>();
    assert_eq!(remaining, vec!["t0", "t2", "t4"]);
}

#[test]
fn remove_absent_id_is_a_no_op() {
    let mut queue = ToastQueue::default();
    let id = queue.add(ToastKind::Info, "only", None, 0.0);
    let before = queue.clone();

    assert!(!queue.remove("missing"));
    assert_eq!(queue, before);

    assert!(queue.remove(&id));
    assert!(!queue.remove(&id));
    assert!(queue.is_empty());
}

#[test]
fn kind_defaults_to_info() {
    assert_eq!(ToastKind::default(), ToastKind::Info);
    assert_eq!(ToastKind::Error.css_modifier(), "error");
}

// =============================================================
// ToastTimers
// =============================================================

#[test]
fn elapsed_timer_removes_toast() {
    let mut queue = ToastQueue::default();
    let mut timers = ToastTimers::default();
    let id = queue.add(ToastKind::Info, "expiring", None, 0.0);
    let (fire, delay) = manual_delay();
    let expiry = timers.arm(&id, delay);

    fire.send(()).unwrap();
    let fired = block_on(expiry).unwrap();
    timers.disarm(&fired);
    queue.remove(&fired);

    assert_eq!(fired, id);
    assert!(!queue.contains(&id));
    assert_eq!(timers.pending(), 0);
}

#[test]
fn cancelled_timer_never_fires() {
    let mut timers = ToastTimers::default();
    let (fire, delay) = manual_delay();
    let expiry = timers.arm("t-1", delay);

    assert!(timers.cancel("t-1"));
    let _ = fire.send(());
    assert_eq!(block_on(expiry), None);
    assert!(!timers.cancel("t-1"));
}

#[test]
fn manual_removal_leaves_other_timers_running() {
    let mut queue = ToastQueue::default();
    let mut timers = ToastTimers::default();
    let a = queue.add(ToastKind::Info, "a", None, 0.0);
    let b = queue.add(ToastKind::Info, "b", None, 0.0);
    let (_fire_a, delay_a) = manual_delay();
    let (fire_b, delay_b) = manual_delay();
    let expiry_a = timers.arm(&a, delay_a);
    let expiry_b = timers.arm(&b, delay_b);

    queue.remove(&a);
    timers.cancel(&a);
    fire_b.send(()).unwrap();

    assert_eq!(block_on(expiry_a), None);
    assert_eq!(block_on(expiry_b), Some(b.clone()));
    assert_eq!(timers.pending(), 1);
    timers.disarm(&b);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn rearming_same_id_aborts_previous_timer() {
    let mut timers = ToastTimers::default();
    let (_fire_old, delay_old) = manual_delay();
    let (fire_new, delay_new) = manual_delay();
    let old = timers.arm("t-1", delay_old);
    let new = timers.arm("t-1", delay_new);

    fire_new.send(()).unwrap();
    assert_eq!(block_on(old), None);
    assert_eq!(block_on(new), Some("t-1".to_owned()));
}

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

fn context() -> ToastContext {
    ToastContext::new(Duration::from_millis(3000))
}

fn manual_delay() -> (oneshot::Sender<()>, impl Future<Output = ()>) {
    let (tx, rx) = oneshot::channel::<()>();
    (tx, async move {
        let _ = rx.await;
    })
}

#[test]
fn add_appends_in_order_with_kind() {
    let toasts = context();
    let first = toasts.success("Cadastro realizado!", None);
    let second = toasts.error("Erro no cadastro", Some("tente novamente"));

    let list = toasts.toasts();
    assert_eq!(list.iter().map(|t| t.id.as_str()).collect::<Vec<_>>(), [first.as_str(), second.as_str()]);
    assert_eq!(list[0].kind, ToastKind::Success);
    assert_eq!(list[1].detail.as_deref(), Some("tente novamente"));
}

#[test]
fn remove_is_idempotent() {
    let toasts = context();
    let id = toasts.error("Falha", None);
    let other = toasts.success("Ok", None);

    toasts.remove(&id);
    toasts.remove(&id);
    toasts.remove("never-added");

    let list = toasts.toasts();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, other);
}

#[test]
fn elapsed_expiry_removes_toast() {
    let toasts = context();
    let id = toasts.success("Perfil atualizado com sucesso!", None);
    let (fire, delay) = manual_delay();
    let expiry = toasts.expire_after(&id, delay).expect("timers alive");
    assert_eq!(toasts.pending_expiries(), 1);

    fire.send(()).unwrap();
    block_on(expiry);

    assert!(toasts.toasts().is_empty());
    assert_eq!(toasts.pending_expiries(), 0);
}

#[test]
fn remove_cancels_pending_expiry() {
    let toasts = context();
    let id = toasts.error("Falha", None);
    let (fire, delay) = manual_delay();
    let expiry = toasts.expire_after(&id, delay).expect("timers alive");

    toasts.remove(&id);
    assert_eq!(toasts.pending_expiries(), 0);

    let later = toasts.success("Depois", None);
    let _ = fire.send(());
    block_on(expiry);

    let list = toasts.toasts();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, later);
}

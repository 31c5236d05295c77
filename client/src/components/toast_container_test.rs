use super::*;
use crate::state::toast::ToastKind;

fn toast(kind: ToastKind, detail: Option<&str>) -> Toast {
    Toast {
        id: "t-1".to_owned(),
        kind,
        title: "Título".to_owned(),
        detail: detail.map(str::to_owned),
        created_at_ms: 0.0,
    }
}

#[test]
fn toast_class_carries_kind_modifier() {
    assert_eq!(toast_class(&toast(ToastKind::Error, Some("x"))), "toast toast--error");
    assert_eq!(toast_class(&toast(ToastKind::Success, Some("x"))), "toast toast--success");
}

#[test]
fn toast_class_is_compact_without_detail() {
    assert_eq!(toast_class(&toast(ToastKind::Info, None)), "toast toast--info toast--compact");
}

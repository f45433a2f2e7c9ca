use super::*;

// ============================================================================
// Toast stack
// ============================================================================

#[test]
fn pushed_toasts_get_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "saved");
    let b = state.push(ToastKind::Error, "failed");

    assert_ne!(a, b);
    assert_eq!(state.toasts.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "first");
    let _b = state.push(ToastKind::Success, "second");

    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "second");
}

#[test]
fn dismissing_an_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "only");
    state.dismiss("nope");
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn kind_maps_to_a_css_class() {
    assert_eq!(ToastKind::Success.class(), "toast--success");
    assert_eq!(ToastKind::Error.class(), "toast--error");
}

use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "one");
    let b = state.push(ToastKind::Error, "two");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[1].message, "two");
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Info, format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    let b = state.push(ToastKind::Info, "b");
    state.dismiss(a);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, b);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Info, "a");
    state.dismiss(a);
    let b = state.push(ToastKind::Info, "b");
    assert_ne!(a, b);
}

#[test]
fn kind_css_modifiers_are_distinct() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
    assert_eq!(ToastKind::Info.css_modifier(), "toast--info");
}

//! Transient notifications, stacked bottom-right.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn push(&mut self, kind: ToastKind, message: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message: message.to_owned(),
        });
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Show a toast and schedule its removal after the standard lifetime.
pub fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: &str) {
    let mut id = String::new();
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                crate::config::TOAST_LIFETIME_MS,
            )))
            .await;
            toasts.update(|t| t.dismiss(&id));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

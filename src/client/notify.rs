//! User-visible notifications.
//!
//! The data access layer only knows the [`Notifier`] trait; the web app
//! provides a toast implementation backed by a [`ToastQueue`] signal.

use std::time::Duration;

use crate::client::util::time::sleep;

/// How long a toast stays fully visible
pub const TOAST_VISIBLE: Duration = Duration::from_millis(4000);
/// Length of the fade-out before a toast is removed
pub const TOAST_FADE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
    Info,
}

impl ToastKind {
    /// daisyUI alert class for the toast
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "alert-error",
            ToastKind::Success => "alert-success",
            ToastKind::Info => "alert-info",
        }
    }
}

/// Receives messages that should be shown to the user
pub trait Notifier {
    fn notify(&self, message: &str, kind: ToastKind);
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    /// Set once the visible lifetime is over, until removal
    pub fading: bool,
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Add a toast, returning its id
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            fading: false,
        });

        id
    }

    /// Start fading a toast out; unknown ids are ignored
    pub fn fade(&mut self, id: u64) {
        if let Some(toast) = self.toasts.iter_mut().find(|toast| toast.id == id) {
            toast.fading = true;
        }
    }

    pub fn remove(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Shared handle to a [`ToastQueue`] that can be updated in place
pub trait ToastStore {
    fn update(&mut self, f: impl FnOnce(&mut ToastQueue));
}

/// Keep a toast visible for [`TOAST_VISIBLE`], fade it for [`TOAST_FADE`], then
/// remove it
pub async fn expire_toast<S: ToastStore>(mut store: S, id: u64) {
    sleep(TOAST_VISIBLE).await;
    store.update(|queue| queue.fade(id));

    sleep(TOAST_FADE).await;
    store.update(|queue| queue.remove(id));
}

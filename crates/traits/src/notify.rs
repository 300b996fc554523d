//! Transient user notifications.

use std::fmt::Debug;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    /// How long the host should keep the toast visible.
    pub duration_ms: u32,
}

impl Toast {
    pub fn success(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            duration_ms,
        }
    }

    pub fn error(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            duration_ms,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == ToastKind::Error
    }
}

pub trait Notifier: Debug {
    fn notify(&self, toast: Toast);
}

/// Collects toasts for inspection. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNotifier {
    toasts: Arc<RwLock<Vec<Toast>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<Toast> {
        self.toasts.read().ok()?.last().cloned()
    }
}

impl Notifier for InMemoryNotifier {
    fn notify(&self, toast: Toast) {
        if let Ok(mut toasts) = self.toasts.write() {
            toasts.push(toast);
        }
    }
}

/// Writes toasts to the `log` facade. Used where there is no UI, e.g. the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Success => log::info!("{}", toast.message),
            ToastKind::Error => log::error!("{}", toast.message),
        }
    }
}

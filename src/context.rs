//! Application Context
//!
//! App-wide toast state provided via the Leptos Context API. Every caught
//! error anywhere in the app ends up here as a transient notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen
const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub content: String,
    pub kind: ToastKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    /// Show a transient error notice
    pub fn error(&self, content: &str) {
        self.push(content, ToastKind::Error);
    }

    /// Show a transient success notice
    pub fn success(&self, content: &str) {
        self.push(content, ToastKind::Success);
    }

    fn push(&self, content: &str, kind: ToastKind) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);

        self.set_toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                content: content.to_string(),
                kind,
            })
        });

        // Auto-dismiss after a few seconds
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }
}

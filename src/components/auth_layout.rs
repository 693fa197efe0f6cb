//! Auth Layout Component
//!
//! Shared wrapper for the login and register routes. Owns the form fields
//! and the feedback message, provided to both forms via context, and
//! redirects to the board when a token is already stored.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::models::{AuthMessage, MessageKind};
use crate::session::Session;

/// Form fields and feedback shared by the login and register forms
#[derive(Clone, Copy)]
pub struct AuthFormContext {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm: RwSignal<String>,
    pub message: RwSignal<Option<AuthMessage>>,
}

impl AuthFormContext {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm: RwSignal::new(String::new()),
            message: RwSignal::new(None),
        }
    }

    pub fn error(&self, content: &str) {
        self.message.set(Some(AuthMessage {
            content: content.to_string(),
            kind: MessageKind::Error,
        }));
    }

    pub fn success(&self, content: &str) {
        self.message.set(Some(AuthMessage {
            content: content.to_string(),
            kind: MessageKind::Success,
        }));
    }

    pub fn clear_message(&self) {
        self.message.set(None);
    }
}

#[component]
pub fn AuthLayout() -> impl IntoView {
    provide_context(AuthFormContext::new());

    // Already logged in, go straight to the board
    let navigate = use_navigate();
    Effect::new(move |_| {
        if Session::load().is_some() {
            navigate("/", Default::default());
        }
    });

    view! {
        <div class="auth-screen">
            <Outlet />
        </div>
    }
}

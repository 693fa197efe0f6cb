//! Auth Message Component
//!
//! Inline error/success line under the auth forms.

use leptos::prelude::*;

use crate::models::{AuthMessage, MessageKind};

#[component]
pub fn AuthMessageView(#[prop(into)] message: Signal<Option<AuthMessage>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|msg| {
                let class = match msg.kind {
                    MessageKind::Error => "auth-message error",
                    MessageKind::Success => "auth-message success",
                };
                view! { <div class=class>{msg.content}</div> }
            })
        }}
    }
}

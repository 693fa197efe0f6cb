//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api::{self, ApiError};
use crate::components::{AuthFormContext, AuthMessageView, TextInput};
use crate::session::Session;

#[component]
pub fn LoginForm() -> impl IntoView {
    let forms = use_context::<AuthFormContext>().expect("AuthFormContext should be provided");

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        forms.clear_message();
        let email = forms.email.get();
        let password = forms.password.get();

        spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    Session::store(&token);
                    forms.success("Logged in");
                    // Full navigation so every page starts from a fresh fetch
                    if let Some(win) = web_sys::window() {
                        let _ = win.location().set_href("/");
                    }
                }
                Err(ApiError::Status { message, .. }) => forms.error(&message),
                Err(ApiError::Decode(_)) => forms.error("Login failed"),
                Err(ApiError::Network(_)) => forms.error("Connection error"),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=handle_submit>
            <h2>"Login"</h2>
            <TextInput
                label="Email"
                input_type="email"
                name="email"
                value=forms.email
                on_change=move |value: String| forms.email.set(value)
            />
            <TextInput
                label="Password"
                input_type="password"
                name="password"
                value=forms.password
                on_change=move |value: String| forms.password.set(value)
            />
            <AuthMessageView message=forms.message />
            <button type="submit">"Login"</button>
            <p class="auth-switch">
                "Don't have an account yet? "
                <a href="/register" on:click=move |_| forms.clear_message()>"Sign up"</a>
            </p>
        </form>
    }
}

//! Register Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use web_sys::SubmitEvent;

use crate::api::{self, ApiError};
use crate::components::{AuthFormContext, AuthMessageView, TextInput};

/// Local check done before any network traffic
fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

#[component]
pub fn RegisterForm() -> impl IntoView {
    let forms = use_context::<AuthFormContext>().expect("AuthFormContext should be provided");
    let navigate = use_navigate();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        forms.clear_message();

        if !passwords_match(&forms.password.get(), &forms.confirm.get()) {
            forms.error("Passwords do not match");
            return;
        }

        let name = forms.name.get();
        let email = forms.email.get();
        let password = forms.password.get();
        let navigate = navigate.clone();

        spawn_local(async move {
            match api::register(&name, &email, &password).await {
                Ok(()) => {
                    forms.success("Registration complete! You can log in now.");
                    navigate("/login", Default::default());
                }
                Err(ApiError::Status { message, .. }) => forms.error(&message),
                Err(ApiError::Decode(_)) => forms.error("Registration failed"),
                Err(ApiError::Network(_)) => forms.error("Connection error"),
            }
        });
    };

    view! {
        <form class="auth-form" on:submit=handle_submit>
            <h2>"Sign Up"</h2>
            <TextInput
                label="Name"
                input_type="text"
                name="name"
                value=forms.name
                on_change=move |value: String| forms.name.set(value)
            />
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
            <TextInput
                label="Confirm Password"
                input_type="password"
                name="confirm"
                value=forms.confirm
                on_change=move |value: String| forms.confirm.set(value)
            />
            <AuthMessageView message=forms.message />
            <button type="submit">"Sign Up"</button>
            <p class="auth-switch">
                "Already have an account? "
                <a href="/login" on:click=move |_| forms.clear_message()>"Login"</a>
            </p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passwords_must_match_exactly() {
        assert!(passwords_match("hunter2", "hunter2"));
        assert!(!passwords_match("hunter2", "hunter3"));
        assert!(!passwords_match("hunter2", ""));
    }
}

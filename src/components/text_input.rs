//! Text Input Component
//!
//! Labeled form input used by the auth forms.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Labeled controlled input
#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    #[prop(into)] name: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let autocomplete = if input_type == "password" {
        "current-password"
    } else {
        "on"
    };

    view! {
        <div class="form-field">
            <label for=name.clone()>{label}</label>
            <input
                type=input_type
                id=name.clone()
                name=name
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    on_change.run(input.value());
                }
            />
        </div>
    }
}

//! Toast Stack Component
//!
//! Fixed-position stack rendering the transient notices in `AppContext`.

use leptos::prelude::*;

use crate::context::{AppContext, ToastKind};

#[component]
pub fn Toasts() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts()
                key=|toast| toast.id
                children=|toast| {
                    let class = match toast.kind {
                        ToastKind::Error => "toast error",
                        ToastKind::Success => "toast success",
                    };
                    view! { <div class=class>{toast.content}</div> }
                }
            />
        </div>
    }
}

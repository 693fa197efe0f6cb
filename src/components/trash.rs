//! Trash Component
//!
//! Drop target that deletes the dropped task.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::models::DragPayload;

#[component]
pub fn Trash(#[prop(into)] on_drop_task: Callback<i64>) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| set_is_over.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        if let Some(payload) = DragPayload::from_event(&ev) {
            on_drop_task.run(payload.task_id);
        }
    };

    view! {
        <div
            class="trash"
            class:over=move || is_over.get()
            title="Drag here to delete"
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <span class="trash-icon">"🗑️"</span>
            <span class="trash-label">"Trash"</span>
        </div>
    }
}

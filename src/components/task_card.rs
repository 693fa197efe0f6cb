//! Task Card Component
//!
//! Draggable card with double-click inline editing. Dragstart encodes a
//! structured payload into the transfer; dimming and edit mode are
//! local-only flags.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, KeyboardEvent};

use crate::models::{DragPayload, Todo, DRAG_FORMAT};

#[component]
pub fn TaskCard(task: Todo, #[prop(into)] on_edit: Callback<(i64, String)>) -> impl IntoView {
    let id = task.id;
    let original = task.content.clone();

    let (editing, set_editing) = signal(false);
    let (value, set_value) = signal(task.content.clone());
    let (dragging, set_dragging) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_dragstart = move |ev: DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            let payload = DragPayload { task_id: id };
            let _ = transfer.set_data(DRAG_FORMAT, &payload.encode());
        }
        set_dragging.set(true);
    };

    let on_dragend = move |_: DragEvent| set_dragging.set(false);

    // Focus the field when entering edit mode
    Effect::new(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Blur commits when the trimmed content changed, otherwise reverts
    let commit = {
        let original = original.clone();
        move |_| {
            set_editing.set(false);
            let trimmed = value.get_untracked().trim().to_string();
            if !trimmed.is_empty() && trimmed != original {
                on_edit.run((id, trimmed));
            } else {
                set_value.set(original.clone());
            }
        }
    };

    // Enter commits via blur, Escape cancels without touching the server
    let on_keydown = {
        let original = original.clone();
        move |ev: KeyboardEvent| match ev.key().as_str() {
            "Enter" => {
                if let Some(input) = input_ref.get_untracked() {
                    let _ = input.blur();
                }
            }
            "Escape" => {
                set_value.set(original.clone());
                set_editing.set(false);
            }
            _ => {}
        }
    };

    view! {
        <div
            class="task-card"
            class:dragging=move || dragging.get()
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dblclick=move |_| set_editing.set(true)
        >
            <Show
                when=move || editing.get()
                fallback=move || view! { <span class="task-content">{move || value.get()}</span> }
            >
                <input
                    node_ref=input_ref
                    class="task-edit-input"
                    maxlength="255"
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_value.set(input.value());
                    }
                    on:blur=commit.clone()
                    on:keydown=on_keydown.clone()
                />
            </Show>
        </div>
    }
}

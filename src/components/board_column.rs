//! Board Column Component
//!
//! One kanban column: drop target, task list, and a "new task" input.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, KeyboardEvent};

use crate::components::TaskCard;
use crate::models::{Column, DragPayload, Todo};

#[component]
pub fn BoardColumn(
    column: Column,
    #[prop(into)] tasks: Signal<Vec<Todo>>,
    #[prop(into)] on_add: Callback<String>,
    #[prop(into)] on_drop_task: Callback<i64>,
    #[prop(into)] on_edit: Callback<(i64, String)>,
) -> impl IntoView {
    let (new_task, set_new_task) = signal(String::new());
    let (drag_over, set_drag_over) = signal(false);

    let add = move || {
        let content = new_task.get_untracked().trim().to_string();
        if content.is_empty() {
            return;
        }
        on_add.run(content);
        set_new_task.set(String::new());
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| set_drag_over.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);
        // Ignore drops that don't carry a valid task payload
        if let Some(payload) = DragPayload::from_event(&ev) {
            on_drop_task.run(payload.task_id);
        }
    };

    view! {
        <div
            class="board-column"
            class=("drag-over", move || drag_over.get())
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <h2 class="board-column-title">{column.title()}</h2>

            <div class="board-column-tasks">
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.content.clone())
                    children=move |task| view! { <TaskCard task=task on_edit=on_edit /> }
                />
            </div>

            <div class="board-column-add">
                <input
                    type="text"
                    placeholder="New task"
                    prop:value=move || new_task.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_task.set(input.value());
                    }
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            add();
                        }
                    }
                />
                <button on:click=move |_| add()>"+"</button>
            </div>
        </div>
    }
}

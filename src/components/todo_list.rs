//! Todo List Page
//!
//! The flat, single-list alternative to the board. Same CRUD shape, one
//! undifferentiated list. Content edits are committed on blur, but only
//! when the trimmed value actually changed since the last sync.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api::{self, ApiError, CreateTodoArgs, UpdateTodoArgs};
use crate::components::SessionGuard;
use crate::context::AppContext;
use crate::models::{Column, Todo};
use crate::session::Session;

#[component]
pub fn TodoListPage() -> impl IntoView {
    view! {
        <SessionGuard>
            <TodoList />
        </SessionGuard>
    }
}

/// Commit an edited value only when it is non-empty and differs from the
/// last content the server acknowledged.
fn should_sync(synced: &str, edited: &str) -> bool {
    let edited = edited.trim();
    !edited.is_empty() && edited != synced
}

async fn submit_add(content: &str) -> Result<i64, ApiError> {
    let session = Session::require()?;
    let args = CreateTodoArgs {
        content,
        column: None,
    };
    api::create_todo(&session, &args).await
}

async fn submit_update(id: i64, content: &str, done: bool) -> Result<(), ApiError> {
    let session = Session::require()?;
    api::update_todo(&session, id, &UpdateTodoArgs { content, done }).await
}

async fn submit_remove(id: i64) -> Result<(), ApiError> {
    let session = Session::require()?;
    api::delete_todo(&session, id).await
}

#[component]
fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (loading, set_loading) = signal(true);
    let (input, set_input) = signal(String::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match Session::require() {
                Ok(session) => match api::list_todos(&session).await {
                    Ok(loaded) => set_todos.set(loaded),
                    Err(_) => ctx.error("Could not load tasks"),
                },
                Err(_) => ctx.error("Could not load tasks"),
            }
            set_loading.set(false);
        });
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let content = input.get().trim().to_string();
        if content.is_empty() {
            return;
        }
        spawn_local(async move {
            match submit_add(&content).await {
                Ok(id) => {
                    set_todos.update(|list| {
                        list.push(Todo {
                            id,
                            content,
                            done: false,
                            column: Column::Todo,
                            created_at: None,
                            updated_at: None,
                        })
                    });
                    set_input.set(String::new());
                }
                Err(_) => ctx.error("Could not add the task"),
            }
        });
    };

    let toggle_todo = move |id: i64| {
        let Some(todo) = todos.with_untracked(|list| list.iter().find(|t| t.id == id).cloned())
        else {
            return;
        };
        spawn_local(async move {
            match submit_update(id, &todo.content, !todo.done).await {
                Ok(()) => set_todos.update(|list| {
                    if let Some(t) = list.iter_mut().find(|t| t.id == id) {
                        t.done = !t.done;
                    }
                }),
                Err(_) => ctx.error("Could not update the task"),
            }
        });
    };

    let commit_content = move |id: i64, content: String| {
        let Some(todo) = todos.with_untracked(|list| list.iter().find(|t| t.id == id).cloned())
        else {
            return;
        };
        spawn_local(async move {
            match submit_update(id, &content, todo.done).await {
                Ok(()) => set_todos.update(|list| {
                    if let Some(t) = list.iter_mut().find(|t| t.id == id) {
                        t.content = content.clone();
                    }
                }),
                Err(_) => ctx.error("Could not update the task"),
            }
        });
    };

    let remove_todo = move |id: i64| {
        spawn_local(async move {
            match submit_remove(id).await {
                Ok(()) => set_todos.update(|list| list.retain(|t| t.id != id)),
                Err(_) => ctx.error("Could not delete the task"),
            }
        });
    };

    view! {
        <div class="todo-list-page">
            <h1>"Tasks"</h1>
            <p class="todo-list-hint"><a href="/">"Back to the board"</a></p>

            <form class="todo-add-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Task name"
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_input.set(field.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            <ul class="todo-list">
                <For
                    each=move || todos.get()
                    key=|todo| (todo.id, todo.content.clone(), todo.done)
                    children=move |todo| {
                        view! {
                            <TodoRow
                                todo=todo
                                on_toggle=Callback::new(move |id: i64| toggle_todo(id))
                                on_commit=Callback::new(move |(id, content): (i64, String)| {
                                    commit_content(id, content)
                                })
                                on_remove=Callback::new(move |id: i64| remove_todo(id))
                            />
                        }
                    }
                />
            </ul>

            <Show when=move || loading.get()>
                <p class="todo-list-empty">"Loading..."</p>
            </Show>
            <Show when=move || !loading.get() && todos.with(|list| list.is_empty())>
                <p class="todo-list-empty">"No tasks yet."</p>
            </Show>
        </div>
    }
}

#[component]
fn TodoRow(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<i64>,
    #[prop(into)] on_commit: Callback<(i64, String)>,
    #[prop(into)] on_remove: Callback<i64>,
) -> impl IntoView {
    let id = todo.id;
    let done = todo.done;
    let synced = todo.content.clone();

    let (value, set_value) = signal(todo.content.clone());

    let on_blur = {
        let synced = synced.clone();
        move |_| {
            let edited = value.get_untracked();
            if should_sync(&synced, &edited) {
                on_commit.run((id, edited.trim().to_string()));
            } else {
                set_value.set(synced.clone());
            }
        }
    };

    view! {
        <li class="todo-row">
            <input
                type="checkbox"
                prop:checked=done
                on:change=move |_| on_toggle.run(id)
            />
            <input
                type="text"
                class="todo-row-content"
                class:done=move || done
                disabled=done
                prop:value=move || value.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let field = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_value.set(field.value());
                }
                on:blur=on_blur
            />
            <button
                class="todo-remove-btn"
                aria-label="Remove"
                on:click=move |_| on_remove.run(id)
            >
                "✕"
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_content_is_not_synced() {
        assert!(!should_sync("Buy milk", "Buy milk"));
        assert!(!should_sync("Buy milk", "  Buy milk  "));
    }

    #[test]
    fn test_changed_content_is_synced() {
        assert!(should_sync("Buy milk", "Buy oat milk"));
    }

    #[test]
    fn test_emptied_content_is_not_synced() {
        assert!(!should_sync("Buy milk", ""));
        assert!(!should_sync("Buy milk", "   "));
    }
}

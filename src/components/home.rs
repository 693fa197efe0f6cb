//! Home Page
//!
//! The board container. Owns the authoritative in-memory board state and
//! reconciles it with the server: every mutation is pessimistic, the local
//! lists change only after the request succeeds. Rapid overlapping requests
//! are not sequenced; the last applied update wins.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, CreateTodoArgs, PatchTodoArgs};
use crate::board::Boards;
use crate::components::{use_current_user, BoardColumn, SessionGuard, Trash};
use crate::context::AppContext;
use crate::models::{Column, Todo};
use crate::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <SessionGuard>
            <Home />
        </SessionGuard>
    }
}

async fn load_board() -> Result<Boards, ApiError> {
    let session = Session::require()?;
    let todos = api::list_todos(&session).await?;
    Ok(Boards::from_todos(todos))
}

/// Create the task, then fetch the full record the server built for it
async fn submit_add(column: Column, content: &str) -> Result<Todo, ApiError> {
    let session = Session::require()?;
    let args = CreateTodoArgs {
        content,
        column: Some(column),
    };
    let id = api::create_todo(&session, &args).await?;
    api::get_todo(&session, id).await
}

async fn submit_edit(id: i64, content: &str) -> Result<(), ApiError> {
    let session = Session::require()?;
    let args = PatchTodoArgs {
        content: Some(content),
        ..Default::default()
    };
    api::patch_todo(&session, id, &args).await
}

async fn submit_move(id: i64, target: Column) -> Result<(), ApiError> {
    let session = Session::require()?;
    let args = PatchTodoArgs {
        column: Some(target),
        ..Default::default()
    };
    api::patch_todo(&session, id, &args).await
}

async fn submit_remove(id: i64) -> Result<(), ApiError> {
    let session = Session::require()?;
    api::delete_todo(&session, id).await
}

#[component]
fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let user = use_current_user();

    let (boards, set_boards) = signal(Boards::default());
    let (loading, set_loading) = signal(true);

    // Initial load, once per navigation
    Effect::new(move |_| {
        spawn_local(async move {
            match load_board().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[board] loaded {} tasks", loaded.len()).into());
                    set_boards.set(loaded);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[board] load failed: {}", err).into());
                    ctx.error("Could not load tasks");
                }
            }
            set_loading.set(false);
        });
    });

    let add_task = move |column: Column, content: String| {
        spawn_local(async move {
            match submit_add(column, &content).await {
                Ok(todo) => set_boards.update(|b| b.push(todo)),
                Err(_) => ctx.error("Could not add the task"),
            }
        });
    };

    let edit_task = move |id: i64, content: String| {
        if boards.with_untracked(|b| b.column_of(id)).is_none() {
            return;
        }
        spawn_local(async move {
            match submit_edit(id, &content).await {
                Ok(()) => set_boards.update(|b| {
                    b.edit(id, &content);
                }),
                Err(_) => ctx.error("Could not edit the task"),
            }
        });
    };

    let move_task = move |id: i64, target: Column| {
        // A drop whose task vanished in the meantime is a silent no-op
        if boards.with_untracked(|b| b.column_of(id)).is_none() {
            return;
        }
        spawn_local(async move {
            match submit_move(id, target).await {
                Ok(()) => set_boards.update(|b| {
                    b.move_to(id, target);
                }),
                Err(_) => ctx.error("Could not move the task"),
            }
        });
    };

    let remove_task = move |id: i64| {
        if boards.with_untracked(|b| b.column_of(id)).is_none() {
            return;
        }
        spawn_local(async move {
            match submit_remove(id).await {
                Ok(()) => set_boards.update(|b| {
                    b.remove(id);
                }),
                Err(_) => ctx.error("Could not delete the task"),
            }
        });
    };

    let logout = move |_| {
        Session::clear();
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href("/login");
        }
    };

    view! {
        <div class="board-page">
            <h1 class="board-greeting">
                {move || user.get().map(|u| format!("Hello, {}", u.username)).unwrap_or_default()}
                <button class="logout-btn" on:click=logout>"Log out"</button>
            </h1>

            <div class="board-hint">
                <p>
                    <b>"How to use: "</b>
                    "add tasks in the columns, drag them between columns to change "
                    "their status, double-click a card to edit its content, and drag "
                    "it to the trash to delete it. There is also a "
                    <a href="/list">"simple list view"</a> "."
                </p>
            </div>

            <div class="board-grid">
                {Column::ALL
                    .iter()
                    .map(|&column| {
                        let tasks = Signal::derive(move || {
                            boards.with(|b| b.tasks(column).to_vec())
                        });
                        view! {
                            <BoardColumn
                                column=column
                                tasks=tasks
                                on_add=Callback::new(move |content: String| add_task(column, content))
                                on_drop_task=Callback::new(move |id: i64| move_task(id, column))
                                on_edit=Callback::new(move |(id, content): (i64, String)| {
                                    edit_task(id, content)
                                })
                            />
                        }
                    })
                    .collect_view()}
                <Trash on_drop_task=Callback::new(move |id: i64| remove_task(id)) />
            </div>

            <Show when=move || loading.get()>
                <div class="loading-overlay">
                    <div class="loading-box">"Loading..."</div>
                </div>
            </Show>
        </div>
    }
}

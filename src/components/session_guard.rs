//! Session Guard Component
//!
//! Pre-render gate for protected pages. Checks token presence, validates it
//! against `GET /me`, and only then renders its children with the profile
//! available via context. One request per navigation, no retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::context::AppContext;
use crate::models::User;
use crate::session::Session;

#[derive(Clone, Copy, PartialEq, Eq)]
enum GuardState {
    Checking,
    Ready,
    RateLimited,
    Failed,
}

/// Profile of the logged-in user, provided to guarded children
#[derive(Clone, Copy)]
pub struct CurrentUser(ReadSignal<Option<User>>);

pub fn use_current_user() -> ReadSignal<Option<User>> {
    expect_context::<CurrentUser>().0
}

#[component]
pub fn SessionGuard(children: ChildrenFn) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (state, set_state) = signal(GuardState::Checking);
    let (user, set_user) = signal(None::<User>);
    provide_context(CurrentUser(user));

    let navigate = use_navigate();

    Effect::new(move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            let Some(session) = Session::load() else {
                navigate("/login", Default::default());
                return;
            };
            match api::me(&session).await {
                Ok(profile) => {
                    set_user.set(Some(profile));
                    set_state.set(GuardState::Ready);
                }
                Err(err) if err.is_unauthorized() => {
                    web_sys::console::log_1(&"[guard] token expired".into());
                    Session::clear();
                    ctx.error("Your login has expired");
                    navigate("/login", Default::default());
                }
                Err(err) if err.is_rate_limited() => {
                    ctx.error("Too many requests, try again later");
                    set_state.set(GuardState::RateLimited);
                }
                Err(api::ApiError::Decode(_)) => {
                    // Profile came back unreadable, treat the token as dead
                    Session::clear();
                    navigate("/login", Default::default());
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[guard] profile check failed: {}", err).into());
                    set_state.set(GuardState::Failed);
                }
            }
        });
    });

    view! {
        {move || match state.get() {
            GuardState::Checking => view! {
                <div class="page-notice">"Loading..."</div>
            }
            .into_any(),
            GuardState::RateLimited => view! {
                <div class="page-notice">"Too many requests, try again later."</div>
            }
            .into_any(),
            GuardState::Failed => view! {
                <div class="page-notice">"There was an error loading your user data."</div>
            }
            .into_any(),
            GuardState::Ready => children().into_any(),
        }}
    }
}

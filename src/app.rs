//! Taskboard App
//!
//! Router setup: the board and the flat list behind the session guard, the
//! auth forms under the shared auth layout.

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::components::{AuthLayout, HomePage, LoginForm, RegisterForm, Toasts, TodoListPage};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! {
        <Router>
            <Toasts />
            <Routes fallback=|| view! { <div class="page-notice">"Page not found."</div> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/list") view=TodoListPage />
                <ParentRoute path=path!("") view=AuthLayout>
                    <Route path=path!("login") view=LoginForm />
                    <Route path=path!("register") view=RegisterForm />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

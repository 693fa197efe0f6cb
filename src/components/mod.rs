//! UI Components
//!
//! Reusable Leptos components and page containers.

mod auth_layout;
mod auth_message;
mod board_column;
mod home;
mod login_form;
mod register_form;
mod session_guard;
mod task_card;
mod text_input;
mod toasts;
mod todo_list;
mod trash;

pub use auth_layout::{AuthFormContext, AuthLayout};
pub use auth_message::AuthMessageView;
pub use board_column::BoardColumn;
pub use home::HomePage;
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use session_guard::{use_current_user, SessionGuard};
pub use task_card::TaskCard;
pub use text_input::TextInput;
pub use toasts::Toasts;
pub use todo_list::TodoListPage;
pub use trash::Trash;

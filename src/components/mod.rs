//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod contact_form;
mod navbar;
mod task_form;
mod task_list;
mod toast_host;

pub use confirm_modal::ConfirmModal;
pub use contact_form::ContactForm;
pub use navbar::Navbar;
pub use task_form::TaskForm;
pub use task_list::TaskList;
pub use toast_host::ToastHost;

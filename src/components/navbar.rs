//! Navbar Component
//!
//! App header with title and logout action.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="navbar">
            <div>
                <h1 class="navbar-title">"Mini CRM"</h1>
                <p class="navbar-subtitle">"Manage your contacts and tasks"</p>
            </div>
            <button class="logout-btn" on:click=move |_| ctx.logout()>
                "Logout"
            </button>
        </div>
    }
}

//! Login Page
//!
//! Username/password form against POST /api/token/. A successful login
//! stores the token pair and routes to the contacts list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::context::{AppContext, Screen};
use crate::session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            return;
        }
        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(tokens) => {
                    session::save_tokens(&tokens);
                    ctx.session_started();
                    ctx.navigate(Screen::Contacts);
                    ctx.notify_success("Welcome back!");
                }
                Err(ApiError::Unauthorized) => {
                    ctx.notify_error("Invalid username or password");
                    set_is_loading.set(false);
                }
                Err(err) => {
                    ctx.notify_error(err.notification());
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <div class="login-header">
                    <h1>"Mini CRM"</h1>
                    <p>"Sign in to your account"</p>
                </div>
                <form on:submit=on_submit>
                    <label>"Username"</label>
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                    <label>"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="primary-btn" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

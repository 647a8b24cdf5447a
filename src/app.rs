//! Mini CRM App
//!
//! Root component: screen dispatch, hash synchronization, and the
//! session guard routing unauthenticated users to the login screen.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{Navbar, ToastHost};
use crate::context::{AppContext, Screen, Toast};
use crate::pages::{ContactDetailsPage, ContactsPage, LoginPage};
use crate::session;
use crate::store::{AppState, AppStore};

fn initial_screen() -> Screen {
    if !session::is_authenticated() {
        return Screen::Login;
    }
    let hash = web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default();
    Screen::from_hash(&hash)
}

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(initial_screen());
    let (authenticated, set_authenticated) = signal(session::is_authenticated());
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());

    let ctx = AppContext::new(
        (screen, set_screen),
        (authenticated, set_authenticated),
        (toasts, set_toasts),
    );
    provide_context(ctx);
    provide_context::<AppStore>(AppStore::new(AppState::default()));

    // Back/forward and hand-edited hashes
    window_event_listener(ev::hashchange, move |_| {
        if let Some(window) = web_sys::window() {
            if let Ok(hash) = window.location().hash() {
                ctx.sync_from_hash(&hash);
            }
        }
    });

    // Session guard: no token means the login screen, whatever the hash says.
    Effect::new(move |_| {
        if !authenticated.get() && screen.get() != Screen::Login {
            ctx.navigate(Screen::Login);
        }
    });

    view! {
        <ToastHost />
        {move || match screen.get() {
            Screen::Login => view! { <LoginPage /> }.into_any(),
            Screen::Contacts => view! {
                <Navbar />
                <ContactsPage />
            }
            .into_any(),
            Screen::ContactDetails(id) => view! {
                <Navbar />
                <ContactDetailsPage contact_id=id />
            }
            .into_any(),
        }}
    }
}

//! Application Context
//!
//! Screen navigation, session flag, and toast notifications shared via
//! the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::session;

/// How long a toast stays visible, in milliseconds.
const TOAST_TIMEOUT_MS: u32 = 4_000;

/// The screens of the app, mirrored into `location.hash`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Contacts,
    ContactDetails(u32),
}

impl Screen {
    /// Parse a `location.hash` value. Unknown hashes land on the contacts
    /// list (the session guard still routes unauthenticated users away).
    pub fn from_hash(hash: &str) -> Screen {
        let path = hash.trim_start_matches('#');
        if path == "/login" {
            return Screen::Login;
        }
        if let Some(rest) = path.strip_prefix("/contacts/") {
            if let Ok(id) = rest.trim_end_matches('/').parse() {
                return Screen::ContactDetails(id);
            }
        }
        Screen::Contacts
    }

    pub fn to_hash(&self) -> String {
        match self {
            Screen::Login => "#/login".to_string(),
            Screen::Contacts => "#/".to_string(),
            Screen::ContactDetails(id) => format!("#/contacts/{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    set_screen: WriteSignal<Screen>,
    /// Whether a token pair is held - read
    pub authenticated: ReadSignal<bool>,
    set_authenticated: WriteSignal<bool>,
    /// Visible toasts - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: RwSignal<u32>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        authenticated: (ReadSignal<bool>, WriteSignal<bool>),
        toasts: (ReadSignal<Vec<Toast>>, WriteSignal<Vec<Toast>>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            authenticated: authenticated.0,
            set_authenticated: authenticated.1,
            toasts: toasts.0,
            set_toasts: toasts.1,
            next_toast_id: RwSignal::new(0),
        }
    }

    /// Switch screens and keep the address bar in sync.
    pub fn navigate(&self, screen: Screen) {
        self.set_screen.set(screen);
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&screen.to_hash());
        }
    }

    /// Follow an external hash change (back/forward, manual edit).
    /// `navigate` sets the signal before writing the hash, so the echoed
    /// hashchange must not notify again and remount the page.
    pub fn sync_from_hash(&self, hash: &str) {
        if let Some(screen) = next_screen(self.screen.get_untracked(), hash) {
            self.set_screen.set(screen);
        }
    }

    /// Mark the session established after a successful login.
    pub fn session_started(&self) {
        self.set_authenticated.set(true);
    }

    /// Drop the session and return to the login screen.
    pub fn logout(&self) {
        session::clear_tokens();
        self.set_authenticated.set(false);
        self.navigate(Screen::Login);
    }

    /// Reaction to a 401 on any authenticated request: never silent.
    pub fn session_expired(&self) {
        self.notify_error("Your session has expired. Please sign in again.");
        self.logout();
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Success, message.into());
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.push_toast(ToastKind::Error, message.into());
    }

    fn push_toast(&self, kind: ToastKind, message: String) {
        let id = self.next_toast_id.get_untracked();
        self.next_toast_id.set(id + 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

/// Screen a hash change should switch to, or None when the hash already
/// matches the current screen.
fn next_screen(current: Screen, hash: &str) -> Option<Screen> {
    let parsed = Screen::from_hash(hash);
    (parsed != current).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_parses_contact_details() {
        assert_eq!(Screen::from_hash("#/contacts/42"), Screen::ContactDetails(42));
        assert_eq!(Screen::from_hash("#/contacts/42/"), Screen::ContactDetails(42));
    }

    #[test]
    fn hash_parses_login_and_root() {
        assert_eq!(Screen::from_hash("#/login"), Screen::Login);
        assert_eq!(Screen::from_hash("#/"), Screen::Contacts);
        assert_eq!(Screen::from_hash(""), Screen::Contacts);
    }

    #[test]
    fn unknown_hashes_fall_back_to_contacts() {
        assert_eq!(Screen::from_hash("#/contacts/abc"), Screen::Contacts);
        assert_eq!(Screen::from_hash("#/nope"), Screen::Contacts);
    }

    #[test]
    fn to_hash_roundtrips() {
        for screen in [Screen::Login, Screen::Contacts, Screen::ContactDetails(7)] {
            assert_eq!(Screen::from_hash(&screen.to_hash()), screen);
        }
    }

    #[test]
    fn echoed_hash_change_is_a_no_op() {
        // The hashchange fired by navigate() itself must not re-set the
        // screen, or the page would remount and fetch twice.
        assert_eq!(next_screen(Screen::Contacts, "#/"), None);
        assert_eq!(next_screen(Screen::Login, "#/login"), None);
        assert_eq!(next_screen(Screen::ContactDetails(7), "#/contacts/7"), None);
    }

    #[test]
    fn external_hash_change_switches_screen() {
        assert_eq!(
            next_screen(Screen::Contacts, "#/contacts/3"),
            Some(Screen::ContactDetails(3))
        );
        assert_eq!(next_screen(Screen::ContactDetails(3), "#/"), Some(Screen::Contacts));
    }
}

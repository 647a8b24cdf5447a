//! Session Storage
//!
//! Access/refresh token pair persisted in browser localStorage. Presence
//! of the access token is what makes the client consider itself signed in.

use web_sys::Storage;

use crate::models::TokenPair;

const ACCESS_KEY: &str = "access_token";
const REFRESH_KEY: &str = "refresh_token";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist a freshly issued token pair.
pub fn save_tokens(tokens: &TokenPair) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(ACCESS_KEY, &tokens.access);
        let _ = storage.set_item(REFRESH_KEY, &tokens.refresh);
    }
}

/// Current access token, if any.
pub fn access_token() -> Option<String> {
    local_storage()?.get_item(ACCESS_KEY).ok().flatten()
}

/// Drop both tokens (logout or session expiry).
pub fn clear_tokens() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(ACCESS_KEY);
        let _ = storage.remove_item(REFRESH_KEY);
    }
}

pub fn is_authenticated() -> bool {
    access_token().is_some()
}

use client::TokenSource;
use dioxus::logger::tracing::warn;
use shared::AccessToken;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Access token kept in the browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!("localStorage is not accessible: {err:?}");
                None
            }
        }
    }

    pub fn store_access_token(&self, token: &AccessToken) -> bool {
        let Some(storage) = Self::local_storage() else {
            return false;
        };
        if let Err(err) = storage.set_item(ACCESS_TOKEN_KEY, token.as_str()) {
            warn!("Failed to store access token: {err:?}");
            return false;
        }
        true
    }
}

impl TokenSource for BrowserStorage {
    fn get_token(&self) -> Option<AccessToken> {
        let storage = Self::local_storage()?;
        match storage.get_item(ACCESS_TOKEN_KEY) {
            Ok(value) => value.and_then(AccessToken::new),
            Err(err) => {
                warn!("Failed to read access token: {err:?}");
                None
            }
        }
    }
}

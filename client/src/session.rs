use std::{rc::Rc, sync::Arc};

use shared::AccessToken;

/// Read access to the locally stored access token.
///
/// Views receive this as a capability instead of reaching for a global
/// store, so tests and previews can hand in their own source.
pub trait TokenSource {
    fn get_token(&self) -> Option<AccessToken>;
}

impl<T: TokenSource + ?Sized> TokenSource for &T {
    fn get_token(&self) -> Option<AccessToken> {
        (**self).get_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Rc<T> {
    fn get_token(&self) -> Option<AccessToken> {
        (**self).get_token()
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Arc<T> {
    fn get_token(&self) -> Option<AccessToken> {
        (**self).get_token()
    }
}

/// A token fixed at construction time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticToken(Option<AccessToken>);

impl StaticToken {
    /// An empty string yields a source with no token.
    pub fn new(token: &str) -> Self {
        Self(AccessToken::new(token))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl From<Option<AccessToken>> for StaticToken {
    fn from(value: Option<AccessToken>) -> Self {
        Self(value)
    }
}

impl TokenSource for StaticToken {
    fn get_token(&self) -> Option<AccessToken> {
        self.0.clone()
    }
}

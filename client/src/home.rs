use shared::{AccessToken, ProfileState};
use tracing::{debug, info};

use crate::{identity::ProfileFetcher, lifecycle::Lifecycle, session::TokenSource};

/// What the home view does right after mounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    RedirectToLogin,
    Fetch(AccessToken),
}

/// Result of one profile load, as seen by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeOutcome {
    /// The token was missing or rejected.
    RedirectToLogin,
    /// New display state for the view.
    Settled(ProfileState),
    /// The view was torn down before the response arrived.
    Discarded,
}

/// Navigation guard: a single synchronous token lookup.
pub fn guard<T: TokenSource + ?Sized>(tokens: &T) -> Activation {
    match tokens.get_token() {
        Some(token) => Activation::Fetch(token),
        None => {
            info!("No access token stored, redirecting to login");
            Activation::RedirectToLogin
        }
    }
}

/// Issues exactly one profile request and maps it onto the view.
pub async fn load<F: ProfileFetcher + ?Sized>(
    fetcher: &F,
    token: &AccessToken,
    lifecycle: &Lifecycle,
) -> HomeOutcome {
    let result = fetcher.fetch_profile(token).await;

    let Some(result) = lifecycle.deliver(result) else {
        debug!("Home view unmounted before the profile arrived, discarding response");
        return HomeOutcome::Discarded;
    };

    match result {
        Err(err) if err.requires_login() => {
            info!("Access token rejected, redirecting to login: {err}");
            HomeOutcome::RedirectToLogin
        }
        result => HomeOutcome::Settled(result.into()),
    }
}

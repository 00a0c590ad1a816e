use std::rc::Rc;

use client::{
    Activation, HomeOutcome, Lifecycle, ProfileFetcher, TokenSource,
    home::{guard, load},
};
use dioxus::{logger::tracing::debug, prelude::*};
use shared::ProfileState;

use crate::ProfileView;

/// Collaborators of the home view, provided through context by the launcher.
#[derive(Clone)]
pub struct IdentityContext {
    pub tokens: Rc<dyn TokenSource>,
    pub fetcher: Rc<dyn ProfileFetcher>,
}

impl IdentityContext {
    pub fn new(
        tokens: impl TokenSource + 'static,
        fetcher: impl ProfileFetcher + 'static,
    ) -> Self {
        Self {
            tokens: Rc::new(tokens),
            fetcher: Rc::new(fetcher),
        }
    }
}

/// Handle to the profile request driven by [`use_profile`].
#[derive(Clone, Copy, PartialEq)]
pub struct ProfileHandle {
    redirected: bool,
    state: Signal<ProfileState>,
    request: UseFuture,
}

impl ProfileHandle {
    /// True when no token was stored at mount.
    pub fn redirected(&self) -> bool {
        self.redirected
    }

    pub fn state(&self) -> ProfileState {
        self.state.cloned()
    }

    /// Issues another request with the token read at mount.
    pub fn retry(&mut self) {
        if !self.redirected {
            self.request.restart();
        }
    }

    pub fn render(self) -> Element {
        if self.redirected {
            return rsx! {};
        }
        let mut handle = self;
        rsx! {
            ProfileView {
                state: self.state(),
                on_retry: move |_| handle.retry(),
            }
        }
    }
}

/// Reads the stored access token once per mount and loads the profile with it.
///
/// Without a token, `on_unauthenticated` fires and nothing is fetched. With
/// one, a single profile request is issued. A rejected token also fires
/// `on_unauthenticated`. Responses arriving after unmount are dropped.
pub fn use_profile(on_unauthenticated: EventHandler<()>) -> ProfileHandle {
    let context = use_context::<IdentityContext>();
    let lifecycle = use_hook(Lifecycle::new);
    use_drop({
        let lifecycle = lifecycle.clone();
        move || lifecycle.teardown()
    });

    let activation = use_hook(|| {
        let activation = guard(context.tokens.as_ref());
        if activation == Activation::RedirectToLogin {
            on_unauthenticated.call(());
        }
        activation
    });
    let mut state = use_signal(ProfileState::default);

    let request = use_future({
        let activation = activation.clone();
        move || {
            let context = context.clone();
            let lifecycle = lifecycle.clone();
            let activation = activation.clone();
            async move {
                let Activation::Fetch(token) = activation else {
                    return;
                };
                state.set(ProfileState::Loading);
                match load(context.fetcher.as_ref(), &token, &lifecycle).await {
                    HomeOutcome::Settled(next) => state.set(next),
                    HomeOutcome::RedirectToLogin => on_unauthenticated.call(()),
                    HomeOutcome::Discarded => debug!("Dropped profile response for unmounted view"),
                }
            }
        }
    });

    ProfileHandle {
        redirected: activation == Activation::RedirectToLogin,
        state,
        request,
    }
}

/// Guards the current user's profile behind the stored access token.
/// `Retry` issues another request with the same token.
#[component]
pub fn ProfileGate(on_unauthenticated: EventHandler<()>) -> Element {
    use_profile(on_unauthenticated).render()
}

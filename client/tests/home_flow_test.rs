use std::cell::RefCell;

use async_trait::async_trait;
use client::{
    Activation, HomeOutcome, IdentityClient, Lifecycle, ProfileFetcher, StaticToken, TokenSource,
    home::{guard, load},
};
use httpmock::prelude::*;
use shared::{AccessToken, IdentityConfig, ProfileError, ProfileState, UserProfile};

fn alice() -> UserProfile {
    UserProfile {
        id: "1".to_owned(),
        username: "alice".to_owned(),
        first_name: Some("Alice".to_owned()),
        last_name: Some("Smith".to_owned()),
        date_of_birth: Some("1990-01-01".to_owned()),
    }
}

/// Mount sequence of the home view: guard first, then one load.
async fn mount_home<F: ProfileFetcher>(
    tokens: &impl TokenSource,
    fetcher: &F,
    lifecycle: &Lifecycle,
) -> HomeOutcome {
    match guard(tokens) {
        Activation::RedirectToLogin => HomeOutcome::RedirectToLogin,
        Activation::Fetch(token) => load(fetcher, &token, lifecycle).await,
    }
}

/// Records every token it is asked about and answers with a fixed result.
struct RecordingFetcher {
    calls: RefCell<Vec<String>>,
    response: Result<UserProfile, ProfileError>,
    unmount_during_fetch: Option<Lifecycle>,
}

impl RecordingFetcher {
    fn answering(response: Result<UserProfile, ProfileError>) -> Self {
        Self {
            calls: RefCell::new(vec![]),
            response,
            unmount_during_fetch: None,
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ProfileFetcher for RecordingFetcher {
    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, ProfileError> {
        self.calls.borrow_mut().push(token.bearer());
        tokio::task::yield_now().await;
        if let Some(lifecycle) = &self.unmount_during_fetch {
            lifecycle.teardown();
        }
        self.response.clone()
    }
}

#[tokio::test]
async fn missing_token_redirects_without_fetching() {
    let fetcher = RecordingFetcher::answering(Ok(alice()));
    for tokens in [StaticToken::absent(), StaticToken::new("")] {
        assert_eq!(guard(&tokens), Activation::RedirectToLogin);
        let outcome = mount_home(&tokens, &fetcher, &Lifecycle::new()).await;
        assert_eq!(outcome, HomeOutcome::RedirectToLogin);
    }
    assert!(fetcher.calls().is_empty());
}

#[tokio::test]
async fn present_token_fetches_exactly_once() {
    let fetcher = RecordingFetcher::answering(Ok(alice()));
    let outcome = mount_home(&StaticToken::new("abc"), &fetcher, &Lifecycle::new()).await;

    assert_eq!(fetcher.calls(), vec!["Bearer abc".to_owned()]);
    assert_eq!(outcome, HomeOutcome::Settled(ProfileState::Loaded(alice())));
}

#[tokio::test]
async fn whitespace_token_is_sent_verbatim() {
    let fetcher = RecordingFetcher::answering(Ok(alice()));
    let tokens = StaticToken::new("  ");
    assert!(matches!(guard(&tokens), Activation::Fetch(_)));

    mount_home(&tokens, &fetcher, &Lifecycle::new()).await;
    assert_eq!(fetcher.calls(), vec!["Bearer   ".to_owned()]);
}

#[tokio::test]
async fn rejected_token_redirects() {
    let fetcher = RecordingFetcher::answering(Err(ProfileError::Unauthorized { status: 403 }));
    let outcome = mount_home(&StaticToken::new("stale"), &fetcher, &Lifecycle::new()).await;

    assert_eq!(outcome, HomeOutcome::RedirectToLogin);
    assert_eq!(fetcher.calls().len(), 1);
}

#[tokio::test]
async fn failures_settle_into_failed_state() {
    let err = ProfileError::fetch_failed("connection refused");
    let fetcher = RecordingFetcher::answering(Err(err.clone()));
    let token = AccessToken::new("abc").unwrap();

    let outcome = load(&fetcher, &token, &Lifecycle::new()).await;
    assert_eq!(outcome, HomeOutcome::Settled(ProfileState::Failed(err)));
}

#[tokio::test]
async fn late_response_after_unmount_is_discarded() {
    let lifecycle = Lifecycle::new();
    let fetcher = RecordingFetcher {
        unmount_during_fetch: Some(lifecycle.clone()),
        ..RecordingFetcher::answering(Ok(alice()))
    };

    let outcome = mount_home(&StaticToken::new("abc"), &fetcher, &lifecycle).await;
    assert_eq!(outcome, HomeOutcome::Discarded);
    assert_eq!(fetcher.calls().len(), 1);
}

#[tokio::test]
async fn remounting_fetches_again() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/identity/users/my-info")
                .header("Authorization", "Bearer abc");
            then.status(200).body(
                r#"{"result":{"id":"1","username":"alice","firstName":"Alice","lastName":"Smith","dob":"1990-01-01"}}"#,
            );
        })
        .await;
    let client = IdentityClient::new(IdentityConfig::new(&server.base_url()).unwrap()).unwrap();
    let tokens = StaticToken::new("abc");

    let first = mount_home(&tokens, &client, &Lifecycle::new()).await;
    let second = mount_home(&tokens, &client, &Lifecycle::new()).await;

    mock.assert_hits_async(2).await;
    assert_eq!(first, HomeOutcome::Settled(ProfileState::Loaded(alice())));
    assert_eq!(first, second);
}

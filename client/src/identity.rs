use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use shared::{AccessToken, ApiResponse, IdentityConfig, ProfileError, UserProfile};
use tracing::{debug, info, warn};

/// Something that can turn an access token into the current user's profile.
#[async_trait(?Send)]
pub trait ProfileFetcher {
    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, ProfileError>;
}

/// HTTP client for the identity service.
#[derive(Debug, Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self, reqwest::Error> {
        let builder = reqwest::Client::builder();
        // Browsers own request timeouts, reqwest can't set them on wasm.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout);
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    /// `GET {base}/identity/users/my-info` with the token as bearer credential.
    pub async fn my_info(&self, token: &AccessToken) -> Result<UserProfile, ProfileError> {
        let url = self.config.my_info_url();
        debug!("Requesting current user profile from {url}");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, token.bearer())
            .send()
            .await
            .map_err(|err| {
                warn!("Profile request failed: {err}");
                ProfileError::fetch_failed(err)
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            warn!("Failed to read profile response body: {err}");
            ProfileError::fetch_failed(err)
        })?;

        let result = parse_profile_response(status, &body);
        match &result {
            Ok(profile) => info!("Loaded profile of {profile}"),
            Err(err) => warn!("Profile request returned {status}: {err}"),
        }
        result
    }
}

#[async_trait(?Send)]
impl ProfileFetcher for IdentityClient {
    async fn fetch_profile(&self, token: &AccessToken) -> Result<UserProfile, ProfileError> {
        self.my_info(token).await
    }
}

/// Classifies a `my-info` response.
///
/// 401/403, and error envelopes carrying an authentication error code, mean
/// the token was rejected. Any other non-success status is a failed fetch.
/// A success status needs a JSON envelope with a well-formed `result`.
pub fn parse_profile_response(status: StatusCode, body: &[u8]) -> Result<UserProfile, ProfileError> {
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(ProfileError::Unauthorized {
            status: status.as_u16(),
        });
    }

    let envelope = serde_json::from_slice::<ApiResponse<serde_json::Value>>(body);

    if let Ok(envelope) = &envelope {
        if envelope.error_code().is_some_and(|code| code.is_auth_failure()) {
            return Err(ProfileError::Unauthorized {
                status: status.as_u16(),
            });
        }
    }

    if !status.is_success() {
        let message = envelope
            .ok()
            .and_then(|envelope| {
                let code = envelope.error_code();
                envelope.message.or_else(|| code.map(|code| code.to_string()))
            })
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("no reason").to_owned());
        return Err(ProfileError::fetch_failed(format!(
            "identity service responded with {}: {message}",
            status.as_u16()
        )));
    }

    let envelope =
        envelope.map_err(|err| ProfileError::malformed(format!("body is not a JSON envelope: {err}")))?;
    match envelope.result {
        None | Some(serde_json::Value::Null) => {
            Err(ProfileError::malformed("response carries no result"))
        }
        Some(result) => serde_json::from_value(result)
            .map_err(|err| ProfileError::malformed(format!("result is not a user profile: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = r#"{"result":{"id":"1","username":"alice","firstName":"Alice","lastName":"Smith","dob":"1990-01-01"}}"#;

    #[test]
    fn success_extracts_result() {
        let profile = parse_profile_response(StatusCode::OK, ALICE.as_bytes()).unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.date_of_birth.as_deref(), Some("1990-01-01"));
    }

    #[test]
    fn auth_statuses_are_unauthorized() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            assert_eq!(
                parse_profile_response(status, ALICE.as_bytes()),
                Err(ProfileError::Unauthorized {
                    status: status.as_u16()
                })
            );
        }
    }

    #[test]
    fn auth_error_code_is_unauthorized_even_with_other_status() {
        let body = br#"{"code":1005,"message":"User is not authenticated"}"#;
        assert_eq!(
            parse_profile_response(StatusCode::BAD_REQUEST, body),
            Err(ProfileError::Unauthorized { status: 400 })
        );
    }

    #[test]
    fn server_errors_are_failed_fetches_with_message() {
        let body = br#"{"code":9999,"message":"Uncategorized exception"}"#;
        let err = parse_profile_response(StatusCode::INTERNAL_SERVER_ERROR, body).unwrap_err();
        assert_eq!(
            err,
            ProfileError::fetch_failed("identity service responded with 500: Uncategorized exception")
        );

        let err = parse_profile_response(StatusCode::BAD_GATEWAY, b"<html>").unwrap_err();
        assert_eq!(
            err,
            ProfileError::fetch_failed("identity service responded with 502: Bad Gateway")
        );
    }

    #[test]
    fn malformed_bodies() {
        let bodies: [&[u8]; 5] = [
            b"not json",
            b"[]",
            b"{}",
            br#"{"result":null}"#,
            br#"{"result":{"id":"1"}}"#,
        ];
        for body in bodies {
            let err = parse_profile_response(StatusCode::OK, body).unwrap_err();
            assert!(
                matches!(err, ProfileError::MalformedResponse { .. }),
                "{body:?} gave {err:?}"
            );
        }
    }
}

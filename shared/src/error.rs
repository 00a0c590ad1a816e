use thiserror::Error;

/// Ways the home view can fail to produce a profile.
///
/// Values are carried inside view state, so the type is `Clone + PartialEq`
/// and holds rendered reasons instead of the underlying error objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("no access token is stored")]
    Unauthenticated,

    #[error("could not reach the identity service: {reason}")]
    FetchFailed { reason: String },

    #[error("the identity service rejected the access token (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("unexpected response from the identity service: {reason}")]
    MalformedResponse { reason: String },
}

impl ProfileError {
    pub fn fetch_failed(reason: impl ToString) -> Self {
        Self::FetchFailed {
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::MalformedResponse {
            reason: reason.to_string(),
        }
    }

    /// The failure sends the visitor back to the login route.
    pub fn requires_login(&self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Unauthorized { .. })
    }

    /// The failure can be recovered from by issuing the request again.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::FetchFailed { .. } | Self::MalformedResponse { .. }
        )
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid identity base url {value:?}: {source}")]
    InvalidBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("identity base url {0:?} can't carry a path")]
    UnsupportedBaseUrl(String),

    #[error("invalid request timeout {value:?}: {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] postcard::Error),
}

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Path of the "current user" endpoint, relative to the identity base URL.
pub const MY_INFO_PATH: &str = "identity/users/my-info";

/// Envelope wrapping every identity service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: Option<i64>,
    pub message: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn error_code(&self) -> Option<IdentityErrorCode> {
        self.code.and_then(IdentityErrorCode::from_code)
    }
}

/// Application error codes reported by the identity service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityErrorCode {
    Uncategorized,
    UserNotFound,
    UserExisted,
    UsernameInvalid,
    PasswordInvalid,
    Unauthenticated,
    Unauthorized,
}

impl IdentityErrorCode {
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            9999 => Some(Self::Uncategorized),
            1001 => Some(Self::UserNotFound),
            1002 => Some(Self::UserExisted),
            1003 => Some(Self::UsernameInvalid),
            1004 => Some(Self::PasswordInvalid),
            1005 => Some(Self::Unauthenticated),
            1006 => Some(Self::Unauthorized),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            Self::Uncategorized => 9999,
            Self::UserNotFound => 1001,
            Self::UserExisted => 1002,
            Self::UsernameInvalid => 1003,
            Self::PasswordInvalid => 1004,
            Self::Unauthenticated => 1005,
            Self::Unauthorized => 1006,
        }
    }

    /// Whether the code means the presented credential was not accepted.
    pub fn is_auth_failure(self) -> bool {
        matches!(self, Self::Unauthenticated | Self::Unauthorized)
    }
}

impl Display for IdentityErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match *self {
            Self::Uncategorized => "Uncategorized exception",
            Self::UserNotFound => "User not found",
            Self::UserExisted => "User already exists",
            Self::UsernameInvalid => "Username is invalid",
            Self::PasswordInvalid => "Password is invalid",
            Self::Unauthenticated => "User is not authenticated",
            Self::Unauthorized => "User is not authorized",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::UserProfile;

    #[test]
    fn envelope_without_result_parses() {
        let response: ApiResponse<UserProfile> =
            serde_json::from_str(r#"{"code":1005,"message":"User is not authenticated"}"#).unwrap();
        assert_eq!(response.result, None);
        assert_eq!(response.error_code(), Some(IdentityErrorCode::Unauthenticated));
        assert!(response.error_code().unwrap().is_auth_failure());
    }

    #[test]
    fn unknown_codes_are_ignored() {
        assert_eq!(IdentityErrorCode::from_code(42), None);
        for code in [9999, 1001, 1002, 1003, 1004, 1005, 1006] {
            assert_eq!(IdentityErrorCode::from_code(code).unwrap().code(), code);
        }
    }
}

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Deserializer, Serialize};

/// Bearer credential proving an authenticated session.
///
/// Opaque and never empty: [`AccessToken::new`] rejects `""` and otherwise
/// keeps the value byte for byte. `Debug` is redacted so the value never ends
/// up in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        (!token.is_empty()).then_some(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl TryFrom<String> for AccessToken {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value).ok_or("access token can't be empty")
    }
}

impl From<AccessToken> for String {
    fn from(value: AccessToken) -> Self {
        value.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// Identity record of the signed-in user. Every field is display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    #[serde(default, deserialize_with = "display_value")]
    pub first_name: Option<String>,
    #[serde(default, deserialize_with = "display_value")]
    pub last_name: Option<String>,
    #[serde(
        rename = "dob",
        alias = "dateOfBirth",
        default,
        deserialize_with = "display_value"
    )]
    pub date_of_birth: Option<String>,
}

/// Accepts strings, numbers and booleans as display text. `null` maps to `None`.
fn display_value<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

impl Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.id)
    }
}

use crate::{error::ProfileError, types::UserProfile};

/// Display state of the home view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileState {
    #[default]
    Loading,
    Loaded(UserProfile),
    Failed(ProfileError),
}

impl From<Result<UserProfile, ProfileError>> for ProfileState {
    fn from(value: Result<UserProfile, ProfileError>) -> Self {
        match value {
            Ok(profile) => Self::Loaded(profile),
            Err(err) => Self::Failed(err),
        }
    }
}

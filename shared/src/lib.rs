pub mod api;
pub mod config;
pub mod error;
pub mod state;
#[cfg(not(target_arch = "wasm32"))]
pub mod storage;
pub mod types;

pub use api::{ApiResponse, IdentityErrorCode};
pub use config::IdentityConfig;
pub use error::{ConfigError, ProfileError, StorageError};
pub use state::ProfileState;
pub use types::{AccessToken, UserProfile};

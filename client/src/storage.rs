use std::path::PathBuf;
use std::sync::LazyLock;

use platform_dirs::AppDirs;
use shared::{
    AccessToken,
    storage::{GeneralStorage, RawStorage},
};

use crate::session::TokenSource;

pub const APP_NAME: &str = "jb-identity";
pub const ACCESS_TOKEN_FILE: &str = "session.bin";

/// Application data kept on disk between runs.
pub struct Storage {
    base_path: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        // Relative to the working directory when the platform has no data dir.
        let data_dir = AppDirs::new(Some(APP_NAME), false)
            .map_or_else(|| PathBuf::from(APP_NAME), |dirs| dirs.data_dir);
        Self::with_base_path(data_dir)
    }
}

impl RawStorage for Storage {
    fn get_base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl GeneralStorage for Storage {}

impl Storage {
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Written by the login view only; the home view reads through [`TokenSource`].
    pub fn store_access_token(&self, token: &AccessToken) -> bool {
        self.store(&ACCESS_TOKEN_FILE, token)
    }

    pub fn load_access_token(&self) -> Option<AccessToken> {
        self.load(&ACCESS_TOKEN_FILE)
    }
}

impl TokenSource for Storage {
    fn get_token(&self) -> Option<AccessToken> {
        self.load_access_token()
    }
}

pub static STORAGE: LazyLock<Storage> = LazyLock::new(Default::default);

use std::{
    fmt::Debug,
    fs::{self, File},
    io::{ErrorKind, Read, Write},
    path::{Path, PathBuf},
};

use atomic_write_file::AtomicWriteFile;
use postcard::{from_bytes, to_allocvec};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, warn};

use crate::error::StorageError;

pub trait RawStorage {
    fn get_base_path(&self) -> &PathBuf;

    fn get_path<P: AsRef<Path>>(&self, original_path: P) -> Result<PathBuf, StorageError> {
        let path = self.get_base_path().join(original_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(path.canonicalize().unwrap_or(path))
    }

    fn raw_store<P: AsRef<Path>>(
        &self,
        file_path: P,
        data: &impl Serialize,
    ) -> Result<(), StorageError> {
        let path = self.get_path(file_path)?;
        debug!("Storing data to file {:?}", path.as_path());
        let bytes = to_allocvec(data)?;
        let mut file = AtomicWriteFile::options().open(path)?;
        file.write_all(&bytes)?;
        file.commit()?;
        Ok(())
    }

    /// Loads a value. A missing file is `Ok(None)`, not an error.
    fn raw_load<P: AsRef<Path>, T: DeserializeOwned>(
        &self,
        file_path: P,
    ) -> Result<Option<T>, StorageError> {
        let path = self.get_path(file_path)?;
        debug!("Loading data from file {:?}", path.as_path());
        let mut bytes: Vec<u8> = vec![];
        match File::options().read(true).open(path) {
            Ok(mut file) => file.read_to_end(&mut bytes)?,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(from_bytes(&bytes)?))
    }

    fn raw_remove<P: AsRef<Path>>(&self, file_path: P) -> Result<(), StorageError> {
        let path = self.get_path(file_path)?;
        match fs::remove_file(path) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

pub trait GeneralStorage: RawStorage {
    fn store<P: AsRef<Path> + Debug>(&self, file_path: &P, data: &impl Serialize) -> bool {
        if let Err(err) = self.raw_store(file_path, data) {
            error!("Unexpected error while trying to store data to file {file_path:?}: {err}");
            false
        } else {
            true
        }
    }

    fn load<P: AsRef<Path> + Debug, T: DeserializeOwned>(&self, file_path: &P) -> Option<T> {
        match self.raw_load(file_path) {
            Ok(data) => data,
            Err(err) => {
                warn!("Unexpected error while trying to load data from file {file_path:?}: {err}");
                None
            }
        }
    }

    fn remove<P: AsRef<Path> + Debug>(&self, file_path: &P) -> bool {
        if let Err(err) = self.raw_remove(file_path) {
            error!("Unexpected error while trying to remove file {file_path:?}: {err}");
            false
        } else {
            true
        }
    }
}

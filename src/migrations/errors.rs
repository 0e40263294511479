use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use crate::store::StoreError;

#[derive(Debug)]
pub enum MigrationError {
    Store(StoreError),
    Settings(PathBuf, serde_json::Error),
    MissingField(PathBuf, &'static str),
}

impl fmt::Display for MigrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationError::Store(err) => write!(f, "I/O error: {}", err),
            MigrationError::Settings(path, err) => {
                write!(f, "invalid JSON in {}: {}", path.display(), err)
            }
            MigrationError::MissingField(path, field) => {
                write!(f, "{} has no '{}' field", path.display(), field)
            }
        }
    }
}

impl Error for MigrationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MigrationError::Store(err) => Some(err),
            MigrationError::Settings(_, err) => Some(err),
            MigrationError::MissingField(_, _) => None,
        }
    }
}

impl From<StoreError> for MigrationError {
    fn from(err: StoreError) -> Self {
        MigrationError::Store(err)
    }
}

use crate::repositories;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid id '{0}': {1}")]
    InvalidId(String, #[source] ParseIntError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl Error {
    /// The name of the underlying failure
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidId(..) => "ParseIntError",
            Self::Repo(repositories::Error::NotFound) => "NotFound",
            Self::Repo(repositories::Error::Other(_)) => "DatabaseError",
        }
    }

    /// The message of the underlying failure without any context
    pub fn cause_message(&self) -> String {
        match self {
            Self::InvalidId(_, err) => err.to_string(),
            Self::Repo(err) => err.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::InvalidId(..) | Self::Repo(repositories::Error::NotFound)
        )
    }
}

//! Error kinds reported by the library.
//!
//! Each variant maps to one recovery policy for the caller:
//!
//! - [`Error::NotFound`] - the query matched nothing; show a message, do not retry
//! - [`Error::Auth`] - the credential is invalid or expired; API access stays
//!   broken until credentials are refreshed
//! - [`Error::Upstream`] - network or service failure; surfaced as is
//! - [`Error::InvalidInput`] / [`Error::MalformedDataset`] - the caller handed
//!   over data that violates a precondition; nothing partial is returned
//! - [`Error::Config`] / [`Error::Io`] - local environment problems

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("authentication failed: {0}")]
    Auth(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("malformed dataset: {0}")]
    MalformedDataset(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Upstream(e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::MalformedDataset(e.to_string())
    }
}

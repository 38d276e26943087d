// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure. Never contained; ends the enclosing operation.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unreachable resource {url} (status {status})")]
    Status { url: String, status: u16 },

    #[error("bad URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("unrecognized team name in {column}: {name:?}")]
    UnrecognizedTeamName { column: String, name: String },

    #[error("missing column {0:?}")]
    MissingColumn(String),

    #[error("no table found at {url}")]
    NoTable { url: String },

    #[error("unparseable date {0:?}")]
    BadDate(String),

    #[error("bad number in {column}: {value:?}")]
    BadNumber { column: String, value: String },

    #[error("model: {0}")]
    Model(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Whether a failure can be contained at month/team granularity.
    /// Transport and local I/O errors always propagate.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Http(_) | Error::Io(_) | Error::Csv(_))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Model(e.to_string())
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error reaching data store - {0}")]
    Http(#[from] reqwest::Error),
    #[error("Data store responded with status {status} - {message}")]
    Api { status: u16, message: String },
    #[error("Error decoding data store response - {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Data store returned no rows for insert into {0}")]
    EmptyResponse(String),
    #[error("Service key is not a valid header value - {0}")]
    InvalidKey(#[from] reqwest::header::InvalidHeaderValue),
    #[error("Error synchronizing store state - {0}")]
    SyncError(String),
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Error reading credential file {path} - {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error parsing credential file - {0}")]
    CSVError(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Error discovering chain files in {path} - {source}")]
    Discovery {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),
    #[error("Invalid value for {name} - {reason}")]
    Invalid { name: &'static str, reason: String },
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StoreError::SyncError(e.to_string())
    }
}

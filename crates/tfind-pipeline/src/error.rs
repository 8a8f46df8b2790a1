use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: the platform produced no fix")]
    LocationUnavailable,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Location(#[from] LocationError),

    #[error("no search results yet; run a search first")]
    NoSession,

    #[error("row {row} is out of range (list has {len} rows)")]
    RowOutOfRange { row: usize, len: usize },

    #[error("completion channel closed")]
    CompletionChannelClosed,
}

#[derive(Debug, Error)]
pub enum PageLoadError {
    #[error("HTTP error loading page: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid page URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

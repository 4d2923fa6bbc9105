use thiserror::Error;

/// Reasons a container cannot be turned into a widget.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WidgetError {
    #[error("malformed size {0:?}, expected <width>x<height>")]
    MalformedSize(String),

    #[error("container has no `{0}` field")]
    MissingField(&'static str),

    #[error("invalid image count {0:?}, expected a positive integer")]
    InvalidCount(String),
}

/// Failures while reading a page description.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to read page file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse page description: {0}")]
    Parse(#[from] serde_json::Error),
}

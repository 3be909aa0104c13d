use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("parse error: unknown key \"{0}\"")]
    UnknownKey(String),

    #[error("parse error: duplicate key \"{0}\"")]
    DuplicateKey(String),

    #[error("parse error: malformed directive \"{0}\"")]
    MalformedDirective(String),

    #[error("parse error: invalid value \"{value}\" for key \"{key}\"")]
    InvalidValue { key: &'static str, value: String },

    #[error("parse error: unknown generator \"{0}\"")]
    UnknownGenerator(String),

    #[error("parse error: missing metadata")]
    MissingMetadata,

    #[error("parse error: block {block} has {found} lines, expected {expected}")]
    TrackCountMismatch {
        block: usize,
        found: usize,
        expected: usize,
    },

    #[error("parse error: {found} tracks for {expected} generators")]
    GeneratorCountMismatch { found: usize, expected: usize },

    #[error("parse error: invalid token \"{0}\"")]
    InvalidToken(String),

    #[error("parse error: invalid duration \"{0}\"")]
    InvalidDuration(String),

    #[error("parse error: invalid length {length} for token \"{token}\"")]
    InvalidLength { length: i64, token: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

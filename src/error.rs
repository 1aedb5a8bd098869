use thiserror::Error;

/// Service-layer errors. Anything a caller can act on gets its own variant;
/// storage and serialization failures pass through transparently.
#[derive(Debug, Error)]
pub enum Error {
    #[error("a {kind} with slug '{slug}' already exists")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("invalid slug '{slug}': use lowercase letters, digits and hyphens")]
    InvalidSlug { slug: String },

    #[error("invalid pagination cursor")]
    InvalidCursor,

    #[error("count {requested} out of range ({min}..={max})")]
    CountOutOfRange { requested: i64, min: i64, max: i64 },

    #[error("no categories or tags exist to assign; create some first")]
    NoTermsToAssign,

    #[error(transparent)]
    Db(#[from] rusqlite::Error),

    #[error(transparent)]
    Pool(#[from] r2d2::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

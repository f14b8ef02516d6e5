//! Enka error types
//!
//! Two disjoint families:
//!
//! - [`ApiError`]: what the showcase service told us, one variant per
//!   status code it documents.
//! - [`EnkaError`]: everything raised by this crate: session misuse,
//!   transport failures, asset refresh and lookup failures. API failures are
//!   carried through [`EnkaError::Api`].

/// Errors reported by the showcase service through its HTTP status code.
///
/// None of these are retried; the caller decides whether to re-issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// HTTP 400.
    #[error("UID must be a string of 9 digits")]
    WrongUidFormat,

    /// HTTP 404.
    #[error("player does not exist")]
    PlayerNotFound,

    /// HTTP 424.
    #[error("game is under maintenance")]
    GameMaintenance,

    /// HTTP 429.
    #[error("rate limited")]
    RateLimited,

    /// HTTP 500.
    #[error("general server error")]
    GeneralServerError,

    /// HTTP 503.
    #[error("server overloaded")]
    ServerOverloaded,

    /// Any other non-200 status.
    #[error("unknown API error (HTTP {0})")]
    Unknown(u16),
}

impl ApiError {
    /// Map a non-200 status code to its error.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ApiError::WrongUidFormat,
            404 => ApiError::PlayerNotFound,
            424 => ApiError::GameMaintenance,
            429 => ApiError::RateLimited,
            500 => ApiError::GeneralServerError,
            503 => ApiError::ServerOverloaded,
            code => ApiError::Unknown(code),
        }
    }

    /// The status code this error was mapped from.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::WrongUidFormat => 400,
            ApiError::PlayerNotFound => 404,
            ApiError::GameMaintenance => 424,
            ApiError::RateLimited => 429,
            ApiError::GeneralServerError => 500,
            ApiError::ServerOverloaded => 503,
            ApiError::Unknown(code) => *code,
        }
    }
}

/// Enka library errors
#[derive(Debug, thiserror::Error)]
pub enum EnkaError {
    // Session errors
    #[error("client is not started, call `start` first")]
    NotStarted,

    // Transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    // Asset refresh errors
    #[error("failed to update assets, status code: {status}, url: {url}")]
    AssetUpdate { status: u16, url: String },

    #[error("failed to update assets, {url} is unreachable: {message}")]
    AssetSourceUnreachable { url: String, message: String },

    #[error("asset storage error: {0}")]
    AssetIo(String),

    // Enrichment errors
    /// The asset dataset did not load, even after a refresh.
    #[error("assets are not loaded")]
    AssetsNotReady,

    #[error("no entry '{key}' in {table} asset table")]
    MissingAsset { table: &'static str, key: String },

    #[error("malformed entry '{key}' in {table} asset table: {reason}")]
    MalformedAsset {
        table: &'static str,
        key: String,
        reason: String,
    },

    // Payload errors
    /// An equipment entry was neither a weapon nor an artifact.
    #[error("invalid item type in equipment list")]
    InvalidItemType,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Enka operations
pub type Result<T> = std::result::Result<T, EnkaError>;

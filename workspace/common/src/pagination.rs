use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Upper bound accepted for `limit` on any listing.
pub const MAX_LIMIT: u64 = 1000;

/// Largest offset the database drivers can bind (signed 64-bit).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Offset/limit pagination shared by every listing endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Number of rows to skip (default: 0)
    pub skip: Option<u64>,
    /// Maximum number of rows to return (default depends on the listing)
    #[validate(range(max = 1000))]
    pub limit: Option<u64>,
}

impl Pagination {
    /// Page size used when the caller does not pass `limit`.
    pub const DEFAULT_LIMIT: u64 = 100;

    pub fn new(skip: u64, limit: u64) -> Self {
        Self {
            skip: Some(skip),
            limit: Some(limit),
        }
    }

    /// Rows to skip, clamped to [`MAX_OFFSET`]. Any larger skip is past the
    /// end anyway and yields an empty page.
    pub fn offset(&self) -> u64 {
        self.skip.unwrap_or(0).min(MAX_OFFSET)
    }

    /// Requested limit, falling back to `default` and capped at [`MAX_LIMIT`].
    pub fn limit_or(&self, default: u64) -> u64 {
        self.limit.unwrap_or(default).min(MAX_LIMIT)
    }
}

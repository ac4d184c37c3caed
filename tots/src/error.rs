//! Error types for conversion.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors produced while converting descriptors to TypeScript.
///
/// Every variant describes a structural problem in the input type graph or
/// configuration. None of them is transient, so nothing is ever retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A field's kind has no TypeScript mapping and no `ts_type` override.
    #[error("cannot find type for {kind} ({owner}.{field})")]
    UnresolvedType {
        /// Display name of the structure owning the field.
        owner: String,
        /// Declared name of the offending field.
        field: String,
        /// The unmapped kind.
        kind: String,
    },

    /// A value passed to [`union_ts_type`](crate::union_ts_type) is neither
    /// a string nor a number.
    #[error("unsupported union value: {0}")]
    UnsupportedUnionValue(String),

    /// A requested top-level type is not a structure.
    #[error("`{0}` is not a struct type")]
    NotAStruct(String),
}

impl ConvertError {
    /// Create an unresolved type error.
    pub fn unresolved(
        owner: impl Into<String>,
        field: impl Into<String>,
        kind: impl ToString,
    ) -> Self {
        Self::UnresolvedType {
            owner: owner.into(),
            field: field.into(),
            kind: kind.to_string(),
        }
    }
}

//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Setters in the simulation clamp instead of failing, so this only covers
/// parsing at the boundary (identifiers and closed enumerations).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A string did not name a member of a closed enumeration.
    #[error("unknown {kind}: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

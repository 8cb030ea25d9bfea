//! All error types for the dispname crate.
//!
//! Resolution never fails because a name is missing from resources or
//! annotations; those cases fall through to the next tier. Errors are reserved
//! for malformed calls and for explicit satellite file I/O.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("missing member `{member}` on type `{type_name}`")]
    MissingMember { type_name: String, member: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid locale: {0}")]
    InvalidLocale(String),
}

impl Error {
    /// Creates an invalid-argument error naming the offending parameter.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Creates a missing-member error for a lookup by name on a type.
    pub fn missing_member(type_name: impl Into<String>, member: impl Into<String>) -> Self {
        Error::MissingMember {
            type_name: type_name.into(),
            member: member.into(),
        }
    }
}

/// Rejects empty or whitespace-only required strings.
pub(crate) fn require_non_blank(value: &str, parameter: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!(
            "`{parameter}` must not be empty or whitespace"
        )));
    }
    Ok(())
}

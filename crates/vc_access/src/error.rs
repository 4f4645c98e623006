use thiserror::Error;

use crate::value::Key;

// -----------------------------------------------------------------------------
// Error

/// An error returned by a [`PropertyResolver`](crate::PropertyResolver) read,
/// or by a write whose subject had the wrong shape.
///
/// Writes that simply find no way to store a value report `false` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    /// The subject is not a record or keyed container, or not a record
    /// where one is required. Always a programming error.
    #[error("the subject must be {expected}, {actual} given")]
    InvalidArgument {
        expected: &'static str,
        actual: &'static str,
    },

    /// Every read strategy was exhausted without a match.
    #[error("the property `{property}` on the {subject} was not accessible")]
    PropertyNotAccessible { property: Key, subject: &'static str },
}

impl AccessError {
    #[inline]
    pub(crate) fn invalid(expected: &'static str, actual: &'static str) -> Self {
        Self::InvalidArgument { expected, actual }
    }

    #[inline]
    pub(crate) fn not_accessible(property: &Key, subject: &'static str) -> Self {
        Self::PropertyNotAccessible {
            property: property.clone(),
            subject,
        }
    }

    /// Returns `true` for [`AccessError::PropertyNotAccessible`].
    #[inline]
    pub fn is_not_accessible(&self) -> bool {
        matches!(self, Self::PropertyNotAccessible { .. })
    }
}

use alloc::string::String;

use thiserror::Error;
use vc_access::AccessError;

// -----------------------------------------------------------------------------
// QueryError

/// An error returned while running a query operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    #[error("no operation named `{name}` is registered")]
    UnknownOperation { name: String },

    #[error("operation `{operation}` cannot evaluate the current context")]
    NotApplicable { operation: &'static str },

    #[error("operation `{operation}` requires {what}")]
    MissingArgument {
        operation: &'static str,
        what: &'static str,
    },

    #[error(transparent)]
    Access(#[from] AccessError),
}

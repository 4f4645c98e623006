//! The built-in query operations.
//!
//! | Name | Final | Effect |
//! |------|-------|--------|
//! | `first` | no | Keeps only the first element of the context. |
//! | `last` | no | Keeps only the last element of the context. |
//! | `property` | yes | Reads a property path from the first element. |

// -----------------------------------------------------------------------------
// Modules

mod edge;
mod property;

// -----------------------------------------------------------------------------
// Exports

pub use edge::{FirstOperation, LastOperation};
pub use property::PropertyOperation;

//! Static shape descriptions of record types.
//!
//! Each [`Record`](crate::Record) type returns one [`RecordInfo`], usually
//! stored in a [`RecordInfoCell`]. The resolver treats this shape as fixed for
//! the lifetime of the process, which is what makes per-type caching sound.
//!
//! - [`MemberInfo`]: a declared data member and its [`Visibility`].
//! - [`MethodInfo`]: a declared method and its [`Visibility`].

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod member_info;
mod record_info;

// -----------------------------------------------------------------------------
// Exports

pub use cell::RecordInfoCell;
pub use member_info::{MemberInfo, MethodInfo, Visibility};
pub use record_info::RecordInfo;

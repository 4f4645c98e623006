//! The introspection surface of structured records.
//!
//! A [`Record`] is any type whose members and methods can be addressed by
//! name. Its declared shape is described by a static
//! [`RecordInfo`](crate::info::RecordInfo); the trait methods perform the raw
//! operations the resolver composes into conventional access.
//!
//! Optional capabilities are declared by returning `Some` from:
//!
//! - [`Record::as_indexable`]: index reads, existence checks and index writes ([`Indexable`]).
//! - [`Record::as_enumerable`]: iteration over elements ([`Enumerable`]).
//!
//! Two records ship with the crate:
//!
//! - [`DynamicRecord`]: the plain untyped bag, members attached at run time.
//! - [`ArrayCollection`]: an indexable, enumerable list of elements.

// -----------------------------------------------------------------------------
// Modules

mod collection;
mod dynamic;

// -----------------------------------------------------------------------------
// Exports

pub use collection::ArrayCollection;
pub use dynamic::DynamicRecord;

// -----------------------------------------------------------------------------
// Record

use alloc::string::String;
use alloc::vec::Vec;
use core::any::Any;

use thiserror::Error;

use crate::info::RecordInfo;
use crate::value::{Key, Value, ValueKindError};

/// A structured value with named members and methods.
///
/// Implementations must be consistent with their [`RecordInfo`]:
/// every declared member is readable through [`Record::member`] and every
/// declared method is dispatched by [`Record::invoke`].
///
/// See [`RecordInfoCell`](crate::info::RecordInfoCell) for a complete example.
pub trait Record: Any + Send + Sync {
    /// Returns the static shape of this record's type.
    fn record_info(&self) -> &'static RecordInfo;

    /// Reads a member regardless of its visibility, declared or attached.
    fn member(&self, name: &str) -> Option<Value>;

    /// Writes a member regardless of its visibility.
    ///
    /// Records that support attached members create the member when it is
    /// not declared; others reject the write.
    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError>;

    /// Returns the names of members attached at run time, in insertion order.
    fn attached_member_names(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Calls the method `method` with `args`.
    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError>;

    fn as_indexable(&self) -> Option<&dyn Indexable> {
        None
    }

    fn as_indexable_mut(&mut self) -> Option<&mut dyn Indexable> {
        None
    }

    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        None
    }
}

impl dyn Record {
    /// Returns `true` if the underlying type is `T`.
    #[inline]
    pub fn is<T: Record>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcasts to the concrete record type.
    #[inline]
    pub fn downcast_ref<T: Record>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref()
    }

    /// Downcasts to the concrete record type.
    #[inline]
    pub fn downcast_mut<T: Record>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut()
    }

    /// Returns `true` if a member named `name` was attached at run time.
    #[inline]
    pub fn has_attached_member(&self, name: &str) -> bool {
        self.attached_member_names().iter().any(|n| *n == name)
    }
}

// -----------------------------------------------------------------------------
// Capabilities

/// Index-addressed access on a record.
pub trait Indexable {
    fn contains_key(&self, key: &Key) -> bool;

    fn get_key(&self, key: &Key) -> Option<Value>;

    /// Stores `value` under `key` without an existence check.
    ///
    /// Returns `false` if the record cannot address `key` at all.
    fn set_key(&mut self, key: Key, value: Value) -> bool;
}

/// Element iteration on a record, making it collection-like.
pub trait Enumerable {
    /// Returns the elements in iteration order.
    fn elements(&self) -> Vec<Value>;
}

// -----------------------------------------------------------------------------
// Errors

/// A raw member write failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MemberError {
    #[error("member `{member}` cannot be written on this record")]
    Rejected { member: String },

    #[error("member `{member}` has an incompatible type: {source}")]
    Mismatch {
        member: String,
        source: ValueKindError,
    },
}

impl MemberError {
    #[inline]
    pub fn rejected(member: &str) -> Self {
        Self::Rejected {
            member: member.into(),
        }
    }

    #[inline]
    pub fn mismatch(member: &str, source: ValueKindError) -> Self {
        Self::Mismatch {
            member: member.into(),
            source,
        }
    }
}

/// A method invocation failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    #[error("no method `{method}` on this record")]
    NoSuchMethod { method: String },

    #[error("method `{method}` takes {expected} argument(s), {actual} given")]
    Arity {
        method: String,
        expected: usize,
        actual: usize,
    },

    #[error("method `{method}` received a bad argument: {source}")]
    Argument {
        method: String,
        source: ValueKindError,
    },
}

impl InvokeError {
    #[inline]
    pub fn no_such_method(method: &str) -> Self {
        Self::NoSuchMethod {
            method: method.into(),
        }
    }

    #[inline]
    pub fn argument(method: &str, source: ValueKindError) -> Self {
        Self::Argument {
            method: method.into(),
            source,
        }
    }
}

/// Splits `args` into exactly `N` arguments for `method`.
///
/// # Examples
///
/// ```
/// use vc_access::Value;
/// use vc_access::record::{InvokeError, take_args};
///
/// let [a] = take_args::<1>("setTitle", vec![Value::from("x")]).unwrap();
/// assert_eq!(a, Value::from("x"));
///
/// let err = take_args::<0>("getTitle", vec![Value::Null]).unwrap_err();
/// assert!(matches!(err, InvokeError::Arity { expected: 0, actual: 1, .. }));
/// ```
pub fn take_args<const N: usize>(method: &str, args: Vec<Value>) -> Result<[Value; N], InvokeError> {
    <[Value; N]>::try_from(args).map_err(|args| InvokeError::Arity {
        method: method.into(),
        expected: N,
        actual: args.len(),
    })
}

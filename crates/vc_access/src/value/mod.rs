//! The dynamic value model that property access operates on.
//!
//! - [`Value`]: scalars, sequences ([`Value::List`]), keyed containers
//!   ([`Value::Map`]) and shared structured records ([`Value::Object`]).
//! - [`Key`]: a property name or container index.
//! - [`ObjectRef`]: a shared handle to a [`Record`](crate::Record), compared by identity.
//! - [`Subject`]: a tagged view over a value, used to dispatch resolution.

// -----------------------------------------------------------------------------
// Modules

mod key;
mod object;
mod subject;

// -----------------------------------------------------------------------------
// Exports

pub use key::Key;
pub use object::ObjectRef;
pub use subject::{Container, Subject};

// -----------------------------------------------------------------------------
// Value

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use indexmap::IndexMap;
use thiserror::Error;

use crate::Record;
use crate::hash::FixedHashState;

/// An insertion-ordered keyed container.
pub type ValueMap = IndexMap<Key, Value, FixedHashState>;

/// A dynamically typed value.
///
/// Equality is *strict*: scalars compare by value and variant
/// (`Int(1) != Float(1.0)`), objects compare by identity.
///
/// # Examples
///
/// ```
/// use vc_access::{DynamicRecord, Value};
///
/// let a = Value::object(DynamicRecord::new());
/// let b = a.clone();
///
/// assert_eq!(a, b);
/// assert_ne!(a, Value::object(DynamicRecord::new()));
/// assert_ne!(Value::Int(1), Value::Float(1.0));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(ValueMap),
    Object(ObjectRef),
}

/// A [`Value`] did not have the variant a conversion expected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("expected a {expected} value, found {actual}")]
pub struct ValueKindError {
    pub expected: &'static str,
    pub actual: &'static str,
}

impl Value {
    /// Wraps `record` into a new shared [`Value::Object`].
    #[inline]
    pub fn object<R: Record>(record: R) -> Self {
        Self::Object(ObjectRef::new(record))
    }

    /// Creates an empty [`Value::Map`].
    #[inline]
    pub fn map() -> Self {
        Self::Map(ValueMap::default())
    }

    /// Returns a short, static name of the variant.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
        }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[inline]
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    #[inline]
    pub fn as_map(&self) -> Option<&ValueMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the tagged view used for resolution dispatch.
    pub fn subject(&self) -> Subject<'_> {
        match self {
            Self::Null => Subject::Null,
            Self::List(list) => Subject::Container(Container::List(list)),
            Self::Map(map) => Subject::Container(Container::Map(map)),
            Self::Object(object) => Subject::Record(object),
            scalar => Subject::Scalar(scalar),
        }
    }

    /// Returns `true` if the value is an aggregate that is mutated element by
    /// element rather than replaced: a [`Value::List`] or an enumerable record.
    ///
    /// Keyed containers are not collection-like.
    pub fn is_collection_like(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::Object(object) => object.read().as_enumerable().is_some(),
            _ => false,
        }
    }

    /// Flattens the value into the elements it contributes to a collection.
    ///
    /// `Null` contributes nothing, lists and enumerable records their elements,
    /// maps their values, anything else itself.
    pub fn into_elements(self) -> Vec<Value> {
        match self {
            Self::Null => Vec::new(),
            Self::List(list) => list,
            Self::Map(map) => map.into_values().collect(),
            Self::Object(object) => {
                let elements = object.read().as_enumerable().map(|e| e.elements());
                match elements {
                    Some(elements) => elements,
                    None => vec![Self::Object(object)],
                }
            }
            scalar => vec![scalar],
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident $(as $cast:ty)?),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value $(as $cast)?)
                }
            }
        )*
    };
}

impl_from_scalar! {
    bool => Bool,
    i64 => Int,
    i32 => Int as i64,
    u32 => Int as i64,
    f64 => Float,
    String => Str,
    ObjectRef => Object,
    ValueMap => Map,
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    #[inline]
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

macro_rules! impl_try_from_value {
    ($($ty:ty => $variant:ident : $expected:literal),* $(,)?) => {
        $(
            impl TryFrom<Value> for $ty {
                type Error = ValueKindError;

                #[inline]
                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::$variant(inner) => Ok(inner),
                        other => Err(ValueKindError {
                            expected: $expected,
                            actual: other.kind_name(),
                        }),
                    }
                }
            }
        )*
    };
}

impl_try_from_value! {
    bool => Bool: "bool",
    i64 => Int: "int",
    f64 => Float: "float",
    String => Str: "string",
    ObjectRef => Object: "object",
}

// -----------------------------------------------------------------------------
// Tests

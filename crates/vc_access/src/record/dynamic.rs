use alloc::string::String;
use alloc::vec::Vec;

use indexmap::IndexMap;

use crate::Record;
use crate::hash::FixedHashState;
use crate::info::{RecordInfo, RecordInfoCell};
use crate::record::{InvokeError, MemberError};
use crate::value::Value;

// -----------------------------------------------------------------------------
// Dynamic Record

/// A plain untyped bag of members.
///
/// `DynamicRecord` declares no members and no methods; everything it holds
/// is attached at run time and public. Because its shape differs instance by
/// instance, the resolver never caches decisions for it.
///
/// # Examples
///
/// ```
/// use vc_access::{AccessMode, DynamicRecord, PropertyResolver, Value};
///
/// let mut bag = Value::object(DynamicRecord::new().with("name", "vc"));
/// let resolver = PropertyResolver::new();
///
/// assert_eq!(resolver.get_property(&bag, "name", AccessMode::Conventional).unwrap(), Value::from("vc"));
///
/// // Attached members are writable, unknown ones are not created.
/// assert!(resolver.set_property(&mut bag, "name", "core", AccessMode::Conventional).unwrap());
/// assert!(!resolver.set_property(&mut bag, "other", 1, AccessMode::Conventional).unwrap());
///
/// // Direct access attaches new members.
/// assert!(resolver.set_property(&mut bag, "other", 1, AccessMode::Direct).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct DynamicRecord {
    members: IndexMap<String, Value, FixedHashState>,
}

impl DynamicRecord {
    /// Creates an empty `DynamicRecord`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `name`, returning `self` for chaining.
    #[inline]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Attaches or replaces `name`, returning the previous value.
    #[inline]
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.members.insert(name.into(), value.into())
    }

    /// Detaches `name`, returning its value.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.members.shift_remove(name)
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl Record for DynamicRecord {
    fn record_info(&self) -> &'static RecordInfo {
        static CELL: RecordInfoCell = RecordInfoCell::new();
        CELL.get_or_init(|| RecordInfo::dynamic::<Self>("vc_access::record::DynamicRecord"))
    }

    #[inline]
    fn member(&self, name: &str) -> Option<Value> {
        self.members.get(name).cloned()
    }

    #[inline]
    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError> {
        self.insert(name, value);
        Ok(())
    }

    fn attached_member_names(&self) -> Vec<&str> {
        self.members.keys().map(String::as_str).collect()
    }

    #[inline]
    fn invoke(&mut self, method: &str, _: Vec<Value>) -> Result<Value, InvokeError> {
        Err(InvokeError::no_such_method(method))
    }
}

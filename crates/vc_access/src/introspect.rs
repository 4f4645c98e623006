//! Visibility-aware queries over a record's shape.
//!
//! The resolver never inspects [`RecordInfo`](crate::info::RecordInfo)
//! itself: every "is this member public" or "is this method callable"
//! question goes through an [`Introspector`]. The default
//! [`ShapeIntrospector`] answers from the declared shape plus the members
//! attached at run time.

use alloc::string::String;
use alloc::vec::Vec;

use crate::Record;

// -----------------------------------------------------------------------------
// Introspector

/// Answers visibility questions about records.
pub trait Introspector: Send + Sync {
    /// Names of the members conventional access may read directly.
    ///
    /// For plain untyped bags these are the attached members, in insertion
    /// order; for other records the declared public members.
    fn member_names(&self, record: &dyn Record) -> Vec<String>;

    /// Returns `true` if `name` is a declared public member or an attached one.
    fn has_public_member(&self, record: &dyn Record, name: &str) -> bool;

    /// Names of all callable methods, in declaration order.
    fn method_names(&self, record: &dyn Record) -> Vec<&'static str>;

    /// Returns `true` if `method` is declared and callable.
    fn is_callable(&self, record: &dyn Record, method: &str) -> bool;
}

// -----------------------------------------------------------------------------
// ShapeIntrospector

/// Reads [`RecordInfo`](crate::info::RecordInfo) and attached members.
///
/// # Examples
///
/// ```
/// use vc_access::introspect::{Introspector, ShapeIntrospector};
/// use vc_access::record::ArrayCollection;
/// use vc_access::DynamicRecord;
///
/// let shapes = ShapeIntrospector;
///
/// let collection = ArrayCollection::new();
/// assert!(shapes.is_callable(&collection, "count"));
/// assert!(!shapes.has_public_member(&collection, "elements"));
///
/// let bag = DynamicRecord::new().with("title", "x");
/// assert_eq!(shapes.member_names(&bag), ["title"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeIntrospector;

impl Introspector for ShapeIntrospector {
    fn member_names(&self, record: &dyn Record) -> Vec<String> {
        let info = record.record_info();
        if info.is_dynamic() {
            return record
                .attached_member_names()
                .into_iter()
                .map(String::from)
                .collect();
        }
        info.members()
            .iter()
            .filter(|member| member.visibility().is_public())
            .map(|member| String::from(member.name()))
            .collect()
    }

    fn has_public_member(&self, record: &dyn Record, name: &str) -> bool {
        match record.record_info().member(name) {
            Some(member) => member.visibility().is_public(),
            None => record.has_attached_member(name),
        }
    }

    fn method_names(&self, record: &dyn Record) -> Vec<&'static str> {
        record
            .record_info()
            .methods()
            .iter()
            .filter(|method| method.is_callable())
            .map(|method| method.name())
            .collect()
    }

    #[inline]
    fn is_callable(&self, record: &dyn Record, method: &str) -> bool {
        record
            .record_info()
            .method(method)
            .is_some_and(|method| method.is_callable())
    }
}

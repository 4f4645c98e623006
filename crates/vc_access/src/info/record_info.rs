use alloc::boxed::Box;
use core::any::TypeId;

use crate::Record;
use crate::hash::HashMap;
use crate::info::{MemberInfo, MethodInfo};

// -----------------------------------------------------------------------------
// RecordInfo

/// The declared shape of a record type: identity, members and methods.
///
/// A *dynamic* record (see [`RecordInfo::dynamic`]) declares nothing and
/// carries only members attached at run time, instance by instance.
///
/// # Examples
///
/// ```
/// use vc_access::info::{MemberInfo, MethodInfo, RecordInfo};
/// use vc_access::DynamicRecord;
///
/// let info = RecordInfo::new::<DynamicRecord>("app::Post")
///     .with_members([MemberInfo::public("title"), MemberInfo::private("id")])
///     .with_methods([MethodInfo::public("getId")]);
///
/// assert_eq!(info.type_name(), "Post");
/// assert!(info.member("title").is_some());
/// assert!(info.method("getId").unwrap().is_callable());
/// assert!(info.method("getTitle").is_none());
/// ```
#[derive(Debug)]
pub struct RecordInfo {
    type_id: TypeId,
    type_path: &'static str,
    dynamic: bool,
    members: Box<[MemberInfo]>,
    methods: Box<[MethodInfo]>,
    member_indices: HashMap<&'static str, usize>,
    method_indices: HashMap<&'static str, usize>,
}

impl RecordInfo {
    /// Creates the shape of record type `T` without members or methods.
    pub fn new<T: Record>(type_path: &'static str) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_path,
            dynamic: false,
            members: Box::new([]),
            methods: Box::new([]),
            member_indices: HashMap::default(),
            method_indices: HashMap::default(),
        }
    }

    /// Creates the shape of a plain untyped bag `T`.
    pub fn dynamic<T: Record>(type_path: &'static str) -> Self {
        Self {
            dynamic: true,
            ..Self::new::<T>(type_path)
        }
    }

    /// Replaces the declared members.
    pub fn with_members(mut self, members: impl IntoIterator<Item = MemberInfo>) -> Self {
        self.members = members.into_iter().collect();
        self.member_indices = self
            .members
            .iter()
            .enumerate()
            .map(|(index, member)| (member.name(), index))
            .collect();
        self
    }

    /// Replaces the declared methods.
    pub fn with_methods(mut self, methods: impl IntoIterator<Item = MethodInfo>) -> Self {
        self.methods = methods.into_iter().collect();
        self.method_indices = self
            .methods
            .iter()
            .enumerate()
            .map(|(index, method)| (method.name(), index))
            .collect();
        self
    }

    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full path, e.g. `app::model::Post`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the last path segment, e.g. `Post`.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        match self.type_path.rsplit_once("::") {
            Some((_, name)) => name,
            None => self.type_path,
        }
    }

    /// Returns `true` for plain untyped bags.
    #[inline]
    pub const fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    #[inline]
    pub fn members(&self) -> &[MemberInfo] {
        &self.members
    }

    #[inline]
    pub fn methods(&self) -> &[MethodInfo] {
        &self.methods
    }

    /// Returns the declared member named `name`, of any visibility.
    #[inline]
    pub fn member(&self, name: &str) -> Option<&MemberInfo> {
        self.member_indices.get(name).map(|&index| &self.members[index])
    }

    /// Returns the declared method named `name`, of any visibility.
    #[inline]
    pub fn method(&self, name: &str) -> Option<&MethodInfo> {
        self.method_indices.get(name).map(|&index| &self.methods[index])
    }
}

use alloc::sync::Arc;
use core::fmt;
use core::ptr;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::Record;

// -----------------------------------------------------------------------------
// ObjectRef

/// A shared, lockable handle to a structured [`Record`].
///
/// Clones share the record. Equality is identity: two handles are equal only
/// when they point at the same allocation.
///
/// Lock poisoning is ignored; a panic while a record is borrowed leaves the
/// record in whatever state the panicking code left it.
///
/// # Examples
///
/// ```
/// use vc_access::{DynamicRecord, ObjectRef, Value};
///
/// let object = ObjectRef::new(DynamicRecord::new().with("id", 7));
/// let alias = object.clone();
///
/// assert!(object.ptr_eq(&alias));
/// assert_eq!(alias.read().member("id"), Some(Value::Int(7)));
/// ```
#[derive(Clone)]
pub struct ObjectRef(Arc<RwLock<dyn Record>>);

impl ObjectRef {
    /// Moves `record` into a new shared handle.
    #[inline]
    pub fn new<R: Record>(record: R) -> Self {
        Self(Arc::new(RwLock::new(record)))
    }

    /// Locks the record for shared access.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, dyn Record> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Locks the record for exclusive access.
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, dyn Record> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns `true` if both handles point at the same record.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Runs `f` on the record if it is a `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{DynamicRecord, ObjectRef};
    ///
    /// let object = ObjectRef::new(DynamicRecord::new());
    /// assert_eq!(object.with_ref(|r: &DynamicRecord| r.len()), Some(0));
    /// ```
    pub fn with_ref<T: Record, U>(&self, f: impl FnOnce(&T) -> U) -> Option<U> {
        let guard = self.read();
        guard.downcast_ref::<T>().map(f)
    }

    /// Runs `f` on the record if it is a `T`, with exclusive access.
    pub fn with_mut<T: Record, U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U> {
        let mut guard = self.write();
        guard.downcast_mut::<T>().map(f)
    }
}

impl PartialEq for ObjectRef {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addr = Arc::as_ptr(&self.0).cast::<()>();
        // Never block: the record may be locked by the caller.
        match self.0.try_read() {
            Ok(guard) => write!(f, "ObjectRef({} @ {addr:p})", guard.record_info().type_path()),
            Err(_) => write!(f, "ObjectRef(<locked> @ {addr:p})"),
        }
    }
}

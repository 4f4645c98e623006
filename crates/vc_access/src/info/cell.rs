use std::sync::OnceLock;

use crate::info::RecordInfo;

/// Container for static storage of a record type's [`RecordInfo`].
///
/// Internally, there is an [`OnceLock<T>`], almost no additional expenses.
///
/// ## Example
///
/// ```
/// use vc_access::info::{MemberInfo, RecordInfo, RecordInfoCell};
/// use vc_access::record::{InvokeError, MemberError};
/// use vc_access::{Record, Value};
///
/// struct Point { x: i64 }
///
/// impl Record for Point {
///     fn record_info(&self) -> &'static RecordInfo {
///         static CELL: RecordInfoCell = RecordInfoCell::new();
///         CELL.get_or_init(|| {
///             RecordInfo::new::<Point>("app::Point").with_members([MemberInfo::public("x")])
///         })
///     }
///
///     fn member(&self, name: &str) -> Option<Value> {
///         (name == "x").then(|| Value::Int(self.x))
///     }
///
///     fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError> {
///         match name {
///             "x" => self.x = value.try_into().map_err(|e| MemberError::mismatch(name, e))?,
///             _ => return Err(MemberError::rejected(name)),
///         }
///         Ok(())
///     }
///
///     fn invoke(&mut self, method: &str, _: Vec<Value>) -> Result<Value, InvokeError> {
///         Err(InvokeError::no_such_method(method))
///     }
/// }
///
/// let point = Point { x: 3 };
/// assert_eq!(point.record_info().type_name(), "Point");
/// assert!(core::ptr::eq(point.record_info(), Point { x: 0 }.record_info()));
/// ```
pub struct RecordInfoCell(OnceLock<RecordInfo>);

impl RecordInfoCell {
    /// Creates an empty cell.
    #[inline]
    pub const fn new() -> Self {
        Self(OnceLock::new())
    }

    /// Returns the stored [`RecordInfo`], initializing it with `f` on first call.
    #[inline]
    pub fn get_or_init<F>(&self, f: F) -> &RecordInfo
    where
        F: FnOnce() -> RecordInfo,
    {
        self.0.get_or_init(f)
    }
}

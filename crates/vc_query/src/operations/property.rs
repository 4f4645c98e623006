use vc_access::Value;

use crate::{FlowQuery, Operation, QueryError};

// -----------------------------------------------------------------------------
// PropertyOperation

/// `property(path)`: reads a dot-separated property path from the first
/// context element.
///
/// Final; yields `Null` on an empty context or when the path does not
/// resolve.
///
/// # Examples
///
/// ```
/// use vc_access::{DynamicRecord, Value};
/// use vc_query::{FlowQuery, QueryError};
///
/// let author = Value::object(DynamicRecord::new().with("name", "Ada"));
/// let post = Value::object(DynamicRecord::new().with("author", author));
/// let mut query = FlowQuery::new(vec![post]);
///
/// assert_eq!(query.call("property", &[Value::from("author.name")]), Ok(Some(Value::from("Ada"))));
/// assert!(matches!(query.call("property", &[]), Err(QueryError::MissingArgument { .. })));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyOperation;

impl Operation for PropertyOperation {
    #[inline]
    fn short_name(&self) -> &'static str {
        "property"
    }

    #[inline]
    fn is_final(&self) -> bool {
        true
    }

    fn evaluate(&self, query: &mut FlowQuery, args: &[Value]) -> Result<Option<Value>, QueryError> {
        let path = args
            .first()
            .and_then(Value::as_str)
            .ok_or(QueryError::MissingArgument {
                operation: "property",
                what: "a property path",
            })?;

        let value = match query.context().first() {
            Some(element) => query.resolver().get_property_path(element, Some(path)),
            None => Value::Null,
        };
        Ok(Some(value))
    }
}

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use vc_access::{PropertyResolver, Value};

use crate::{OperationRegistry, QueryError};

// -----------------------------------------------------------------------------
// FlowQuery

/// An ordered result set that operations are applied to one after another.
///
/// # Examples
///
/// ```
/// use vc_access::{DynamicRecord, Value};
/// use vc_query::FlowQuery;
///
/// let posts = vec![
///     Value::object(DynamicRecord::new().with("title", "first")),
///     Value::object(DynamicRecord::new().with("title", "second")),
/// ];
///
/// let mut query = FlowQuery::new(posts);
/// query.call("last", &[]).unwrap();
/// let title = query.call("property", &[Value::from("title")]).unwrap();
///
/// assert_eq!(title, Some(Value::from("second")));
/// ```
#[derive(Debug, Clone)]
pub struct FlowQuery {
    context: Vec<Value>,
    resolver: Arc<PropertyResolver>,
    registry: Arc<OperationRegistry>,
}

impl FlowQuery {
    /// Creates a query over `context` with a fresh resolver and the default operations.
    pub fn new(context: Vec<Value>) -> Self {
        Self::with_services(
            context,
            Arc::new(PropertyResolver::new()),
            Arc::new(OperationRegistry::with_defaults()),
        )
    }

    /// Creates a query sharing an existing resolver and registry.
    #[inline]
    pub fn with_services(
        context: Vec<Value>,
        resolver: Arc<PropertyResolver>,
        registry: Arc<OperationRegistry>,
    ) -> Self {
        Self {
            context,
            resolver,
            registry,
        }
    }

    #[inline]
    pub fn context(&self) -> &[Value] {
        &self.context
    }

    #[inline]
    pub fn set_context(&mut self, context: Vec<Value>) {
        self.context = context;
    }

    /// Consumes the query, returning its context.
    #[inline]
    pub fn into_context(self) -> Vec<Value> {
        self.context
    }

    #[inline]
    pub fn resolver(&self) -> &PropertyResolver {
        &self.resolver
    }

    #[inline]
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    /// Runs the operation `name` with `args` on this query.
    ///
    /// # Errors
    ///
    /// - [`QueryError::UnknownOperation`] if no operation is registered as `name`.
    /// - [`QueryError::NotApplicable`] if it cannot evaluate the current context.
    /// - Whatever the operation itself reports.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Option<Value>, QueryError> {
        let operation = self
            .registry
            .get(name)
            .cloned()
            .ok_or_else(|| QueryError::UnknownOperation {
                name: String::from(name),
            })?;

        if !operation.can_evaluate(&self.context) {
            return Err(QueryError::NotApplicable {
                operation: operation.short_name(),
            });
        }

        log::trace!("flow query: {name} over {} element(s)", self.context.len());
        operation.evaluate(self, args)
    }
}

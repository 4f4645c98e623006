use alloc::sync::Arc;

use vc_access::Value;
use vc_access::hash::HashMap;

use crate::operations::{FirstOperation, LastOperation, PropertyOperation};
use crate::{FlowQuery, QueryError};

// -----------------------------------------------------------------------------
// Operation

/// A step of a query, addressed by its short name.
///
/// Non-final operations rewrite the query context and return `None`;
/// final operations produce a value and end the chain.
pub trait Operation: Send + Sync {
    /// The name the operation is called by, e.g. `last`.
    fn short_name(&self) -> &'static str;

    /// Returns `true` if the operation ends a query with a value.
    fn is_final(&self) -> bool {
        false
    }

    /// Returns `true` if the operation can work on `context`.
    fn can_evaluate(&self, context: &[Value]) -> bool {
        let _ = context;
        true
    }

    fn evaluate(&self, query: &mut FlowQuery, args: &[Value]) -> Result<Option<Value>, QueryError>;
}

// -----------------------------------------------------------------------------
// OperationRegistry

/// Operations by short name.
///
/// # Examples
///
/// ```
/// use vc_query::OperationRegistry;
///
/// let registry = OperationRegistry::with_defaults();
///
/// assert!(registry.get("last").is_some());
/// assert!(registry.get("property").is_some_and(|op| op.is_final()));
/// assert!(registry.get("filter").is_none());
/// ```
#[derive(Default, Clone)]
pub struct OperationRegistry {
    operations: HashMap<&'static str, Arc<dyn Operation>>,
}

impl OperationRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding `first`, `last` and `property`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FirstOperation);
        registry.register(LastOperation);
        registry.register(PropertyOperation);
        registry
    }

    /// Registers `operation` under its short name, replacing any previous one.
    pub fn register(&mut self, operation: impl Operation + 'static) {
        let name = operation.short_name();
        if self.operations.insert(name, Arc::new(operation)).is_some() {
            log::debug!("operation `{name}` replaced");
        }
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Operation>> {
        self.operations.get(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl core::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.operations.keys()).finish()
    }
}

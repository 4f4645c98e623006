use alloc::vec::Vec;

use vc_access::Value;

use crate::{FlowQuery, Operation, QueryError};

// -----------------------------------------------------------------------------
// LastOperation

/// `last`: reduces the context to its last element, or to nothing when empty.
///
/// Arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastOperation;

impl Operation for LastOperation {
    #[inline]
    fn short_name(&self) -> &'static str {
        "last"
    }

    fn evaluate(&self, query: &mut FlowQuery, _: &[Value]) -> Result<Option<Value>, QueryError> {
        let last: Vec<Value> = query.context().last().cloned().into_iter().collect();
        query.set_context(last);
        Ok(None)
    }
}

// -----------------------------------------------------------------------------
// FirstOperation

/// `first`: reduces the context to its first element, or to nothing when empty.
///
/// Arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstOperation;

impl Operation for FirstOperation {
    #[inline]
    fn short_name(&self) -> &'static str {
        "first"
    }

    fn evaluate(&self, query: &mut FlowQuery, _: &[Value]) -> Result<Option<Value>, QueryError> {
        let first: Vec<Value> = query.context().first().cloned().into_iter().collect();
        query.set_context(first);
        Ok(None)
    }
}

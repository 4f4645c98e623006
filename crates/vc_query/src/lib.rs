#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod query;
mod registry;

pub mod operations;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use error::QueryError;
pub use query::FlowQuery;
pub use registry::{Operation, OperationRegistry};

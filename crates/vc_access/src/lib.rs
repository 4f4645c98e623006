#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// std support

// The resolution caches rely on `std::sync::RwLock`.
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod cache;
pub mod config;
pub mod hash;
pub mod info;
pub mod introspect;
pub mod naming;
pub mod record;
pub mod resolver;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use config::{CachePolicy, ResolverConfig};
pub use error::AccessError;
pub use record::{DynamicRecord, Record};
pub use resolver::{AccessMode, PropertyMap, PropertyResolver};
pub use value::{Key, ObjectRef, Value};

//! Run-time configuration of a [`PropertyResolver`](crate::PropertyResolver).

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// CachePolicy

/// Whether per-type resolution decisions are remembered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Decisions are computed once per record type and kept until
    /// [`PropertyResolver::clear_cache`](crate::PropertyResolver::clear_cache).
    #[default]
    Persistent,
    /// Decisions are recomputed on every call.
    ///
    /// Useful when record shapes are assembled at run time and may change
    /// between calls.
    Disabled,
}

impl CachePolicy {
    #[inline]
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Persistent)
    }
}

// -----------------------------------------------------------------------------
// ResolverConfig

/// Settings a resolver is built with.
///
/// Missing fields take their default, so an empty document is a valid
/// configuration.
///
/// # Examples
///
/// ```
/// use vc_access::{CachePolicy, PropertyResolver, ResolverConfig};
///
/// let config = ResolverConfig { cache: CachePolicy::Disabled };
/// let resolver = PropertyResolver::with_config(config);
///
/// assert_eq!(resolver.config().cache, CachePolicy::Disabled);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub cache: CachePolicy,
}

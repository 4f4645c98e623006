//! Convention-driven property access.
//!
//! A [`PropertyResolver`] reads and writes named properties on [`Value`]s.
//! Keyed containers are addressed by key. Records are addressed through the
//! first applicable strategy:
//!
//! | Operation | Strategies, in order |
//! |-----------|----------------------|
//! | read | getter (`get`/`is`/`has`), public member, index |
//! | write | collection adder/remover, setter, index, public member |
//!
//! [`AccessMode::Direct`] skips the conventions and reads or writes the raw
//! member whatever its visibility.
//!
//! Which strategy serves a read is decided once per record type and
//! property name, then cached (see [`AccessCache`]).
//!
//! [`Value`]: crate::Value

// -----------------------------------------------------------------------------
// Modules

mod names;
mod read;
mod write;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Exports

pub use names::PropertyMap;

// -----------------------------------------------------------------------------
// PropertyResolver

use alloc::boxed::Box;
use core::any::TypeId;

use crate::cache::AccessCache;
use crate::config::ResolverConfig;
use crate::introspect::{Introspector, ShapeIntrospector};
use crate::naming::{ConventionalNaming, NamingStrategy};

/// How a record member is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AccessMode {
    /// Accessor methods first, then public members, then index access.
    #[default]
    Conventional,
    /// The raw member, bypassing accessors and visibility.
    Direct,
}

/// Reads and writes properties on dynamic values by convention.
///
/// The resolver is `Send + Sync`; share one behind an `Arc` to share its
/// caches.
///
/// # Examples
///
/// ```
/// use vc_access::{AccessMode, DynamicRecord, PropertyResolver, Value};
///
/// let resolver = PropertyResolver::new();
///
/// let author = Value::object(DynamicRecord::new().with("name", "Ada"));
/// let post = Value::object(DynamicRecord::new().with("author", author));
///
/// assert_eq!(resolver.get_property_path(&post, Some("author.name")), Value::from("Ada"));
/// assert_eq!(resolver.get_property_path(&post, Some("author.age")), Value::Null);
///
/// let mut map = Value::map();
/// assert!(resolver.set_property(&mut map, "key", 1, AccessMode::Conventional).unwrap());
/// assert_eq!(resolver.get_property(&map, "key", AccessMode::Conventional).unwrap(), Value::Int(1));
/// ```
pub struct PropertyResolver {
    config: ResolverConfig,
    naming: Box<dyn NamingStrategy>,
    introspector: Box<dyn Introspector>,
    cache: AccessCache,
}

impl PropertyResolver {
    /// Creates a resolver with [`ConventionalNaming`], [`ShapeIntrospector`]
    /// and the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::builder().build()
    }

    #[inline]
    pub fn with_config(config: ResolverConfig) -> Self {
        Self::builder().config(config).build()
    }

    #[inline]
    pub fn builder() -> ResolverBuilder {
        ResolverBuilder::default()
    }

    #[inline]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[inline]
    pub fn naming(&self) -> &dyn NamingStrategy {
        &*self.naming
    }

    #[inline]
    pub fn introspector(&self) -> &dyn Introspector {
        &*self.introspector
    }

    #[inline]
    pub fn cache(&self) -> &AccessCache {
        &self.cache
    }

    /// Forgets every cached decision.
    ///
    /// Needed only when record shapes change at run time, e.g. when a type's
    /// [`RecordInfo`](crate::info::RecordInfo) is rebuilt by a plugin reload.
    pub fn clear_cache(&self) {
        log::debug!("property resolver cache cleared");
        self.cache.clear();
    }

    /// Forgets the cached decisions about one record type.
    #[inline]
    pub fn invalidate(&self, type_id: TypeId) {
        self.cache.invalidate(type_id);
    }
}

impl Default for PropertyResolver {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for PropertyResolver {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PropertyResolver")
            .field("config", &self.config)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// ResolverBuilder

/// Assembles a [`PropertyResolver`] from its collaborators.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use vc_access::naming::{ConventionalNaming, Inflector, NamingStrategy};
/// use vc_access::{CachePolicy, PropertyResolver, ResolverConfig};
///
/// struct Keep;
///
/// impl Inflector for Keep {
///     fn singularize<'a>(&self, word: &'a str) -> Cow<'a, str> {
///         Cow::Borrowed(word)
///     }
/// }
///
/// let resolver = PropertyResolver::builder()
///     .naming(ConventionalNaming::with_inflector(Keep))
///     .config(ResolverConfig { cache: CachePolicy::Disabled })
///     .build();
///
/// assert_eq!(resolver.naming().adder_name("news"), "addNews");
/// ```
#[derive(Default)]
pub struct ResolverBuilder {
    config: ResolverConfig,
    naming: Option<Box<dyn NamingStrategy>>,
    introspector: Option<Box<dyn Introspector>>,
}

impl ResolverBuilder {
    #[inline]
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces [`ConventionalNaming`].
    #[inline]
    pub fn naming(mut self, naming: impl NamingStrategy + 'static) -> Self {
        self.naming = Some(Box::new(naming));
        self
    }

    /// Replaces [`ShapeIntrospector`].
    #[inline]
    pub fn introspector(mut self, introspector: impl Introspector + 'static) -> Self {
        self.introspector = Some(Box::new(introspector));
        self
    }

    pub fn build(self) -> PropertyResolver {
        PropertyResolver {
            cache: AccessCache::new(self.config.cache),
            config: self.config,
            naming: self
                .naming
                .unwrap_or_else(|| Box::new(ConventionalNaming::new())),
            introspector: self
                .introspector
                .unwrap_or_else(|| Box::new(ShapeIntrospector)),
        }
    }
}

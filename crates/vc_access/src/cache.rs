//! Per-type memoization of resolution decisions.
//!
//! Two tables are kept:
//!
//! - `(TypeId, property name)` → [`AccessDescriptor`]: how a conventional
//!   read of that property is served.
//! - `TypeId` → gettable property names.
//!
//! Both are `RwLock`-guarded and populated with insert-if-vacant, so two
//! threads racing on the same miss compute the same value twice and the
//! first insertion wins.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::any::TypeId;
use core::hash::{Hash, Hasher};
#[cfg(feature = "debug")]
use core::sync::atomic::{AtomicUsize, Ordering};

use std::sync::{PoisonError, RwLock};

use crate::config::CachePolicy;
use crate::hash::{Equivalent, HashMap};

// -----------------------------------------------------------------------------
// AccessDescriptor

/// How a conventional read of one property on one record type is served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDescriptor {
    /// Invoke this getter method.
    Accessor(Arc<str>),
    /// Read the public member with the property's name.
    PublicMember,
    /// Neither; fall back to index access when the record supports it.
    None,
}

// -----------------------------------------------------------------------------
// Keys

#[derive(PartialEq, Eq)]
struct DescriptorKey {
    type_id: TypeId,
    name: Box<str>,
}

/// Borrowed form of [`DescriptorKey`], so lookups do not allocate.
struct DescriptorQuery<'a> {
    type_id: TypeId,
    name: &'a str,
}

// Both forms must hash identically.
impl Hash for DescriptorKey {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.name.hash(state);
    }
}

impl Hash for DescriptorQuery<'_> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
        self.name.hash(state);
    }
}

impl Equivalent<DescriptorKey> for DescriptorQuery<'_> {
    #[inline]
    fn equivalent(&self, key: &DescriptorKey) -> bool {
        self.type_id == key.type_id && self.name == &*key.name
    }
}

// -----------------------------------------------------------------------------
// AccessCache

/// The caches owned by one [`PropertyResolver`](crate::PropertyResolver).
///
/// # Examples
///
/// ```
/// use core::any::TypeId;
/// use vc_access::cache::{AccessCache, AccessDescriptor};
/// use vc_access::CachePolicy;
///
/// let cache = AccessCache::new(CachePolicy::Persistent);
/// let id = TypeId::of::<u8>();
///
/// let first = cache.descriptor(id, "title", || AccessDescriptor::PublicMember);
/// let second = cache.descriptor(id, "title", || unreachable!());
///
/// assert_eq!(first, second);
/// assert_eq!(cache.len(), 1);
/// ```
pub struct AccessCache {
    policy: CachePolicy,
    descriptors: RwLock<HashMap<DescriptorKey, AccessDescriptor>>,
    gettable_names: RwLock<HashMap<TypeId, Arc<[String]>>>,
    #[cfg(feature = "debug")]
    stats: CacheStats,
}

impl AccessCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            descriptors: RwLock::new(HashMap::default()),
            gettable_names: RwLock::new(HashMap::default()),
            #[cfg(feature = "debug")]
            stats: CacheStats::default(),
        }
    }

    #[inline]
    pub const fn policy(&self) -> CachePolicy {
        self.policy
    }

    /// Returns the descriptor of `name` on `type_id`, computing it on a miss.
    pub fn descriptor(
        &self,
        type_id: TypeId,
        name: &str,
        compute: impl FnOnce() -> AccessDescriptor,
    ) -> AccessDescriptor {
        if !self.policy.is_enabled() {
            return compute();
        }

        let query = DescriptorQuery { type_id, name };
        {
            let descriptors = self.descriptors.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(descriptor) = descriptors.get(&query) {
                self.record_hit();
                return descriptor.clone();
            }
        }

        self.record_miss();
        let descriptor = compute();
        log::trace!("access descriptor for `{name}` on {type_id:?}: {descriptor:?}");

        let mut descriptors = self.descriptors.write().unwrap_or_else(PoisonError::into_inner);
        descriptors
            .entry(DescriptorKey {
                type_id,
                name: name.into(),
            })
            .or_insert(descriptor)
            .clone()
    }

    /// Returns the gettable property names of `type_id`, computing them on a miss.
    pub fn gettable_names(
        &self,
        type_id: TypeId,
        compute: impl FnOnce() -> Arc<[String]>,
    ) -> Arc<[String]> {
        if !self.policy.is_enabled() {
            return compute();
        }

        {
            let names = self.gettable_names.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(names) = names.get(&type_id) {
                self.record_hit();
                return names.clone();
            }
        }

        self.record_miss();
        let computed = compute();
        log::trace!("{} gettable names cached for {type_id:?}", computed.len());

        let mut names = self.gettable_names.write().unwrap_or_else(PoisonError::into_inner);
        names.entry(type_id).or_insert(computed).clone()
    }

    /// Forgets everything.
    pub fn clear(&self) {
        self.descriptors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.gettable_names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Forgets every decision made for `type_id`.
    pub fn invalidate(&self, type_id: TypeId) {
        self.descriptors
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|key, _| key.type_id != type_id);
        self.gettable_names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&type_id);
    }

    /// Number of cached descriptors.
    pub fn len(&self) -> usize {
        self.descriptors
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the hit and miss counters.
    #[cfg(feature = "debug")]
    #[cfg_attr(docsrs, doc(cfg(feature = "debug")))]
    #[inline]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    #[inline(always)]
    fn record_hit(&self) {
        #[cfg(feature = "debug")]
        self.stats.hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline(always)]
    fn record_miss(&self) {
        #[cfg(feature = "debug")]
        self.stats.misses.fetch_add(1, Ordering::Relaxed);
    }
}

impl core::fmt::Debug for AccessCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AccessCache")
            .field("policy", &self.policy)
            .field("descriptors", &self.len())
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// CacheStats

/// Hit and miss counters of an [`AccessCache`].
#[cfg(feature = "debug")]
#[cfg_attr(docsrs, doc(cfg(feature = "debug")))]
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicUsize,
    misses: AtomicUsize,
}

#[cfg(feature = "debug")]
impl CacheStats {
    #[inline]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Number of lookups that had to compute their value.
    #[inline]
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::any::TypeId;

    use super::{AccessCache, AccessDescriptor};
    use crate::config::CachePolicy;

    #[test]
    fn computed_once_per_key() {
        let cache = AccessCache::new(CachePolicy::Persistent);
        let mut calls = 0;
        for _ in 0..3 {
            cache.descriptor(TypeId::of::<u8>(), "a", || {
                calls += 1;
                AccessDescriptor::Accessor("getA".into())
            });
        }
        cache.descriptor(TypeId::of::<u16>(), "a", || {
            calls += 1;
            AccessDescriptor::None
        });
        assert_eq!(calls, 2);
        assert_eq!(cache.len(), 2);

        #[cfg(feature = "debug")]
        {
            assert_eq!(cache.stats().hits(), 2);
            assert_eq!(cache.stats().misses(), 2);
        }
    }

    #[test]
    fn invalidate_one_type() {
        let cache = AccessCache::new(CachePolicy::Persistent);
        cache.descriptor(TypeId::of::<u8>(), "a", || AccessDescriptor::None);
        cache.descriptor(TypeId::of::<u16>(), "a", || AccessDescriptor::None);
        cache.gettable_names(TypeId::of::<u8>(), || Arc::from(vec![String::from("a")]));

        cache.invalidate(TypeId::of::<u8>());
        assert_eq!(cache.len(), 1);

        let names = cache.gettable_names(TypeId::of::<u8>(), || Arc::from(Vec::<String>::new()));
        assert!(names.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn disabled_policy_never_stores() {
        let cache = AccessCache::new(CachePolicy::Disabled);
        let mut calls = 0;
        for _ in 0..2 {
            cache.descriptor(TypeId::of::<u8>(), "a", || {
                calls += 1;
                AccessDescriptor::PublicMember
            });
        }
        assert_eq!(calls, 2);
        assert!(cache.is_empty());
    }
}

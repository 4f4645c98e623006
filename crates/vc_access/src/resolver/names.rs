use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use indexmap::IndexMap;

use crate::error::AccessError;
use crate::hash::FixedHashState;
use crate::record::Record;
use crate::resolver::{AccessMode, PropertyResolver};
use crate::value::{Key, ObjectRef, Value};

/// Property names mapped to their values, in name order.
pub type PropertyMap = IndexMap<String, Value, FixedHashState>;

fn require_object(value: &Value) -> Result<&ObjectRef, AccessError> {
    value
        .as_object()
        .ok_or_else(|| AccessError::invalid("a record", value.kind_name()))
}

/// Sorts and de-duplicates.
fn into_name_set(mut names: Vec<String>) -> Vec<String> {
    names.sort_unstable();
    names.dedup();
    names
}

// -----------------------------------------------------------------------------
// Introspection

impl PropertyResolver {
    /// Returns the sorted names a conventional read can serve on `object`.
    ///
    /// The names are the public members plus every property exposed by a
    /// callable `get*`, `is*` or `has*` method. They are computed once per
    /// record type; plain untyped bags are examined on every call.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] if `object` is not a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::record::ArrayCollection;
    /// use vc_access::{PropertyResolver, Value};
    ///
    /// let resolver = PropertyResolver::new();
    /// let collection = Value::object(ArrayCollection::new());
    ///
    /// assert_eq!(*resolver.gettable_property_names(&collection).unwrap(), ["empty".to_string()]);
    /// ```
    pub fn gettable_property_names(&self, object: &Value) -> Result<Arc<[String]>, AccessError> {
        let object = require_object(object)?;
        let record = object.read();
        let info = record.record_info();

        if info.is_dynamic() {
            return Ok(self.collect_gettable_names(&*record).into());
        }
        Ok(self.cache.gettable_names(info.type_id(), || {
            self.collect_gettable_names(&*record).into()
        }))
    }

    /// Returns the sorted names a conventional write can serve on `object`:
    /// public members plus every property with a callable `set*` method.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] if `object` is not a record.
    pub fn settable_property_names(&self, object: &Value) -> Result<Vec<String>, AccessError> {
        let object = require_object(object)?;
        let record = object.read();

        let mut names = self.introspector.member_names(&*record);
        names.extend(
            self.introspector
                .method_names(&*record)
                .into_iter()
                .filter_map(|method| self.naming.property_from_setter(method)),
        );
        Ok(into_name_set(names))
    }

    /// Returns `true` if a conventional read of `name` would find a strategy,
    /// without performing it.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] if `object` is not a record.
    pub fn is_property_gettable(&self, object: &Value, name: &str) -> Result<bool, AccessError> {
        let object = require_object(object)?;
        let record = object.read();

        if let Some(indexable) = record.as_indexable()
            && indexable.contains_key(&Key::from(name))
        {
            return Ok(true);
        }
        if record.record_info().is_dynamic() && record.has_attached_member(name) {
            return Ok(true);
        }

        let has_getter = self
            .naming
            .getter_names(name)
            .iter()
            .any(|getter| self.introspector.is_callable(&*record, getter));
        Ok(has_getter || self.introspector.has_public_member(&*record, name))
    }

    /// Returns `true` if `name` is a public member or has a callable setter.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] if `object` is not a record.
    pub fn is_property_settable(&self, object: &Value, name: &str) -> Result<bool, AccessError> {
        let object = require_object(object)?;
        let record = object.read();

        if self.introspector.has_public_member(&*record, name) {
            return Ok(true);
        }
        let setter = self.naming.setter_name(name);
        Ok(self.introspector.is_callable(&*record, &setter))
    }

    /// Reads every gettable property of `object`.
    ///
    /// Listed names that turn out not to be readable are skipped.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] if `object` is not a record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{DynamicRecord, PropertyResolver, Value};
    ///
    /// let resolver = PropertyResolver::new();
    /// let bag = Value::object(DynamicRecord::new().with("b", 2).with("a", 1));
    ///
    /// let properties = resolver.gettable_properties(&bag).unwrap();
    /// assert_eq!(properties.keys().collect::<Vec<_>>(), ["a", "b"]);
    /// assert_eq!(properties["a"], Value::Int(1));
    /// ```
    pub fn gettable_properties(&self, object: &Value) -> Result<PropertyMap, AccessError> {
        let names = self.gettable_property_names(object)?;

        let mut properties = PropertyMap::default();
        for name in names.iter() {
            match self.get_property(object, name.as_str(), AccessMode::Conventional) {
                Ok(value) => {
                    properties.insert(name.clone(), value);
                }
                Err(err) => log::warn!("listed gettable property skipped: {err}"),
            }
        }
        Ok(properties)
    }

    fn collect_gettable_names(&self, record: &dyn Record) -> Vec<String> {
        let mut names = self.introspector.member_names(record);
        names.extend(
            self.introspector
                .method_names(record)
                .into_iter()
                .filter_map(|method| self.naming.property_from_getter(method)),
        );
        into_name_set(names)
    }
}

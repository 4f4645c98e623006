use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::cache::AccessDescriptor;
use crate::error::AccessError;
use crate::record::Record;
use crate::resolver::{AccessMode, PropertyResolver};
use crate::value::{Key, ObjectRef, Subject, Value};

// -----------------------------------------------------------------------------
// Read

impl PropertyResolver {
    /// Reads the property `name` of `subject`.
    ///
    /// Keyed containers return the stored value. Records are read per
    /// `mode`; see the [module documentation](crate::resolver).
    ///
    /// # Errors
    ///
    /// - [`AccessError::InvalidArgument`] if `subject` is neither a record
    ///   nor a keyed container.
    /// - [`AccessError::PropertyNotAccessible`] if no strategy finds the property.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::record::ArrayCollection;
    /// use vc_access::{AccessError, AccessMode, PropertyResolver, Value};
    ///
    /// let resolver = PropertyResolver::new();
    /// let list = Value::from(vec!["a", "b"]);
    ///
    /// assert_eq!(resolver.get_property(&list, 1u64, AccessMode::Conventional), Ok(Value::from("b")));
    /// assert!(resolver.get_property(&list, 2u64, AccessMode::Conventional).unwrap_err().is_not_accessible());
    ///
    /// // `count` is a getter-less method: not a property.
    /// let collection = Value::object(ArrayCollection::from(vec![Value::Int(1)]));
    /// assert!(resolver.get_property(&collection, "count", AccessMode::Conventional).is_err());
    ///
    /// // Index access on an indexable record.
    /// assert_eq!(resolver.get_property(&collection, "0", AccessMode::Conventional), Ok(Value::Int(1)));
    ///
    /// assert!(matches!(
    ///     resolver.get_property(&Value::Int(3), "x", AccessMode::Conventional),
    ///     Err(AccessError::InvalidArgument { .. })
    /// ));
    /// ```
    pub fn get_property(
        &self,
        subject: &Value,
        name: impl Into<Key>,
        mode: AccessMode,
    ) -> Result<Value, AccessError> {
        let name = name.into();
        match subject.subject() {
            Subject::Container(container) => container
                .get(&name)
                .cloned()
                .ok_or_else(|| AccessError::not_accessible(&name, subject.kind_name())),
            Subject::Record(object) => match mode {
                AccessMode::Conventional => self.read_conventional(object, &name),
                AccessMode::Direct => read_direct(object, &name),
            },
            Subject::Null | Subject::Scalar(_) => Err(AccessError::invalid(
                "a record or keyed container",
                subject.kind_name(),
            )),
        }
    }

    /// Follows a dot-separated property path from `subject`.
    ///
    /// Each segment is read conventionally from the previous result; a
    /// segment that spells a non-negative integer addresses an index. Any
    /// failure along the way yields [`Value::Null`]. A `None` path yields
    /// `Null` without touching `subject`.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{DynamicRecord, PropertyResolver, Value};
    ///
    /// let resolver = PropertyResolver::new();
    /// let post = Value::object(
    ///     DynamicRecord::new().with("comments", vec![Value::object(DynamicRecord::new().with("author", "Ada"))]),
    /// );
    ///
    /// assert_eq!(resolver.get_property_path(&post, Some("comments.0.author")), Value::from("Ada"));
    /// assert_eq!(resolver.get_property_path(&post, Some("comments.1.author")), Value::Null);
    /// assert_eq!(resolver.get_property_path(&post, None), Value::Null);
    /// ```
    pub fn get_property_path(&self, subject: &Value, path: Option<&str>) -> Value {
        let Some(path) = path else {
            return Value::Null;
        };

        let mut current = Cow::Borrowed(subject);
        for segment in path.split('.') {
            // Conventional reads already fall back to index access, so a miss
            // here is final for this segment.
            match self.get_property(&current, segment, AccessMode::Conventional) {
                Ok(value) => current = Cow::Owned(value),
                Err(err) => {
                    log::trace!("property path `{path}` stopped at `{segment}`: {err}");
                    return Value::Null;
                }
            }
        }
        current.into_owned()
    }

    fn read_conventional(&self, object: &ObjectRef, name: &Key) -> Result<Value, AccessError> {
        let member = name.to_name();
        let info = object.read().record_info();

        if info.is_dynamic() {
            return object
                .read()
                .member(&member)
                .ok_or_else(|| AccessError::not_accessible(name, info.type_name()));
        }

        let descriptor = self.cache.descriptor(info.type_id(), &member, || {
            self.describe_read(&*object.read(), &member)
        });

        match descriptor {
            AccessDescriptor::Accessor(getter) => {
                match object.write().invoke(&getter, Vec::new()) {
                    Ok(value) => return Ok(value),
                    Err(err) => log::warn!("getter `{getter}` of {} failed: {err}", info.type_path()),
                }
            }
            AccessDescriptor::PublicMember => {
                if let Some(value) = object.read().member(&member) {
                    return Ok(value);
                }
            }
            AccessDescriptor::None => {}
        }

        read_index(object, name).ok_or_else(|| AccessError::not_accessible(name, info.type_name()))
    }

    /// Decides how reads of `property` on records shaped like `record` are served.
    fn describe_read(&self, record: &dyn Record, property: &str) -> AccessDescriptor {
        let getter = self
            .naming
            .getter_names(property)
            .into_iter()
            .find(|getter| self.introspector.is_callable(record, getter));
        if let Some(getter) = getter {
            return AccessDescriptor::Accessor(getter.into());
        }

        // Indexable records resolve members through their index, live.
        if record.as_indexable().is_some() {
            return AccessDescriptor::None;
        }

        if self.introspector.has_public_member(record, property) {
            AccessDescriptor::PublicMember
        } else {
            AccessDescriptor::None
        }
    }
}

fn read_direct(object: &ObjectRef, name: &Key) -> Result<Value, AccessError> {
    let record = object.read();
    record
        .member(&name.to_name())
        .ok_or_else(|| AccessError::not_accessible(name, record.record_info().type_name()))
}

fn read_index(object: &ObjectRef, name: &Key) -> Option<Value> {
    let record = object.read();
    let indexable = record.as_indexable()?;
    if indexable.contains_key(name) {
        indexable.get_key(name)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec;

    use super::super::fixtures::{Post, Shelf};
    use crate::cache::AccessDescriptor;
    use crate::{AccessError, AccessMode, DynamicRecord, PropertyResolver, Value};

    const C: AccessMode = AccessMode::Conventional;
    const D: AccessMode = AccessMode::Direct;

    #[test]
    fn keyed_container() {
        let resolver = PropertyResolver::new();
        let map: Value = [("a", 1), ("2", 2)].into_iter().collect();

        assert_eq!(resolver.get_property(&map, "a", C), Ok(Value::Int(1)));
        assert_eq!(resolver.get_property(&map, 2u64, C), Ok(Value::Int(2)));
        assert_eq!(resolver.get_property(&map, "2", D), Ok(Value::Int(2)));
        assert!(resolver.get_property(&map, "b", C).unwrap_err().is_not_accessible());
    }

    #[test]
    fn scalars_and_null_are_rejected() {
        let resolver = PropertyResolver::new();
        for subject in [Value::Null, Value::from("text"), Value::Bool(true), Value::Float(1.5)] {
            assert!(matches!(
                resolver.get_property(&subject, "x", C),
                Err(AccessError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn getter_is_stable_across_cache_hits() {
        let resolver = PropertyResolver::new();
        let post = Value::object(Post::new(7, "Hello"));

        let cold = resolver.get_property(&post, "id", C);
        let warm = resolver.get_property(&post, "id", C);
        assert_eq!(cold, Ok(Value::Int(7)));
        assert_eq!(cold, warm);

        #[cfg(feature = "debug")]
        assert_eq!(resolver.cache().stats().hits(), 1);
    }

    #[test]
    fn getter_prefix_priority() {
        let resolver = PropertyResolver::new();
        let post = Value::object(Post::new(1, "x"));

        assert_eq!(resolver.get_property(&post, "published", C), Ok(Value::Bool(false)));
        assert_eq!(resolver.get_property(&post, "comments", C), Ok(Value::Bool(false)));
        assert_eq!(
            resolver.cache().descriptor(
                core::any::TypeId::of::<Post>(),
                "published",
                || unreachable!()
            ),
            AccessDescriptor::Accessor(Arc::from("isPublished"))
        );
    }

    #[test]
    fn getter_shadows_public_member() {
        let resolver = PropertyResolver::new();
        let post = Value::object(Post::new(1, "x"));

        assert_eq!(resolver.get_property(&post, "summary", C), Ok(Value::from("from getter")));
        assert_eq!(resolver.get_property(&post, "summary", D), Ok(Value::from("raw")));
    }

    #[test]
    fn visibility() {
        let resolver = PropertyResolver::new();
        let post = Value::object(Post::new(1, "Title"));

        assert_eq!(resolver.get_property(&post, "title", C), Ok(Value::from("Title")));

        // Private member with a private getter.
        let err = resolver.get_property(&post, "secret", C).unwrap_err();
        assert_eq!(
            err,
            AccessError::PropertyNotAccessible {
                property: "secret".into(),
                subject: "Post",
            }
        );
        assert_eq!(resolver.get_property(&post, "secret", D), Ok(Value::from("hidden")));

        assert!(resolver.get_property(&post, "missing", D).unwrap_err().is_not_accessible());
        assert!(resolver.get_property(&post, "missing", C).unwrap_err().is_not_accessible());
    }

    #[test]
    fn indexable_records() {
        let resolver = PropertyResolver::new();
        let shelf = Value::object(Shelf::new("top").with_slot(0u64, "book").with_slot("size", "L"));

        // Getter first, then index; public members are not consulted.
        assert_eq!(resolver.get_property(&shelf, "size", C), Ok(Value::Int(2)));
        assert_eq!(resolver.get_property(&shelf, "0", C), Ok(Value::from("book")));
        assert!(resolver.get_property(&shelf, "label", C).unwrap_err().is_not_accessible());
        assert_eq!(resolver.get_property(&shelf, "label", D), Ok(Value::from("top")));

        let labelled = Value::object(Shelf::new("top").with_slot("label", "slot"));
        assert_eq!(resolver.get_property(&labelled, "label", C), Ok(Value::from("slot")));
    }

    #[test]
    fn plain_bags_are_never_cached() {
        let resolver = PropertyResolver::new();
        let bag = Value::object(DynamicRecord::new().with("a", 1));

        assert_eq!(resolver.get_property(&bag, "a", C), Ok(Value::Int(1)));
        assert!(resolver.get_property(&bag, "b", C).unwrap_err().is_not_accessible());
        assert!(resolver.cache().is_empty());
    }

    #[test]
    fn integer_names_on_records() {
        let resolver = PropertyResolver::new();
        let mut bag = DynamicRecord::new();
        bag.insert("3", "three");
        let bag = Value::object(bag);

        assert_eq!(resolver.get_property(&bag, 3u64, C), Ok(Value::from("three")));
    }

    #[test]
    fn path_equals_chained_reads() {
        let resolver = PropertyResolver::new();
        let c = Value::object(DynamicRecord::new().with("c", 42));
        let b: Value = [("b", c)].into_iter().collect();
        let a = Value::object(DynamicRecord::new().with("a", b));

        let chained = resolver
            .get_property(&a, "a", C)
            .and_then(|v| resolver.get_property(&v, "b", C))
            .and_then(|v| resolver.get_property(&v, "c", C));
        assert_eq!(chained, Ok(Value::Int(42)));
        assert_eq!(resolver.get_property_path(&a, Some("a.b.c")), Value::Int(42));
    }

    #[test]
    fn path_degrades_to_null() {
        let resolver = PropertyResolver::new();
        let post = Value::object(Post::new(1, "Title").with_tags(["x", "y"]));

        assert_eq!(resolver.get_property_path(&post, Some("tags.1")), Value::from("y"));
        assert_eq!(resolver.get_property_path(&post, Some("title.length")), Value::Null);
        assert_eq!(resolver.get_property_path(&post, Some("secret")), Value::Null);
        assert_eq!(resolver.get_property_path(&post, Some("")), Value::Null);
        assert_eq!(resolver.get_property_path(&Value::Null, Some("a")), Value::Null);
        assert_eq!(resolver.get_property_path(&Value::Int(1), None), Value::Null);

        let list = Value::from(vec![String::from("a")]);
        assert_eq!(resolver.get_property_path(&list, Some("0")), Value::from("a"));
    }
}

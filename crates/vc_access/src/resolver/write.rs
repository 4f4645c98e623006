use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::mem;

use crate::error::AccessError;
use crate::resolver::{AccessMode, PropertyResolver};
use crate::value::{Key, ObjectRef, Value, ValueMap};

// -----------------------------------------------------------------------------
// CollectionPlan

/// The adder and remover through which a collection property is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CollectionPlan {
    add: String,
    remove: String,
}

// -----------------------------------------------------------------------------
// Write

impl PropertyResolver {
    /// Writes `value` to the property `name` of `subject`.
    ///
    /// Keyed containers always accept the write. Records are written per
    /// `mode`; see the [module documentation](crate::resolver). Returns
    /// `Ok(false)`, leaving the record unchanged, when no strategy applies.
    ///
    /// Writing a list (or `Null`) to a collection property of a record that
    /// has both `add<Singular>` and `remove<Singular>` methods replaces the
    /// collection by difference: the remover is called for every current
    /// element missing from `value`, then the adder for every element of
    /// `value` not yet present. A collection that cannot be read counts as
    /// empty. If any of these calls fails the write returns `Ok(false)`.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidArgument`] if `subject` is neither a record nor a
    /// keyed container.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_access::{AccessMode, PropertyResolver, Value};
    ///
    /// let resolver = PropertyResolver::new();
    ///
    /// let mut list = Value::from(vec!["a"]);
    /// assert!(resolver.set_property(&mut list, 0u64, "b", AccessMode::Conventional).unwrap());
    /// assert!(resolver.set_property(&mut list, 1u64, "c", AccessMode::Conventional).unwrap());
    /// assert_eq!(list, Value::from(vec!["b", "c"]));
    ///
    /// // A key past the end turns the list into a map.
    /// assert!(resolver.set_property(&mut list, "x", "d", AccessMode::Conventional).unwrap());
    /// assert_eq!(list.as_map().map(|m| m.len()), Some(3));
    ///
    /// assert!(resolver.set_property(&mut Value::Int(1), "x", 1, AccessMode::Conventional).is_err());
    /// ```
    pub fn set_property(
        &self,
        subject: &mut Value,
        name: impl Into<Key>,
        value: impl Into<Value>,
        mode: AccessMode,
    ) -> Result<bool, AccessError> {
        let name = name.into();
        let value = value.into();
        match subject {
            Value::Map(map) => {
                map.insert(name, value);
                Ok(true)
            }
            Value::List(list) => {
                match name.as_index().and_then(|index| usize::try_from(index).ok()) {
                    Some(index) if index < list.len() => list[index] = value,
                    Some(index) if index == list.len() => list.push(value),
                    _ => {
                        let mut map: ValueMap = mem::take(list)
                            .into_iter()
                            .enumerate()
                            .map(|(index, element)| (Key::from(index), element))
                            .collect();
                        map.insert(name, value);
                        *subject = Value::Map(map);
                    }
                }
                Ok(true)
            }
            Value::Object(object) => {
                let object = object.clone();
                match mode {
                    AccessMode::Conventional => self.write_conventional(&object, &name, value),
                    AccessMode::Direct => Ok(write_direct(&object, &name, value)),
                }
            }
            other => Err(AccessError::invalid(
                "a record or keyed container",
                other.kind_name(),
            )),
        }
    }

    fn write_conventional(
        &self,
        object: &ObjectRef,
        name: &Key,
        value: Value,
    ) -> Result<bool, AccessError> {
        let member = name.to_name();
        let info = object.read().record_info();

        if (value.is_null() || value.is_collection_like())
            && let Some(plan) = self.collection_plan(object, &member)
        {
            return Ok(self.replace_collection(object, name, &plan, value));
        }

        let setter = self.naming.setter_name(&member);
        if self.introspector.is_callable(&*object.read(), &setter) {
            return Ok(match object.write().invoke(&setter, vec![value]) {
                Ok(_) => true,
                Err(err) => {
                    log::debug!("setter `{setter}` of {} rejected the value: {err}", info.type_path());
                    false
                }
            });
        }

        let mut record = object.write();
        if let Some(indexable) = record.as_indexable_mut() {
            let stored = indexable.set_key(name.clone(), value);
            if !stored {
                log::debug!("{} refused the key `{name}`", info.type_path());
            }
            return Ok(stored);
        }

        if self.introspector.has_public_member(&*record, &member) {
            return Ok(match record.set_member(&member, value) {
                Ok(()) => true,
                Err(err) => {
                    log::debug!("{}: {err}", info.type_path());
                    false
                }
            });
        }

        log::debug!("no way to write `{member}` on {}", info.type_path());
        Ok(false)
    }

    /// Returns the adder and remover of `property`, if both are callable.
    fn collection_plan(&self, object: &ObjectRef, property: &str) -> Option<CollectionPlan> {
        let plan = CollectionPlan {
            add: self.naming.adder_name(property),
            remove: self.naming.remover_name(property),
        };
        let record = object.read();
        let callable = self.introspector.is_callable(&*record, &plan.add)
            && self.introspector.is_callable(&*record, &plan.remove);
        callable.then_some(plan)
    }

    /// Returns `false` if any adder or remover call failed.
    fn replace_collection(
        &self,
        object: &ObjectRef,
        name: &Key,
        plan: &CollectionPlan,
        value: Value,
    ) -> bool {
        let subject = Value::Object(object.clone());
        let current = match self.get_property(&subject, name, AccessMode::Conventional) {
            Ok(current) => current.into_elements(),
            Err(err) => {
                log::debug!("replacing `{name}` from empty: {err}");
                Vec::new()
            }
        };

        let (to_remove, to_add) = collection_delta(current, value.into_elements());
        log::trace!(
            "replacing `{name}`: {} removal(s), {} addition(s)",
            to_remove.len(),
            to_add.len()
        );

        let mut record = object.write();
        let mut complete = true;
        for (method, elements) in [(&plan.remove, to_remove), (&plan.add, to_add)] {
            for element in elements {
                if let Err(err) = record.invoke(method, vec![element]) {
                    log::warn!("`{method}` of {} failed: {err}", record.record_info().type_path());
                    complete = false;
                }
            }
        }
        complete
    }
}

fn write_direct(object: &ObjectRef, name: &Key, value: Value) -> bool {
    let mut record = object.write();
    match record.set_member(&name.to_name(), value) {
        Ok(()) => true,
        Err(err) => {
            log::debug!("{}: {err}", record.record_info().type_path());
            false
        }
    }
}

/// Splits `current` and `new` into the elements to remove and to add.
///
/// Each current element cancels the first equal, still unmatched new
/// element; current elements left without a partner are removed and new
/// elements left without one are added.
fn collection_delta(current: Vec<Value>, new: Vec<Value>) -> (Vec<Value>, Vec<Value>) {
    let mut to_add: Vec<Option<Value>> = new.into_iter().map(Some).collect();
    let mut to_remove = Vec::new();

    for element in current {
        let partner = to_add
            .iter_mut()
            .find(|candidate| matches!(candidate, Some(c) if *c == element));
        match partner {
            Some(slot) => *slot = None,
            None => to_remove.push(element),
        }
    }

    (to_remove, to_add.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::super::fixtures::{Basket, Post, Shelf};
    use super::collection_delta;
    use crate::record::ArrayCollection;
    use crate::{AccessError, AccessMode, DynamicRecord, PropertyResolver, Value};

    const C: AccessMode = AccessMode::Conventional;
    const D: AccessMode = AccessMode::Direct;

    fn calls(post: &Value) -> Vec<(&'static str, Value)> {
        post.as_object()
            .and_then(|o| o.with_ref(|p: &Post| p.calls.clone()))
            .unwrap_or_default()
    }

    #[test]
    fn delta_consumes_matches_once() {
        let v = |s: &str| Value::from(s);
        let (remove, add) = collection_delta(vec![v("a"), v("a"), v("b")], vec![v("a"), v("c")]);
        assert_eq!(remove, [v("a"), v("b")]);
        assert_eq!(add, [v("c")]);
    }

    #[test]
    fn map_writes() {
        let resolver = PropertyResolver::new();
        let mut map = Value::map();
        assert_eq!(resolver.set_property(&mut map, "a", 1, C), Ok(true));
        assert_eq!(resolver.set_property(&mut map, 5u64, 2, D), Ok(true));
        assert_eq!(resolver.get_property(&map, "5", C), Ok(Value::Int(2)));
    }

    #[test]
    fn scalars_and_null_are_rejected() {
        let resolver = PropertyResolver::new();
        for mut subject in [Value::Null, Value::from("s"), Value::Float(0.0)] {
            assert!(matches!(
                resolver.set_property(&mut subject, "x", 1, C),
                Err(AccessError::InvalidArgument { .. })
            ));
        }
    }

    #[test]
    fn collection_replaced_by_difference() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x").with_tags(["a", "b", "c"]));

        assert_eq!(resolver.set_property(&mut post, "tags", vec!["b", "c", "d"], C), Ok(true));
        assert_eq!(
            calls(&post),
            [("removeTag", Value::from("a")), ("addTag", Value::from("d"))]
        );
        assert_eq!(
            resolver.get_property(&post, "tags", C),
            Ok(Value::from(vec!["b", "c", "d"]))
        );
    }

    #[test]
    fn removals_precede_additions() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x").with_tags(["a", "b"]));

        let replacement = Value::object(ArrayCollection::from(vec![Value::from("y"), Value::from("z")]));
        assert_eq!(resolver.set_property(&mut post, "tags", replacement, C), Ok(true));

        let methods: Vec<&str> = calls(&post).into_iter().map(|(m, _)| m).collect();
        assert_eq!(methods, ["removeTag", "removeTag", "addTag", "addTag"]);
    }

    #[test]
    fn null_clears_collection() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x").with_tags(["a", "b"]));

        assert_eq!(resolver.set_property(&mut post, "tags", Value::Null, C), Ok(true));
        assert_eq!(resolver.get_property(&post, "tags", C), Ok(Value::List(vec![])));
    }

    #[test]
    fn objects_compare_by_identity() {
        let resolver = PropertyResolver::new();
        let kept = Value::object(DynamicRecord::new().with("n", 1));
        let twin = Value::object(DynamicRecord::new().with("n", 1));
        let mut post = Value::object(Post::new(1, "x").with_tags([kept.clone(), twin.clone()]));

        let lookalike = Value::object(DynamicRecord::new().with("n", 1));
        let new = Value::List(vec![kept.clone(), lookalike.clone()]);
        assert_eq!(resolver.set_property(&mut post, "tags", new, C), Ok(true));
        assert_eq!(calls(&post), [("removeTag", twin), ("addTag", lookalike)]);
    }

    #[test]
    fn scalar_value_skips_collection_methods() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x").with_tags(["a"]));

        // No `setTags`, `tags` is private and `Post` is not indexable.
        assert_eq!(resolver.set_property(&mut post, "tags", "a", C), Ok(false));
        assert!(calls(&post).is_empty());
        assert_eq!(resolver.get_property(&post, "tags", C), Ok(Value::from(vec!["a"])));
    }

    #[test]
    fn setter_then_public_member() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x"));

        assert_eq!(resolver.set_property(&mut post, "published", true, C), Ok(true));
        assert_eq!(resolver.get_property(&post, "published", C), Ok(Value::Bool(true)));

        // The setter rejects a wrongly typed argument.
        assert_eq!(resolver.set_property(&mut post, "published", "yes", C), Ok(false));

        assert_eq!(resolver.set_property(&mut post, "title", "New", C), Ok(true));
        assert_eq!(resolver.get_property(&post, "title", C), Ok(Value::from("New")));
    }

    #[test]
    fn unwritable_leaves_record_unchanged() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x"));

        assert_eq!(resolver.set_property(&mut post, "id", 2, C), Ok(false));
        assert_eq!(resolver.set_property(&mut post, "secret", "s", C), Ok(false));
        assert_eq!(resolver.set_property(&mut post, "unknown", 1, C), Ok(false));

        let post = post.as_object().and_then(|o| o.with_ref(|p: &Post| (p.id, p.secret.clone())));
        assert_eq!(post, Some((1, String::from("hidden"))));
    }

    #[test]
    fn direct_writes_bypass_visibility() {
        let resolver = PropertyResolver::new();
        let mut post = Value::object(Post::new(1, "x"));

        assert_eq!(resolver.set_property(&mut post, "secret", "s", D), Ok(true));
        assert_eq!(resolver.get_property(&post, "secret", D), Ok(Value::from("s")));

        // `Post` has no attached members; the write is rejected.
        assert_eq!(resolver.set_property(&mut post, "unknown", 1, D), Ok(false));
        assert_eq!(resolver.set_property(&mut post, "id", "text", D), Ok(false));
    }

    #[test]
    fn indexable_write_without_existence_check() {
        let resolver = PropertyResolver::new();
        let mut shelf = Value::object(Shelf::new("top"));

        assert_eq!(resolver.set_property(&mut shelf, "label", "slot", C), Ok(true));
        assert_eq!(resolver.get_property(&shelf, "label", C), Ok(Value::from("slot")));
        assert_eq!(resolver.get_property(&shelf, "label", D), Ok(Value::from("top")));
    }

    #[test]
    fn round_trip() {
        let resolver = PropertyResolver::new();
        let check = |subject: &mut Value, name: &str, value: Value| {
            assert_eq!(resolver.set_property(subject, name, value.clone(), C), Ok(true));
            assert_eq!(resolver.get_property(subject, name, C), Ok(value));
        };

        let mut bag = Value::object(DynamicRecord::new().with("a", 1));
        check(&mut bag, "a", Value::from("v"));

        let mut post = Value::object(Post::new(1, "x"));
        check(&mut post, "title", Value::from("t"));
        check(&mut post, "published", Value::Bool(true));
        check(&mut post, "tags", Value::from(vec!["p", "q"]));
    }

    #[test]
    fn unreadable_collection_starts_empty() {
        let resolver = PropertyResolver::new();
        let mut basket = Value::object(Basket::default());

        assert_eq!(resolver.set_property(&mut basket, "items", vec![1, 2], C), Ok(true));
        assert!(resolver.get_property(&basket, "items", C).is_err());
        assert_eq!(resolver.get_property(&basket, "items", D), Ok(Value::from(vec![1, 2])));
    }

    #[test]
    fn failed_adder_reports_false() {
        let resolver = PropertyResolver::new();
        let mut basket = Value::object(Basket::default());

        assert_eq!(resolver.set_property(&mut basket, "items", vec!["not-an-int"], C), Ok(false));
        assert_eq!(resolver.get_property(&basket, "items", D), Ok(Value::List(vec![])));

        // Accepted elements are still stored; the write as a whole failed.
        let mixed = Value::List(vec![Value::Int(3), Value::from("x")]);
        assert_eq!(resolver.set_property(&mut basket, "items", mixed, C), Ok(false));
        assert_eq!(resolver.get_property(&basket, "items", D), Ok(Value::from(vec![3])));
    }

    #[test]
    fn collection_refuses_named_keys() {
        let resolver = PropertyResolver::new();
        let mut collection = Value::object(ArrayCollection::from(vec![Value::from("a")]));

        assert_eq!(resolver.set_property(&mut collection, "label", "x", C), Ok(false));
        assert!(resolver.get_property(&collection, "label", C).is_err());

        assert_eq!(resolver.set_property(&mut collection, 1u64, "b", C), Ok(true));
        assert_eq!(resolver.get_property(&collection, 1u64, C), Ok(Value::from("b")));
        assert_eq!(resolver.set_property(&mut collection, 5u64, "c", C), Ok(false));
    }
}

//! Records shared by the resolver tests.

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

use crate::Record;
use crate::info::{MemberInfo, MethodInfo, RecordInfo, RecordInfoCell};
use crate::introspect::{Introspector, ShapeIntrospector};
use crate::record::{Indexable, InvokeError, MemberError, take_args};
use crate::value::{Key, Value, ValueKindError, ValueMap};

// -----------------------------------------------------------------------------
// Post

/// Accessor methods, public and private members, an add/remove collection.
#[derive(Debug, Default)]
pub(super) struct Post {
    pub id: i64,
    pub title: String,
    pub secret: String,
    /// Public, and shadowed by `getSummary`.
    pub summary: String,
    pub published: bool,
    pub tags: Vec<Value>,
    /// Adder and remover calls, in order.
    pub calls: Vec<(&'static str, Value)>,
}

impl Post {
    pub fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            title: title.into(),
            secret: "hidden".into(),
            summary: "raw".into(),
            ..Self::default()
        }
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

fn mismatch(member: &str, value: &Value, expected: &'static str) -> MemberError {
    MemberError::mismatch(
        member,
        ValueKindError {
            expected,
            actual: value.kind_name(),
        },
    )
}

impl Record for Post {
    fn record_info(&self) -> &'static RecordInfo {
        static CELL: RecordInfoCell = RecordInfoCell::new();
        CELL.get_or_init(|| {
            RecordInfo::new::<Self>("fixtures::Post")
                .with_members([
                    MemberInfo::private("id"),
                    MemberInfo::public("title"),
                    MemberInfo::private("secret"),
                    MemberInfo::public("summary"),
                    MemberInfo::protected("published"),
                    MemberInfo::private("tags"),
                ])
                .with_methods([
                    MethodInfo::public("getId"),
                    MethodInfo::public("getSummary"),
                    MethodInfo::public("isPublished"),
                    MethodInfo::public("setPublished"),
                    MethodInfo::public("hasComments"),
                    MethodInfo::public("getTags"),
                    MethodInfo::public("addTag"),
                    MethodInfo::public("removeTag"),
                    MethodInfo::private("getSecret"),
                ])
        })
    }

    fn member(&self, name: &str) -> Option<Value> {
        match name {
            "id" => Some(Value::Int(self.id)),
            "title" => Some(Value::from(self.title.as_str())),
            "secret" => Some(Value::from(self.secret.as_str())),
            "summary" => Some(Value::from(self.summary.as_str())),
            "published" => Some(Value::Bool(self.published)),
            "tags" => Some(Value::List(self.tags.clone())),
            _ => None,
        }
    }

    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError> {
        match name {
            "id" => self.id = value.try_into().map_err(|e| MemberError::mismatch(name, e))?,
            "title" => self.title = value.try_into().map_err(|e| MemberError::mismatch(name, e))?,
            "secret" => self.secret = value.try_into().map_err(|e| MemberError::mismatch(name, e))?,
            "summary" => self.summary = value.try_into().map_err(|e| MemberError::mismatch(name, e))?,
            "published" => {
                self.published = value.try_into().map_err(|e| MemberError::mismatch(name, e))?;
            }
            "tags" => match value {
                Value::List(tags) => self.tags = tags,
                other => return Err(mismatch(name, &other, "list")),
            },
            _ => return Err(MemberError::rejected(name)),
        }
        Ok(())
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError> {
        match method {
            "getId" => {
                take_args::<0>(method, args)?;
                Ok(Value::Int(self.id))
            }
            "getSummary" => {
                take_args::<0>(method, args)?;
                Ok(Value::from("from getter"))
            }
            "isPublished" => {
                take_args::<0>(method, args)?;
                Ok(Value::Bool(self.published))
            }
            "setPublished" => {
                let [published] = take_args::<1>(method, args)?;
                self.published = published
                    .try_into()
                    .map_err(|e| InvokeError::argument(method, e))?;
                Ok(Value::Null)
            }
            "hasComments" => {
                take_args::<0>(method, args)?;
                Ok(Value::Bool(false))
            }
            "getTags" => {
                take_args::<0>(method, args)?;
                Ok(Value::List(self.tags.clone()))
            }
            "addTag" => {
                let [tag] = take_args::<1>(method, args)?;
                self.calls.push(("addTag", tag.clone()));
                self.tags.push(tag);
                Ok(Value::Null)
            }
            "removeTag" => {
                let [tag] = take_args::<1>(method, args)?;
                if let Some(index) = self.tags.iter().position(|t| *t == tag) {
                    self.tags.remove(index);
                }
                self.calls.push(("removeTag", tag));
                Ok(Value::Null)
            }
            "getSecret" => {
                take_args::<0>(method, args)?;
                Ok(Value::from(self.secret.as_str()))
            }
            _ => Err(InvokeError::no_such_method(method)),
        }
    }
}

// -----------------------------------------------------------------------------
// Shelf

/// An indexable record with a public member and one getter.
#[derive(Debug, Default)]
pub(super) struct Shelf {
    pub label: String,
    pub slots: ValueMap,
}

impl Shelf {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.into(),
            slots: ValueMap::default(),
        }
    }

    pub fn with_slot(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.slots.insert(key.into(), value.into());
        self
    }
}

impl Record for Shelf {
    fn record_info(&self) -> &'static RecordInfo {
        static CELL: RecordInfoCell = RecordInfoCell::new();
        CELL.get_or_init(|| {
            RecordInfo::new::<Self>("fixtures::Shelf")
                .with_members([MemberInfo::public("label"), MemberInfo::private("slots")])
                .with_methods([MethodInfo::public("getSize")])
        })
    }

    fn member(&self, name: &str) -> Option<Value> {
        match name {
            "label" => Some(Value::from(self.label.as_str())),
            "slots" => Some(Value::Map(self.slots.clone())),
            _ => None,
        }
    }

    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError> {
        match (name, value) {
            ("label", Value::Str(label)) => self.label = label,
            ("label", other) => return Err(mismatch(name, &other, "string")),
            _ => return Err(MemberError::rejected(name)),
        }
        Ok(())
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError> {
        match method {
            "getSize" => {
                take_args::<0>(method, args)?;
                Ok(Value::Int(self.slots.len() as i64))
            }
            _ => Err(InvokeError::no_such_method(method)),
        }
    }

    fn as_indexable(&self) -> Option<&dyn Indexable> {
        Some(self)
    }

    fn as_indexable_mut(&mut self) -> Option<&mut dyn Indexable> {
        Some(self)
    }
}

impl Indexable for Shelf {
    fn contains_key(&self, key: &Key) -> bool {
        self.slots.contains_key(key)
    }

    fn get_key(&self, key: &Key) -> Option<Value> {
        self.slots.get(key).cloned()
    }

    fn set_key(&mut self, key: Key, value: Value) -> bool {
        self.slots.insert(key, value);
        true
    }
}

// -----------------------------------------------------------------------------
// Basket

/// A collection reachable only through `addItem` and `removeItem`.
/// `addItem` accepts integers only.
#[derive(Debug, Default)]
pub(super) struct Basket {
    pub items: Vec<i64>,
}

impl Record for Basket {
    fn record_info(&self) -> &'static RecordInfo {
        static CELL: RecordInfoCell = RecordInfoCell::new();
        CELL.get_or_init(|| {
            RecordInfo::new::<Self>("fixtures::Basket")
                .with_members([MemberInfo::private("items")])
                .with_methods([MethodInfo::public("addItem"), MethodInfo::public("removeItem")])
        })
    }

    fn member(&self, name: &str) -> Option<Value> {
        match name {
            "items" => Some(Value::List(self.items.iter().copied().map(Value::Int).collect())),
            _ => None,
        }
    }

    fn set_member(&mut self, name: &str, _value: Value) -> Result<(), MemberError> {
        Err(MemberError::rejected(name))
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError> {
        match method {
            "addItem" => {
                let [item] = take_args::<1>(method, args)?;
                let item: i64 = item.try_into().map_err(|e| InvokeError::argument(method, e))?;
                self.items.push(item);
                Ok(Value::Null)
            }
            "removeItem" => {
                let [item] = take_args::<1>(method, args)?;
                let item: i64 = item.try_into().map_err(|e| InvokeError::argument(method, e))?;
                self.items.retain(|&i| i != item);
                Ok(Value::Null)
            }
            _ => Err(InvokeError::no_such_method(method)),
        }
    }
}

// -----------------------------------------------------------------------------
// CountingIntrospector

/// Delegates to [`ShapeIntrospector`], counting method enumerations.
#[derive(Debug, Default, Clone)]
pub(super) struct CountingIntrospector {
    pub enumerations: Arc<AtomicUsize>,
}

impl CountingIntrospector {
    pub fn count(&self) -> usize {
        self.enumerations.load(Ordering::SeqCst)
    }
}

impl Introspector for CountingIntrospector {
    fn member_names(&self, record: &dyn Record) -> Vec<String> {
        ShapeIntrospector.member_names(record)
    }

    fn has_public_member(&self, record: &dyn Record, name: &str) -> bool {
        ShapeIntrospector.has_public_member(record, name)
    }

    fn method_names(&self, record: &dyn Record) -> Vec<&'static str> {
        self.enumerations.fetch_add(1, Ordering::SeqCst);
        ShapeIntrospector.method_names(record)
    }

    fn is_callable(&self, record: &dyn Record, method: &str) -> bool {
        ShapeIntrospector.is_callable(record, method)
    }
}

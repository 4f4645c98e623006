use alloc::vec::Vec;

use crate::Record;
use crate::info::{MemberInfo, MethodInfo, RecordInfo, RecordInfoCell};
use crate::record::{Enumerable, Indexable, InvokeError, MemberError, take_args};
use crate::value::{Key, Value, ValueKindError};

// -----------------------------------------------------------------------------
// ArrayCollection

/// An ordered collection record, indexable by position and enumerable.
///
/// Assigning a list or another collection to a property backed by an
/// `ArrayCollection` goes through the owner's adder and remover methods
/// when it has them; see
/// [`PropertyResolver::set_property`](crate::PropertyResolver::set_property).
///
/// # Methods
///
/// | Method | Arguments | Result |
/// |--------|-----------|--------|
/// | `count` | | `Int` |
/// | `isEmpty` | | `Bool` |
/// | `toArray` | | `List` |
/// | `contains` | element | `Bool` |
/// | `add` | element | `Null` |
/// | `removeElement` | element | `Bool`, whether an element was removed |
///
/// Index writes address positions only: an existing index is replaced and
/// `len` appends. Names and indices further out are refused.
#[derive(Debug, Default)]
pub struct ArrayCollection {
    elements: Vec<Value>,
}

impl ArrayCollection {
    /// Creates an empty `ArrayCollection`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn push(&mut self, element: impl Into<Value>) {
        self.elements.push(element.into());
    }

    #[inline]
    pub fn contains(&self, element: &Value) -> bool {
        self.elements.contains(element)
    }

    /// Removes the first element equal to `element`.
    pub fn remove_element(&mut self, element: &Value) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[Value] {
        &self.elements
    }

    fn index_of(&self, key: &Key) -> Option<usize> {
        let index = usize::try_from(key.as_index()?).ok()?;
        (index < self.elements.len()).then_some(index)
    }
}

impl From<Vec<Value>> for ArrayCollection {
    #[inline]
    fn from(elements: Vec<Value>) -> Self {
        Self { elements }
    }
}

impl Record for ArrayCollection {
    fn record_info(&self) -> &'static RecordInfo {
        static CELL: RecordInfoCell = RecordInfoCell::new();
        CELL.get_or_init(|| {
            RecordInfo::new::<Self>("vc_access::record::ArrayCollection")
                .with_members([MemberInfo::private("elements")])
                .with_methods([
                    MethodInfo::public("count"),
                    MethodInfo::public("isEmpty"),
                    MethodInfo::public("toArray"),
                    MethodInfo::public("contains"),
                    MethodInfo::public("add"),
                    MethodInfo::public("removeElement"),
                ])
        })
    }

    fn member(&self, name: &str) -> Option<Value> {
        match name {
            "elements" => Some(Value::List(self.elements.clone())),
            _ => None,
        }
    }

    fn set_member(&mut self, name: &str, value: Value) -> Result<(), MemberError> {
        match (name, value) {
            ("elements", Value::List(elements)) => {
                self.elements = elements;
                Ok(())
            }
            ("elements", other) => Err(MemberError::mismatch(
                name,
                ValueKindError {
                    expected: "list",
                    actual: other.kind_name(),
                },
            )),
            _ => Err(MemberError::rejected(name)),
        }
    }

    fn invoke(&mut self, method: &str, args: Vec<Value>) -> Result<Value, InvokeError> {
        match method {
            "count" => {
                take_args::<0>(method, args)?;
                Ok(Value::Int(self.elements.len() as i64))
            }
            "isEmpty" => {
                take_args::<0>(method, args)?;
                Ok(Value::Bool(self.elements.is_empty()))
            }
            "toArray" => {
                take_args::<0>(method, args)?;
                Ok(Value::List(self.elements.clone()))
            }
            "contains" => {
                let [element] = take_args::<1>(method, args)?;
                Ok(Value::Bool(self.contains(&element)))
            }
            "add" => {
                let [element] = take_args::<1>(method, args)?;
                self.elements.push(element);
                Ok(Value::Null)
            }
            "removeElement" => {
                let [element] = take_args::<1>(method, args)?;
                Ok(Value::Bool(self.remove_element(&element)))
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

    fn as_enumerable(&self) -> Option<&dyn Enumerable> {
        Some(self)
    }
}

impl Indexable for ArrayCollection {
    #[inline]
    fn contains_key(&self, key: &Key) -> bool {
        self.index_of(key).is_some()
    }

    #[inline]
    fn get_key(&self, key: &Key) -> Option<Value> {
        self.index_of(key).map(|index| self.elements[index].clone())
    }

    /// Replaces the element at an existing index or appends at `len`.
    /// Names and indices past the end are rejected.
    fn set_key(&mut self, key: Key, value: Value) -> bool {
        let len = self.elements.len();
        match key.as_index().and_then(|index| usize::try_from(index).ok()) {
            Some(index) if index < len => self.elements[index] = value,
            Some(index) if index == len => self.elements.push(value),
            _ => return false,
        }
        true
    }
}

impl Enumerable for ArrayCollection {
    #[inline]
    fn elements(&self) -> Vec<Value> {
        self.elements.clone()
    }
}

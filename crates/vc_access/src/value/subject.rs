use crate::value::{Key, ObjectRef, Value, ValueMap};

// -----------------------------------------------------------------------------
// Subject

/// A tagged view over a [`Value`], the unit of resolution dispatch.
///
/// Obtained through [`Value::subject`].
#[derive(Debug, Clone, Copy)]
pub enum Subject<'a> {
    Null,
    /// A keyed container: a map, or a list addressed by index.
    Container(Container<'a>),
    /// A structured record, possibly indexable.
    Record(&'a ObjectRef),
    /// Any other scalar.
    Scalar(&'a Value),
}

/// A keyed container borrowed from a [`Value`].
#[derive(Debug, Clone, Copy)]
pub enum Container<'a> {
    List(&'a [Value]),
    Map(&'a ValueMap),
}

impl<'a> Container<'a> {
    /// Returns the value stored under `key`.
    pub fn get(self, key: &Key) -> Option<&'a Value> {
        match self {
            Self::List(list) => {
                let index = usize::try_from(key.as_index()?).ok()?;
                list.get(index)
            }
            Self::Map(map) => map.get(key),
        }
    }

    #[inline]
    pub fn contains_key(self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(self) -> usize {
        match self {
            Self::List(list) => list.len(),
            Self::Map(map) => map.len(),
        }
    }
}

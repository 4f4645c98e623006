use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

// -----------------------------------------------------------------------------
// Key

/// A property name or container index.
///
/// Names that spell a canonical non-negative decimal integer are normalized
/// to [`Key::Index`], so `"0"` and `0` address the same slot. This is what
/// lets a path segment such as `items.0.title` index into a list.
///
/// # Examples
///
/// ```
/// use vc_access::Key;
///
/// assert_eq!(Key::from("3"), Key::Index(3));
/// assert_eq!(Key::from("03"), Key::Name("03".into()));
/// assert_eq!(Key::from("title"), Key::Name("title".into()));
/// assert_eq!(Key::Index(3).to_name(), "3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Index(u64),
    Name(String),
}

impl Key {
    /// Returns the index for [`Key::Index`].
    #[inline]
    pub const fn as_index(&self) -> Option<u64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the key as a member name; indices use their decimal form.
    #[inline]
    pub fn to_name(&self) -> Cow<'_, str> {
        match self {
            Self::Index(index) => Cow::Owned(index.to_string()),
            Self::Name(name) => Cow::Borrowed(name),
        }
    }
}

fn canonical_index(s: &str) -> Option<u64> {
    let bytes = s.as_bytes();
    match bytes {
        [] => None,
        [b'0'] => Some(0),
        [b'0', ..] => None,
        _ if bytes.iter().all(u8::is_ascii_digit) => s.parse().ok(),
        _ => None,
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_index(value) {
            Some(index) => Self::Index(index),
            None => Self::Name(value.into()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_index(&value) {
            Some(index) => Self::Index(index),
            None => Self::Name(value),
        }
    }
}

impl From<&String> for Key {
    #[inline]
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&Key> for Key {
    #[inline]
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<u64> for Key {
    #[inline]
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

impl From<usize> for Key {
    #[inline]
    fn from(value: usize) -> Self {
        Self::Index(value as u64)
    }
}

impl From<u32> for Key {
    #[inline]
    fn from(value: u32) -> Self {
        Self::Index(u64::from(value))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => fmt::Display::fmt(index, f),
            Self::Name(name) => f.write_str(name),
        }
    }
}

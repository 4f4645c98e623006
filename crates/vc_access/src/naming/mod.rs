//! Method naming conventions used to find accessors.
//!
//! The resolver never hard-codes a method name; it asks a [`NamingStrategy`]:
//!
//! | Purpose | [`ConventionalNaming`] | Example for `items` |
//! |---------|------------------------|---------------------|
//! | getters, in priority order | `get<Name>`, `is<Name>`, `has<Name>` | `getItems`, `isItems`, `hasItems` |
//! | setter | `set<Name>` | `setItems` |
//! | collection adder | `add<Singular>` | `addItem` |
//! | collection remover | `remove<Singular>` | `removeItem` |
//!
//! Singularization is delegated to an [`Inflector`].

// -----------------------------------------------------------------------------
// Modules

mod inflector;

// -----------------------------------------------------------------------------
// Exports

pub use inflector::{EnglishInflector, Inflector};

// -----------------------------------------------------------------------------
// NamingStrategy

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Derives accessor method names from property names and back.
pub trait NamingStrategy: Send + Sync {
    /// Candidate getter names, in priority order.
    fn getter_names(&self, property: &str) -> Vec<String>;

    fn setter_name(&self, property: &str) -> String;

    /// The method adding one element to the collection `property`.
    fn adder_name(&self, property: &str) -> String;

    /// The method removing one element from the collection `property`.
    fn remover_name(&self, property: &str) -> String;

    /// The property a getter-like method exposes, if `method` is one.
    fn property_from_getter(&self, method: &str) -> Option<String>;

    /// The property a setter-like method writes, if `method` is one.
    fn property_from_setter(&self, method: &str) -> Option<String>;
}

/// `get`/`is`/`has`/`set`/`add`/`remove` prefixes over an upper-cased first letter.
///
/// # Examples
///
/// ```
/// use vc_access::naming::{ConventionalNaming, NamingStrategy};
///
/// let naming = ConventionalNaming::new();
///
/// assert_eq!(naming.getter_names("active"), ["getActive", "isActive", "hasActive"]);
/// assert_eq!(naming.setter_name("title"), "setTitle");
/// assert_eq!(naming.adder_name("categories"), "addCategory");
/// assert_eq!(naming.remover_name("tags"), "removeTag");
///
/// assert_eq!(naming.property_from_getter("isPublished").as_deref(), Some("published"));
/// assert_eq!(naming.property_from_getter("get"), None);
/// assert_eq!(naming.property_from_setter("setURL").as_deref(), Some("uRL"));
/// ```
pub struct ConventionalNaming {
    inflector: Box<dyn Inflector>,
}

impl ConventionalNaming {
    /// Creates the convention with an [`EnglishInflector`].
    #[inline]
    pub fn new() -> Self {
        Self::with_inflector(EnglishInflector)
    }

    /// Creates the convention with a custom singularization.
    #[inline]
    pub fn with_inflector(inflector: impl Inflector + 'static) -> Self {
        Self {
            inflector: Box::new(inflector),
        }
    }
}

impl Default for ConventionalNaming {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl NamingStrategy for ConventionalNaming {
    fn getter_names(&self, property: &str) -> Vec<String> {
        let upper = upper_first(property);
        vec![
            prefixed("get", &upper),
            prefixed("is", &upper),
            prefixed("has", &upper),
        ]
    }

    #[inline]
    fn setter_name(&self, property: &str) -> String {
        prefixed("set", &upper_first(property))
    }

    fn adder_name(&self, property: &str) -> String {
        prefixed("add", &upper_first(&self.inflector.singularize(property)))
    }

    fn remover_name(&self, property: &str) -> String {
        prefixed("remove", &upper_first(&self.inflector.singularize(property)))
    }

    fn property_from_getter(&self, method: &str) -> Option<String> {
        ["is", "get", "has"]
            .into_iter()
            .find_map(|prefix| strip_accessor_prefix(method, prefix))
    }

    #[inline]
    fn property_from_setter(&self, method: &str) -> Option<String> {
        strip_accessor_prefix(method, "set")
    }
}

// -----------------------------------------------------------------------------
// Helpers

#[inline]
fn prefixed(prefix: &str, name: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + name.len());
    out.push_str(prefix);
    out.push_str(name);
    out
}

/// `"prefixRest"` → `"rest"`; `None` when nothing follows the prefix.
fn strip_accessor_prefix(method: &str, prefix: &str) -> Option<String> {
    match method.strip_prefix(prefix) {
        Some(rest) if !rest.is_empty() => Some(lower_first(rest)),
        _ => None,
    }
}

/// Upper-cases the first character if it is ASCII, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use vc_access::naming::upper_first;
///
/// assert_eq!(upper_first("title"), "Title");
/// assert_eq!(upper_first("éclair"), "éclair");
/// assert_eq!(upper_first(""), "");
/// ```
pub fn upper_first(s: &str) -> String {
    let mut out = String::from(s);
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    out
}

/// Lower-cases the first character if it is ASCII, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut out = String::from(s);
    if let Some(first) = out.get_mut(..1) {
        first.make_ascii_lowercase();
    }
    out
}

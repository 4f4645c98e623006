// -----------------------------------------------------------------------------
// Visibility

/// Visibility of a declared member or method.
///
/// Only [`Visibility::Public`] items take part in conventional resolution;
/// direct access ignores visibility altogether.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    #[inline]
    pub const fn is_public(self) -> bool {
        matches!(self, Self::Public)
    }
}

// -----------------------------------------------------------------------------
// MemberInfo

/// A declared data member of a record type.
///
/// # Examples
///
/// ```
/// use vc_access::info::{MemberInfo, Visibility};
///
/// let member = MemberInfo::private("secret");
/// assert_eq!(member.name(), "secret");
/// assert_eq!(member.visibility(), Visibility::Private);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberInfo {
    name: &'static str,
    visibility: Visibility,
}

impl MemberInfo {
    #[inline]
    pub const fn new(name: &'static str, visibility: Visibility) -> Self {
        Self { name, visibility }
    }

    #[inline]
    pub const fn public(name: &'static str) -> Self {
        Self::new(name, Visibility::Public)
    }

    #[inline]
    pub const fn protected(name: &'static str) -> Self {
        Self::new(name, Visibility::Protected)
    }

    #[inline]
    pub const fn private(name: &'static str) -> Self {
        Self::new(name, Visibility::Private)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }
}

// -----------------------------------------------------------------------------
// MethodInfo

/// A declared method of a record type.
///
/// A public method is *callable*: the resolver may invoke it through
/// [`Record::invoke`](crate::Record::invoke).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    name: &'static str,
    visibility: Visibility,
}

impl MethodInfo {
    #[inline]
    pub const fn new(name: &'static str, visibility: Visibility) -> Self {
        Self { name, visibility }
    }

    #[inline]
    pub const fn public(name: &'static str) -> Self {
        Self::new(name, Visibility::Public)
    }

    #[inline]
    pub const fn private(name: &'static str) -> Self {
        Self::new(name, Visibility::Private)
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub const fn is_callable(&self) -> bool {
        self.visibility.is_public()
    }
}

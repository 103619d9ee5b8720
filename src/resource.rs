//! The transferable value a [`Holder`](crate::Holder) can own.

use crate::kind::Kind;

/// A resource of a fixed [`Kind`].
///
/// `Resource` is deliberately neither `Clone` nor `Copy`. Giving one to a
/// holder moves it, so once it sits in a slot there is no other handle to it.
///
/// # Examples
///
/// ```
/// use kennel::{Kind, Resource};
///
/// let bone = Resource::new(Kind::Chicken);
/// assert_eq!(bone.kind(), Kind::Chicken);
/// assert_eq!(bone.inspect(), "Resource { kind: Chicken }");
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resource {
    kind: Kind,
}

impl Resource {
    /// Create a resource of the given kind.
    pub fn new(kind: Kind) -> Self {
        Resource { kind }
    }

    /// The kind this resource was created with.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Render the resource's fields as text.
    pub fn inspect(&self) -> String {
        format!("Resource {{ kind: {} }}", self.kind)
    }
}

impl From<Kind> for Resource {
    fn from(kind: Kind) -> Self {
        Resource::new(kind)
    }
}

//! Single-resource storage.
//!
//! A [`Slot`] is either empty or holds exactly one [`Resource`]. There is no
//! third state: [`Slot::fill`] refuses to overwrite and hands the incoming
//! resource back, and [`Slot::take`] is the only way out.

use crate::kind::Kind;
use crate::resource::Resource;

/// Storage for at most one resource.
///
/// # Examples
///
/// ```
/// use kennel::{Kind, Resource, Slot};
///
/// let mut slot = Slot::default();
/// assert!(slot.is_empty());
///
/// slot.fill(Resource::new(Kind::Chicken)).unwrap();
/// let refused = slot.fill(Resource::new(Kind::PeanutButter)).unwrap_err();
/// assert_eq!(refused.kind(), Kind::PeanutButter);
///
/// assert_eq!(slot.take().map(|r| r.kind()), Some(Kind::Chicken));
/// assert!(slot.is_empty());
/// ```
#[derive(Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    /// Nothing held.
    #[default]
    Empty,
    /// Exactly one resource held.
    Occupied(Resource),
}

impl Slot {
    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Returns true if a resource is held.
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Borrow the held resource, if any.
    pub fn held(&self) -> Option<&Resource> {
        match self {
            Slot::Empty => None,
            Slot::Occupied(resource) => Some(resource),
        }
    }

    /// Kind of the held resource, if any.
    pub fn kind(&self) -> Option<Kind> {
        self.held().map(Resource::kind)
    }

    /// Place `resource` into an empty slot.
    ///
    /// If the slot is occupied it is left untouched and `resource` is
    /// returned to the caller.
    pub fn fill(&mut self, resource: Resource) -> Result<(), Resource> {
        match self {
            Slot::Empty => {
                *self = Slot::Occupied(resource);
                Ok(())
            }
            Slot::Occupied(_) => Err(resource),
        }
    }

    /// Move the held resource out, leaving the slot empty.
    pub fn take(&mut self) -> Option<Resource> {
        match std::mem::take(self) {
            Slot::Empty => None,
            Slot::Occupied(resource) => Some(resource),
        }
    }

    /// Render the slot state as text.
    pub fn inspect(&self) -> String {
        match self {
            Slot::Empty => "Empty".to_string(),
            Slot::Occupied(resource) => format!("Occupied({})", resource.inspect()),
        }
    }
}

impl From<Option<Resource>> for Slot {
    fn from(resource: Option<Resource>) -> Self {
        match resource {
            Some(resource) => Slot::Occupied(resource),
            None => Slot::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let slot = Slot::default();
        assert!(slot.is_empty());
        assert!(!slot.is_occupied());
        assert_eq!(slot.held(), None);
        assert_eq!(slot.kind(), None);
    }

    #[test]
    fn test_fill_empty() {
        let mut slot = Slot::Empty;
        assert!(slot.fill(Resource::new(Kind::Chicken)).is_ok());
        assert_eq!(slot.kind(), Some(Kind::Chicken));
    }

    #[test]
    fn test_fill_occupied_returns_resource() {
        let mut slot = Slot::Occupied(Resource::new(Kind::BaconFlavored));

        let refused = slot.fill(Resource::new(Kind::PeanutButter));

        assert_eq!(refused, Err(Resource::new(Kind::PeanutButter)));
        assert_eq!(slot.kind(), Some(Kind::BaconFlavored));
    }

    #[test]
    fn test_take_empties() {
        let mut slot = Slot::Occupied(Resource::new(Kind::PeanutButter));

        let taken = slot.take();

        assert_eq!(taken.map(|r| r.kind()), Some(Kind::PeanutButter));
        assert!(slot.is_empty());
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_inspect() {
        assert_eq!(Slot::Empty.inspect(), "Empty");
        assert_eq!(
            Slot::Occupied(Resource::new(Kind::Chicken)).inspect(),
            "Occupied(Resource { kind: Chicken })"
        );
    }

    #[test]
    fn test_from_option() {
        assert!(Slot::from(None).is_empty());
        assert_eq!(
            Slot::from(Some(Resource::new(Kind::Chicken))).kind(),
            Some(Kind::Chicken)
        );
    }
}

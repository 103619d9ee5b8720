//! The closed set of resource kinds.

use std::fmt;

/// The flavor of a [`Resource`](crate::Resource).
///
/// The set is fixed: every resource is exactly one of these variants and
/// keeps it for its whole life.
///
/// # Examples
///
/// ```
/// use kennel::Kind;
///
/// assert_eq!(Kind::BaconFlavored.to_string(), "BaconFlavored");
/// assert_eq!(Kind::ALL.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// Bacon flavored.
    BaconFlavored,
    /// Peanut butter.
    PeanutButter,
    /// Chicken.
    Chicken,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 3] = [Kind::BaconFlavored, Kind::PeanutButter, Kind::Chicken];

    /// The variant name, as used in error details and notices.
    pub fn name(self) -> &'static str {
        match self {
            Kind::BaconFlavored => "BaconFlavored",
            Kind::PeanutButter => "PeanutButter",
            Kind::Chicken => "Chicken",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

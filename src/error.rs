//! Precondition errors
//!
//! Every fallible operation on a [`Holder`](crate::Holder) checks the state
//! of its slot first. When the check fails nothing has been mutated, and the
//! caller gets a [`PreconditionViolated`] describing which check failed and
//! which resource kind was in the way.
//!
//! A failed `acquire` additionally hands the offered resource back inside a
//! [`Rejected`], so the caller decides what happens to it.
//!
//! # Examples
//!
//! ```
//! use kennel::{Holder, Kind, PreconditionViolated, Resource};
//!
//! fn give_two(holder: &mut Holder) -> Result<(), PreconditionViolated> {
//!     holder.acquire(Resource::new(Kind::Chicken))?;
//!     holder.acquire(Resource::new(Kind::PeanutButter))?;
//!     Ok(())
//! }
//!
//! let mut holder = Holder::new(3);
//! let err = give_two(&mut holder).unwrap_err();
//! assert_eq!(err.details(), "already holds a resource (Chicken)");
//! ```

use std::error::Error as StdError;
use std::fmt;

use crate::kind::Kind;
use crate::resource::Resource;

/// A required slot state did not hold.
///
/// The only error kind in this crate. It carries a single human-readable
/// message and no recovery state.
///
/// # Examples
///
/// ```
/// use kennel::{Kind, PreconditionViolated};
///
/// let err = PreconditionViolated::blocked_by(Kind::BaconFlavored);
/// assert_eq!(err.to_string(), "action blocked by held resource (BaconFlavored)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionViolated {
    details: String,
}

impl PreconditionViolated {
    /// Create an error with arbitrary details.
    pub fn new(details: impl Into<String>) -> Self {
        PreconditionViolated {
            details: details.into(),
        }
    }

    /// An acquire was attempted while `held` occupied the slot.
    pub fn already_holds(held: Kind) -> Self {
        Self::new(format!("already holds a resource ({})", held))
    }

    /// A gated action was attempted while `held` occupied the slot.
    pub fn blocked_by(held: Kind) -> Self {
        Self::new(format!("action blocked by held resource ({})", held))
    }

    /// A release was attempted on an empty slot.
    pub fn nothing_held() -> Self {
        Self::new("no resource held")
    }

    /// The message describing the failed precondition.
    pub fn details(&self) -> &str {
        &self.details
    }
}

impl fmt::Display for PreconditionViolated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details)
    }
}

impl StdError for PreconditionViolated {}

/// A failed acquire: the error plus the resource that was offered.
///
/// The holder never keeps or drops a resource it refused. Use
/// [`into_resource`](Rejected::into_resource) to get it back, or convert into
/// [`PreconditionViolated`] (for example with `?`) to drop it explicitly.
///
/// # Examples
///
/// ```
/// use kennel::{Holder, Kind, Resource};
///
/// let mut holder = Holder::new(1);
/// holder.acquire(Resource::new(Kind::BaconFlavored)).unwrap();
///
/// let rejected = holder.acquire(Resource::new(Kind::Chicken)).unwrap_err();
/// assert_eq!(rejected.details(), "already holds a resource (BaconFlavored)");
///
/// let returned = rejected.into_resource();
/// assert_eq!(returned.kind(), Kind::Chicken);
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct Rejected {
    error: PreconditionViolated,
    resource: Resource,
}

impl Rejected {
    /// Pair an error with the resource being handed back.
    pub fn new(error: PreconditionViolated, resource: Resource) -> Self {
        Rejected { error, resource }
    }

    /// The underlying error.
    pub fn error(&self) -> &PreconditionViolated {
        &self.error
    }

    /// Shorthand for `self.error().details()`.
    pub fn details(&self) -> &str {
        self.error.details()
    }

    /// The resource that was refused.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// Take the refused resource back, discarding the error.
    pub fn into_resource(self) -> Resource {
        self.resource
    }

    /// Split into the error and the refused resource.
    pub fn into_parts(self) -> (PreconditionViolated, Resource) {
        (self.error, self.resource)
    }
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl StdError for Rejected {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}

impl From<Rejected> for PreconditionViolated {
    fn from(rejected: Rejected) -> Self {
        rejected.error
    }
}

//! The single-slot holder and its fallible operations.
//!
//! A [`Holder`] has an age and one [`Slot`]. Every operation that depends on
//! the slot checks it first and returns an error without touching anything
//! when the check fails:
//!
//! | operation        | slot empty              | slot occupied             |
//! |------------------|-------------------------|---------------------------|
//! | `acquire(r)`     | `r` moves in            | fails, `r` handed back    |
//! | `gated_action()` | runs                    | fails                     |
//! | `release()`      | fails                   | resource moves out        |
//!
//! `increment_age` never fails.

use std::fmt;

use crate::error::{PreconditionViolated, Rejected};
use crate::kind::Kind;
use crate::notify::{LogNotifier, Notice, Notify};
use crate::resource::Resource;
use crate::slot::Slot;

/// An entity that may hold at most one [`Resource`].
///
/// Successful operations report a [`Notice`] to the holder's notifier `N`;
/// by default that is [`LogNotifier`].
///
/// # Examples
///
/// ```
/// use kennel::{Holder, Kind, Resource};
///
/// let mut dog = Holder::new(8);
/// dog.increment_age();
/// assert_eq!(dog.age(), 9);
///
/// dog.gated_action().unwrap();
///
/// dog.acquire(Resource::new(Kind::BaconFlavored)).unwrap();
/// assert!(dog.holds(Kind::BaconFlavored));
///
/// let refused = dog.acquire(Resource::new(Kind::PeanutButter)).unwrap_err();
/// assert!(refused.details().contains("BaconFlavored"));
///
/// let blocked = dog.gated_action().unwrap_err();
/// assert!(blocked.details().contains("BaconFlavored"));
/// ```
pub struct Holder<N = LogNotifier> {
    age: u32,
    slot: Slot,
    notifier: N,
}

impl Holder {
    /// Create a holder with an empty slot that logs its notices.
    pub fn new(age: u32) -> Self {
        Holder::with_notifier(age, LogNotifier)
    }
}

impl<N: Notify> Holder<N> {
    /// Create a holder with an empty slot and a custom notifier.
    pub fn with_notifier(age: u32, notifier: N) -> Self {
        Holder {
            age,
            slot: Slot::Empty,
            notifier,
        }
    }

    /// Current age.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Current slot state.
    pub fn slot(&self) -> &Slot {
        &self.slot
    }

    /// The held resource, if any.
    pub fn held(&self) -> Option<&Resource> {
        self.slot.held()
    }

    /// Returns true if nothing is held.
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    /// Returns true if a resource of `kind` is held.
    pub fn holds(&self, kind: Kind) -> bool {
        self.slot.kind() == Some(kind)
    }

    /// The notifier notices are sent to.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Increase the age by one.
    ///
    /// Saturates at `u32::MAX`.
    pub fn increment_age(&mut self) {
        self.age = self.age.saturating_add(1);
        self.notifier.notify(&Notice::AgeIncremented { age: self.age });
    }

    /// Take ownership of `resource`.
    ///
    /// Fails if a resource is already held. The slot is left as it was and
    /// `resource` comes back inside the [`Rejected`].
    ///
    /// # Examples
    ///
    /// ```
    /// use kennel::{Holder, Kind, Resource};
    ///
    /// let mut holder = Holder::with_notifier(0, ());
    /// holder.acquire(Resource::new(Kind::Chicken)).unwrap();
    ///
    /// let rejected = holder.acquire(Resource::new(Kind::BaconFlavored)).unwrap_err();
    /// assert_eq!(rejected.details(), "already holds a resource (Chicken)");
    /// assert_eq!(rejected.into_resource().kind(), Kind::BaconFlavored);
    /// assert!(holder.holds(Kind::Chicken));
    /// ```
    pub fn acquire(&mut self, resource: Resource) -> Result<(), Rejected> {
        if let Some(held) = self.slot.kind() {
            return Err(Rejected::new(
                self.refuse(PreconditionViolated::already_holds(held)),
                resource,
            ));
        }

        let kind = resource.kind();
        self.slot = Slot::Occupied(resource);
        self.notifier.notify(&Notice::Acquired { kind });
        Ok(())
    }

    /// Perform the action that requires an empty slot.
    ///
    /// Never changes state, so calling it repeatedly on an empty holder
    /// succeeds every time.
    pub fn gated_action(&self) -> Result<(), PreconditionViolated> {
        if let Some(held) = self.slot.kind() {
            return Err(self.refuse(PreconditionViolated::blocked_by(held)));
        }

        self.notifier.notify(&Notice::ActionPerformed);
        Ok(())
    }

    /// Give up the held resource.
    ///
    /// Fails if nothing is held.
    ///
    /// # Examples
    ///
    /// ```
    /// use kennel::{Holder, Kind, Resource};
    ///
    /// let mut holder = Holder::with_notifier(4, ());
    /// assert!(holder.release().is_err());
    ///
    /// holder.acquire(Resource::new(Kind::PeanutButter)).unwrap();
    /// let bone = holder.release().unwrap();
    /// assert_eq!(bone.kind(), Kind::PeanutButter);
    /// assert!(holder.is_empty());
    /// ```
    pub fn release(&mut self) -> Result<Resource, PreconditionViolated> {
        let resource = self
            .slot
            .take()
            .ok_or_else(|| self.refuse(PreconditionViolated::nothing_held()))?;

        self.notifier.notify(&Notice::Released {
            kind: resource.kind(),
        });
        Ok(resource)
    }

    /// Render age and slot state as text.
    ///
    /// ```
    /// use kennel::{Holder, Kind, Resource};
    ///
    /// let mut holder = Holder::with_notifier(9, ());
    /// assert_eq!(holder.inspect(), "Holder { age: 9, slot: Empty }");
    ///
    /// holder.acquire(Resource::new(Kind::BaconFlavored)).unwrap();
    /// assert_eq!(
    ///     holder.inspect(),
    ///     "Holder { age: 9, slot: Occupied(Resource { kind: BaconFlavored }) }"
    /// );
    /// ```
    pub fn inspect(&self) -> String {
        format!("Holder {{ age: {}, slot: {} }}", self.age, self.slot.inspect())
    }

    /// Fill the slot without emitting a notice.
    #[cfg(feature = "serde")]
    pub(crate) fn place(&mut self, resource: Resource) -> Result<(), Resource> {
        self.slot.fill(resource)
    }

    fn refuse(&self, err: PreconditionViolated) -> PreconditionViolated {
        #[cfg(feature = "tracing")]
        tracing::debug!(age = self.age, "{}", err);
        err
    }
}

impl<N> fmt::Debug for Holder<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Holder")
            .field("age", &self.age)
            .field("slot", &self.slot)
            .finish_non_exhaustive()
    }
}

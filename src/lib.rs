//! # Kennel
//!
//! One holder, one slot, one resource.
//!
//! A Rust library for single-slot ownership with validated, fallible
//! transfers.
//!
//! ## Model
//!
//! - A [`Resource`] is an immutable value of a fixed [`Kind`]. It is moved,
//!   never copied.
//! - A [`Holder`] has an age and a [`Slot`] that is either empty or holds
//!   exactly one resource.
//! - Operations that depend on the slot check it first. On failure nothing is
//!   mutated and the caller receives a [`PreconditionViolated`] naming the
//!   resource kind that was in the way.
//!
//! ## Quick Example
//!
//! ```rust
//! use kennel::{Holder, Kind, PreconditionViolated, Resource};
//!
//! fn play(dog: &mut Holder) -> Result<(), PreconditionViolated> {
//!     dog.increment_age();
//!     dog.gated_action()?;
//!
//!     dog.acquire(Resource::new(Kind::BaconFlavored))?;
//!
//!     // The dog already has a bone; the second one comes back to us.
//!     let refused = dog.acquire(Resource::new(Kind::PeanutButter)).unwrap_err();
//!     assert_eq!(refused.into_resource().kind(), Kind::PeanutButter);
//!
//!     dog.gated_action()
//! }
//!
//! let mut dog = Holder::new(8);
//! let err = play(&mut dog).unwrap_err();
//!
//! assert_eq!(dog.age(), 9);
//! assert_eq!(err.to_string(), "action blocked by held resource (BaconFlavored)");
//! ```
//!
//! ## Features
//!
//! - `tracing` (default): notices from [`LogNotifier`] become `tracing` events
//! - `serde`: `Serialize`/`Deserialize` for [`Kind`], [`Resource`], [`Slot`]
//!   and [`Holder`]
//! - `proptest`: `Arbitrary` for [`Kind`] and [`Resource`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod holder;
pub mod kind;
pub mod notify;
pub mod resource;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod slot;
pub mod testing;

// Re-exports
pub use error::{PreconditionViolated, Rejected};
pub use holder::Holder;
pub use kind::Kind;
pub use notify::{LogNotifier, Notice, Notify};
pub use resource::Resource;
pub use slot::Slot;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{PreconditionViolated, Rejected};
    pub use crate::holder::Holder;
    pub use crate::kind::Kind;
    pub use crate::notify::{LogNotifier, Notice, Notify};
    pub use crate::resource::Resource;
    pub use crate::slot::Slot;
}

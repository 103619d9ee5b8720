//! Testing utilities and helpers for kennel
//!
//! This module provides a recording notifier, assertion macros for holder
//! state, and property-based testing support.
//!
//! # Examples
//!
//! ## Recorder
//!
//! ```rust
//! use kennel::testing::Recorder;
//! use kennel::{Holder, Notice};
//!
//! let recorder = Recorder::new();
//! let mut holder = Holder::with_notifier(1, recorder.clone());
//! holder.increment_age();
//!
//! assert_eq!(recorder.notices(), vec![Notice::AgeIncremented { age: 2 }]);
//! ```
//!
//! ## Assertion Macros
//!
//! ```rust
//! use kennel::{assert_empty, assert_holds, assert_violation};
//! use kennel::{Holder, Kind, Resource};
//!
//! let mut holder = Holder::with_notifier(1, ());
//! assert_empty!(holder);
//!
//! holder.acquire(Resource::new(Kind::Chicken)).unwrap();
//! assert_holds!(holder, Kind::Chicken);
//! assert_violation!(holder.gated_action(), "Chicken");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::notify::{Notice, Notify};

/// Notifier that keeps every notice it receives.
///
/// Clones share the same buffer, so keep one clone and hand the other to the
/// holder.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    /// Number of notices received so far.
    pub fn len(&self) -> usize {
        self.notices.borrow().len()
    }

    /// Returns true if nothing has been received.
    pub fn is_empty(&self) -> bool {
        self.notices.borrow().is_empty()
    }

    /// Drop everything received so far.
    pub fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl Notify for Recorder {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Assert that a holder holds a resource of the given kind.
///
/// # Example
///
/// ```rust
/// use kennel::{assert_holds, Holder, Kind, Resource};
///
/// let mut holder = Holder::with_notifier(1, ());
/// holder.acquire(Resource::new(Kind::PeanutButter)).unwrap();
/// assert_holds!(holder, Kind::PeanutButter);
/// ```
#[macro_export]
macro_rules! assert_holds {
    ($holder:expr, $kind:expr) => {
        let expected: $crate::Kind = $kind;
        match $holder.held() {
            Some(resource) if resource.kind() == expected => {}
            Some(resource) => {
                panic!(
                    "Expected holder to hold {}, holds {}",
                    expected,
                    resource.kind()
                );
            }
            None => {
                panic!("Expected holder to hold {}, slot is empty", expected);
            }
        }
    };
}

/// Assert that a holder's slot is empty.
///
/// # Example
///
/// ```rust
/// use kennel::{assert_empty, Holder};
///
/// let holder = Holder::with_notifier(1, ());
/// assert_empty!(holder);
/// ```
#[macro_export]
macro_rules! assert_empty {
    ($holder:expr) => {
        if let Some(resource) = $holder.held() {
            panic!("Expected empty slot, holds {}", resource.kind());
        }
    };
}

/// Assert that an operation failed with details mentioning `needle`.
///
/// Works with any `Result` whose error implements `Display`, which covers
/// both [`PreconditionViolated`](crate::PreconditionViolated) and
/// [`Rejected`](crate::Rejected).
///
/// # Example
///
/// ```rust
/// use kennel::{assert_violation, Holder};
///
/// let mut holder = Holder::with_notifier(1, ());
/// assert_violation!(holder.release(), "no resource held");
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($result:expr, $needle:expr) => {
        match $result {
            Err(err) => {
                let details = err.to_string();
                assert!(
                    details.contains($needle),
                    "Expected violation mentioning {:?}, got {:?}",
                    $needle,
                    details
                );
            }
            Ok(value) => {
                panic!("Expected violation, got Ok({:?})", value);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Kind {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        proptest::sample::select(crate::Kind::ALL.to_vec()).boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for crate::Resource {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        any::<crate::Kind>().prop_map(crate::Resource::new).boxed()
    }
}

//! Notifications emitted by a [`Holder`](crate::Holder).
//!
//! Successful operations produce a [`Notice`]. Notices are an observable side
//! effect, never part of an operation's return value. Where they go is up to
//! the [`Notify`] implementation the holder was built with:
//!
//! - [`LogNotifier`] (the default) emits `tracing` events, or prints to stdout
//!   when the `tracing` feature is disabled
//! - `()` discards everything
//! - any `Fn(&Notice)` closure
//! - [`Recorder`](crate::testing::Recorder) collects notices for assertions
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use kennel::{Holder, Notice};
//!
//! let seen = RefCell::new(Vec::new());
//! let mut holder = Holder::with_notifier(2, |n: &Notice| seen.borrow_mut().push(n.clone()));
//!
//! holder.increment_age();
//! drop(holder);
//!
//! assert_eq!(seen.into_inner(), vec![Notice::AgeIncremented { age: 3 }]);
//! ```

use std::fmt;

use crate::kind::Kind;

/// Something a holder did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The age went up; carries the new age.
    AgeIncremented {
        /// Age after the increment.
        age: u32,
    },
    /// A resource was placed into the slot.
    Acquired {
        /// Kind of the acquired resource.
        kind: Kind,
    },
    /// The gated action ran.
    ActionPerformed,
    /// A resource was moved out of the slot.
    Released {
        /// Kind of the released resource.
        kind: Kind,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AgeIncremented { age } => write!(f, "age is now {}", age),
            Notice::Acquired { kind } => write!(f, "acquired a {} resource", kind),
            Notice::ActionPerformed => f.write_str("performed the gated action"),
            Notice::Released { kind } => write!(f, "released a {} resource", kind),
        }
    }
}

/// Receives notices from a holder.
pub trait Notify {
    /// Handle one notice.
    fn notify(&self, notice: &Notice);
}

impl Notify for () {
    fn notify(&self, _notice: &Notice) {}
}

impl<F> Notify for F
where
    F: Fn(&Notice),
{
    fn notify(&self, notice: &Notice) {
        self(notice)
    }
}

/// Default notifier: structured `tracing` events, stdout without the feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notify for LogNotifier {
    #[cfg(feature = "tracing")]
    fn notify(&self, notice: &Notice) {
        match notice {
            Notice::AgeIncremented { age } => tracing::info!(age, "{}", notice),
            Notice::Acquired { kind } => tracing::info!(kind = %kind, "{}", notice),
            Notice::ActionPerformed => tracing::info!("{}", notice),
            Notice::Released { kind } => tracing::info!(kind = %kind, "{}", notice),
        }
    }

    #[cfg(not(feature = "tracing"))]
    fn notify(&self, notice: &Notice) {
        println!("{}", notice);
    }
}

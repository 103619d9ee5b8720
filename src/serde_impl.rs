//! Serde support for [`Holder`].
//!
//! This module provides `Serialize` and `Deserialize` implementations for
//! [`Holder<N>`] when the `serde` feature is enabled. Only the age and the
//! slot are written; the notifier is not data and is rebuilt from
//! `N::default()` on the way back in.
//!
//! # Example
//!
//! ```rust
//! use kennel::{Holder, Kind, Resource};
//!
//! let mut holder = Holder::with_notifier(9, ());
//! holder.acquire(Resource::new(Kind::BaconFlavored)).unwrap();
//!
//! let json = serde_json::to_string(&holder).unwrap();
//! assert_eq!(json, r#"{"age":9,"slot":{"Occupied":{"kind":"BaconFlavored"}}}"#);
//!
//! let back: Holder<()> = serde_json::from_str(&json).unwrap();
//! assert!(back.holds(Kind::BaconFlavored));
//! ```

use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::holder::Holder;
use crate::notify::Notify;
use crate::slot::Slot;

impl<N: Notify> Serialize for Holder<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Holder", 2)?;
        state.serialize_field("age", &self.age())?;
        state.serialize_field("slot", self.slot())?;
        state.end()
    }
}

impl<'de, N> Deserialize<'de> for Holder<N>
where
    N: Notify + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Parts {
            age: u32,
            #[serde(default)]
            slot: Slot,
        }

        let Parts { age, slot } = Parts::deserialize(deserializer)?;
        let mut holder = Holder::with_notifier(age, N::default());
        if let Slot::Occupied(resource) = slot {
            holder
                .place(resource)
                .map_err(|_| D::Error::custom("slot filled twice"))?;
        }
        Ok(holder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use crate::notify::LogNotifier;

    #[test]
    fn test_serialize_empty() {
        let holder = Holder::with_notifier(3, ());
        let json = serde_json::to_string(&holder).unwrap();
        assert_eq!(json, r#"{"age":3,"slot":"Empty"}"#);
    }

    #[test]
    fn test_deserialize_missing_slot_is_empty() {
        let holder: Holder<LogNotifier> = serde_json::from_str(r#"{"age":5}"#).unwrap();
        assert_eq!(holder.age(), 5);
        assert!(holder.is_empty());
    }

    #[test]
    fn test_deserialize_occupied() {
        let json = r#"{"age":1,"slot":{"Occupied":{"kind":"PeanutButter"}}}"#;
        let holder: Holder<()> = serde_json::from_str(json).unwrap();
        assert!(holder.holds(Kind::PeanutButter));
    }

    #[test]
    fn test_deserialize_unknown_kind_fails() {
        let json = r#"{"age":1,"slot":{"Occupied":{"kind":"Beef"}}}"#;
        let result: Result<Holder<()>, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}

//! Property-based tests for holder slot invariants

use kennel::testing::Recorder;
use kennel::{Holder, Kind, Notice, PreconditionViolated, Resource};
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = Kind> {
    prop::sample::select(Kind::ALL.to_vec())
}

#[derive(Debug, Clone)]
enum Op {
    Increment,
    Acquire(Kind),
    Gated,
    Release,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Increment),
        kind().prop_map(Op::Acquire),
        Just(Op::Gated),
        Just(Op::Release),
    ]
}

proptest! {
    #[test]
    fn prop_new_holder_is_empty(age in any::<u32>()) {
        let holder = Holder::with_notifier(age, ());
        prop_assert!(holder.is_empty());
        prop_assert_eq!(holder.age(), age);
    }

    #[test]
    fn prop_acquire_on_empty_succeeds(age in any::<u32>(), k in kind()) {
        let mut holder = Holder::with_notifier(age, ());

        prop_assert!(holder.acquire(Resource::new(k)).is_ok());
        prop_assert_eq!(holder.held().map(Resource::kind), Some(k));
    }

    #[test]
    fn prop_acquire_on_occupied_fails_unchanged(first in kind(), second in kind()) {
        let mut holder = Holder::with_notifier(0, ());
        holder.acquire(Resource::new(first)).unwrap();

        let rejected = holder.acquire(Resource::new(second)).unwrap_err();

        prop_assert_eq!(rejected.error(), &PreconditionViolated::already_holds(first));
        prop_assert!(rejected.details().contains(first.name()));
        prop_assert_eq!(rejected.into_resource().kind(), second);
        prop_assert!(holder.holds(first));
    }

    #[test]
    fn prop_gated_action_depends_only_on_slot(k in kind(), repeats in 1usize..10) {
        let mut holder = Holder::with_notifier(0, ());
        for _ in 0..repeats {
            prop_assert!(holder.gated_action().is_ok());
        }
        prop_assert!(holder.is_empty());

        holder.acquire(Resource::new(k)).unwrap();
        for _ in 0..repeats {
            prop_assert_eq!(
                holder.gated_action(),
                Err(PreconditionViolated::blocked_by(k))
            );
        }
        prop_assert!(holder.holds(k));
    }

    #[test]
    fn prop_increment_age_adds_one(age in 0u32..u32::MAX) {
        let mut holder = Holder::with_notifier(age, ());
        holder.increment_age();
        prop_assert_eq!(holder.age(), age + 1);
    }

    #[test]
    fn prop_release_returns_acquired_kind(k in kind()) {
        let mut holder = Holder::with_notifier(0, ());
        holder.acquire(Resource::new(k)).unwrap();

        let released = holder.release().unwrap();

        prop_assert_eq!(released.kind(), k);
        prop_assert!(holder.is_empty());
        prop_assert!(holder.release().is_err());
    }

    /// Drive a holder with random operations and compare it to a plain
    /// `Option<Kind>` model after every step.
    #[test]
    fn prop_matches_option_model(
        start in 0u32..1000,
        ops in prop::collection::vec(op(), 0..50)
    ) {
        let recorder = Recorder::new();
        let mut holder = Holder::with_notifier(start, recorder.clone());
        let mut model: Option<Kind> = None;
        let mut age = start;
        let mut expected_notices = Vec::new();

        for op in ops {
            match op {
                Op::Increment => {
                    holder.increment_age();
                    age += 1;
                    expected_notices.push(Notice::AgeIncremented { age });
                }
                Op::Acquire(k) => {
                    let result = holder.acquire(Resource::new(k));
                    match model {
                        Some(_) => prop_assert!(result.is_err()),
                        None => {
                            prop_assert!(result.is_ok());
                            model = Some(k);
                            expected_notices.push(Notice::Acquired { kind: k });
                        }
                    }
                }
                Op::Gated => {
                    let result = holder.gated_action();
                    prop_assert_eq!(result.is_ok(), model.is_none());
                    if model.is_none() {
                        expected_notices.push(Notice::ActionPerformed);
                    }
                }
                Op::Release => {
                    let result = holder.release();
                    match model.take() {
                        Some(k) => {
                            prop_assert_eq!(result.map(|r| r.kind()), Ok(k));
                            expected_notices.push(Notice::Released { kind: k });
                        }
                        None => prop_assert!(result.is_err()),
                    }
                }
            }

            prop_assert_eq!(holder.slot().kind(), model);
            prop_assert_eq!(holder.age(), age);
        }

        prop_assert_eq!(recorder.notices(), expected_notices);
    }
}

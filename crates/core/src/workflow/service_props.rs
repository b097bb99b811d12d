//! Property tests for the approval state machine.

use proptest::prelude::*;

use orgledger_shared::types::UserId;

use crate::model::ApprovalStatus;
use crate::workflow::error::ApprovalError;
use crate::workflow::service::ApprovalFlow;

fn status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Pending),
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Rejected)
    ]
}

fn decision_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Rejected)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A decision without the opt-in succeeds exactly from Pending.
    #[test]
    fn prop_only_pending_is_decidable(
        current in status_strategy(),
        target in decision_strategy(),
    ) {
        let result = ApprovalFlow::decide(current, target, UserId::new(), false);

        if current == ApprovalStatus::Pending {
            let action = result.unwrap();
            prop_assert_eq!(action.new_status, target);
        } else {
            prop_assert_eq!(
                result.unwrap_err(),
                ApprovalError::AlreadyDecided { status: current }
            );
        }
    }

    /// With the opt-in, any decision lands on the requested terminal
    /// status with a full audit stamp.
    #[test]
    fn prop_redecision_always_lands_on_target(
        current in status_strategy(),
        target in decision_strategy(),
    ) {
        let actor = UserId::new();
        let action = ApprovalFlow::decide(current, target, actor, true).unwrap();

        prop_assert_eq!(action.new_status, target);
        prop_assert_eq!(action.decided_by, actor);
        prop_assert!(action.new_status.is_decided());
    }

    /// Pending is never a decision target, opt-in or not.
    #[test]
    fn prop_pending_is_never_a_target(
        current in status_strategy(),
        allow in any::<bool>(),
    ) {
        let result =
            ApprovalFlow::decide(current, ApprovalStatus::Pending, UserId::new(), allow);
        prop_assert_eq!(result.unwrap_err(), ApprovalError::CannotReturnToPending);
    }
}

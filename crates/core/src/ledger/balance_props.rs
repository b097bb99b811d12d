//! Property tests for the balance engine.

use proptest::prelude::*;
use rust_decimal::Decimal;

use orgledger_shared::types::{OrganizationId, UserId};

use crate::ledger::balance::{TransactionFilter, balance, expense_total, income_total, pending};
use crate::ledger::test_support::tx_for_org;
use crate::model::{ApprovalStatus, Transaction, TransactionKind};

/// Amounts between 0.00 and 100,000.00 with two decimal places.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|n| Decimal::new(n, 2))
}

fn kind_strategy() -> impl Strategy<Value = TransactionKind> {
    prop_oneof![
        Just(TransactionKind::Income),
        Just(TransactionKind::Expense)
    ]
}

fn status_strategy() -> impl Strategy<Value = ApprovalStatus> {
    prop_oneof![
        Just(ApprovalStatus::Pending),
        Just(ApprovalStatus::Approved),
        Just(ApprovalStatus::Rejected)
    ]
}

/// A transaction for one of two organizations with a random kind and status.
fn transaction_strategy(
    org_a: OrganizationId,
    org_b: OrganizationId,
) -> impl Strategy<Value = Transaction> {
    (amount_strategy(), kind_strategy(), status_strategy(), any::<bool>()).prop_map(
        move |(amount, kind, status, in_a)| {
            let mut tx = tx_for_org(if in_a { org_a } else { org_b }, kind, amount);
            tx.approval_status = status;
            if status.is_decided() {
                tx.approved_by = Some(UserId::new());
                tx.approval_date = Some(chrono::Utc::now());
            }
            tx
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Balance always equals approved income minus approved expenses,
    /// however the snapshot is mixed.
    #[test]
    fn prop_balance_is_income_minus_expense(
        seed in prop::collection::vec((amount_strategy(), kind_strategy(), status_strategy()), 0..40)
    ) {
        let org = OrganizationId::new();
        let txs: Vec<Transaction> = seed
            .into_iter()
            .map(|(amount, kind, status)| {
                let mut tx = tx_for_org(org, kind, amount);
                tx.approval_status = status;
                tx
            })
            .collect();

        let filter = TransactionFilter::organization(org);

        let expected: Decimal = txs
            .iter()
            .filter(|tx| tx.approval_status == ApprovalStatus::Approved)
            .map(|tx| match tx.kind {
                TransactionKind::Income => tx.amount,
                TransactionKind::Expense => -tx.amount,
            })
            .sum();

        prop_assert_eq!(balance(&txs, &filter), expected);
        prop_assert_eq!(
            balance(&txs, &filter),
            income_total(&txs, &filter) - expense_total(&txs, &filter)
        );
    }

    /// Pending and rejected transactions never move any balance.
    #[test]
    fn prop_undecided_and_rejected_do_not_count(
        amounts in prop::collection::vec(amount_strategy(), 1..20),
        status in prop_oneof![Just(ApprovalStatus::Pending), Just(ApprovalStatus::Rejected)],
    ) {
        let org = OrganizationId::new();
        let txs: Vec<Transaction> = amounts
            .into_iter()
            .map(|amount| {
                let mut tx = tx_for_org(org, TransactionKind::Income, amount);
                tx.approval_status = status;
                tx
            })
            .collect();

        prop_assert_eq!(
            balance(&txs, &TransactionFilter::organization(org)),
            Decimal::ZERO
        );
    }

    /// Per-organization balances are independent: transactions of one
    /// organization never affect another's balance.
    #[test]
    fn prop_balances_are_org_independent(
        (org_a, txs) in {
            let org_a = OrganizationId::new();
            let org_b = OrganizationId::new();
            prop::collection::vec(transaction_strategy(org_a, org_b), 0..40)
                .prop_map(move |txs| (org_a, txs))
        }
    ) {
        let only_a: Vec<Transaction> = txs
            .iter()
            .filter(|tx| tx.organization_id == org_a)
            .cloned()
            .collect();

        let filter = TransactionFilter::organization(org_a);
        prop_assert_eq!(balance(&txs, &filter), balance(&only_a, &filter));
    }

    /// The pending queue holds exactly the pending transactions in scope.
    #[test]
    fn prop_pending_queue_matches_status(
        seed in prop::collection::vec((amount_strategy(), status_strategy()), 0..40)
    ) {
        let org = OrganizationId::new();
        let txs: Vec<Transaction> = seed
            .into_iter()
            .map(|(amount, status)| {
                let mut tx = tx_for_org(org, TransactionKind::Expense, amount);
                tx.approval_status = status;
                tx
            })
            .collect();

        let expected = txs
            .iter()
            .filter(|tx| tx.approval_status == ApprovalStatus::Pending)
            .count();

        prop_assert_eq!(
            pending(&txs, &TransactionFilter::organization(org)).len(),
            expected
        );
    }
}

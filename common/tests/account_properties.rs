use common::decimal::{dec, Amount};
use common::model::account::{Account, AccountError};
use proptest::prelude::*;
use rstest::rstest;
use uuid::Uuid;

/// Amounts with two decimal places, 0.00 ..= 1_000_000.00
fn amount() -> impl Strategy<Value = Amount> {
    (0i64..=100_000_000).prop_map(|cents| Amount::new(cents, 2))
}

fn positive_amount() -> impl Strategy<Value = Amount> {
    (1i64..=100_000_000).prop_map(|cents| Amount::new(cents, 2))
}

fn non_positive_amount() -> impl Strategy<Value = Amount> {
    (-100_000_000i64..=0).prop_map(|cents| Amount::new(cents, 2))
}

fn owner_name() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[A-Za-z][A-Za-z .'-]{0,30}[ \t]{0,3}"
}

proptest! {
    #[test]
    fn valid_construction_stores_initial_deposit(name in owner_name(), deposit in amount()) {
        let id = Uuid::new_v4();
        let account = Account::new(id, &name, deposit).unwrap();

        prop_assert_eq!(account.id(), id);
        prop_assert_eq!(account.owner_name(), name.trim());
        prop_assert_eq!(account.balance(), deposit);
    }

    #[test]
    fn blank_owner_name_is_rejected(name in "[ \t\n]{0,8}", deposit in amount()) {
        let result = Account::open(&name, deposit);
        prop_assert!(matches!(result, Err(AccountError::InvalidArgument(_))));
    }

    #[test]
    fn negative_initial_deposit_is_rejected(name in owner_name(), deposit in positive_amount()) {
        let result = Account::open(&name, -deposit);
        prop_assert!(matches!(result, Err(AccountError::InvalidArgument(_))));
    }

    #[test]
    fn deposit_adds_exactly_the_amount(start in amount(), deposit in positive_amount()) {
        let mut account = Account::open("Anna Smith", start).unwrap();
        account.deposit(deposit).unwrap();
        prop_assert_eq!(account.balance(), start + deposit);
    }

    #[test]
    fn non_positive_deposit_fails_without_effect(start in amount(), deposit in non_positive_amount()) {
        let mut account = Account::open("Anna Smith", start).unwrap();
        let result = account.deposit(deposit);

        prop_assert!(matches!(result, Err(AccountError::InvalidOperation(_))));
        prop_assert_eq!(account.balance(), start);
    }

    #[test]
    fn deposit_overflowing_the_balance_fails_without_effect(headroom in 0u64..1_000_000, extra in 1u64..1_000_000) {
        let start = Amount::MAX - Amount::from(headroom);
        let deposit = Amount::from(headroom + extra);

        let mut account = Account::open("Anna Smith", start).unwrap();
        let result = account.deposit(deposit);

        prop_assert!(matches!(result, Err(AccountError::InvalidOperation(_))));
        prop_assert_eq!(account.balance(), start);
    }

    #[test]
    fn withdraw_within_balance_subtracts_exactly(start in positive_amount(), fraction in 1u32..=100) {
        let withdrawal = (start * Amount::from(fraction) / dec!(100)).round_dp(2).max(dec!(0.01));
        prop_assume!(withdrawal <= start);

        let mut account = Account::open("Anna Smith", start).unwrap();
        account.withdraw(withdrawal).unwrap();
        prop_assert_eq!(account.balance(), start - withdrawal);
        prop_assert!(account.balance() >= Amount::ZERO);
    }

    #[test]
    fn overdraw_fails_without_effect(start in amount(), excess in positive_amount()) {
        let mut account = Account::open("Anna Smith", start).unwrap();
        let result = account.withdraw(start + excess);

        prop_assert!(matches!(result, Err(AccountError::InvalidOperation(_))));
        prop_assert_eq!(account.balance(), start);
    }

    #[test]
    fn non_positive_withdrawal_fails_without_effect(start in amount(), amount in non_positive_amount()) {
        let mut account = Account::open("Anna Smith", start).unwrap();
        let result = account.withdraw(amount);

        prop_assert!(matches!(result, Err(AccountError::InvalidOperation(_))));
        prop_assert_eq!(account.balance(), start);
    }
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn construction_rejects_blank_names(#[case] name: &str) {
    let err = Account::open(name, dec!(100.00)).unwrap_err();
    assert_eq!(
        err,
        AccountError::InvalidArgument("Owner name must not be empty".to_string())
    );
}

#[rstest]
#[case(dec!(0))]
#[case(dec!(-0.01))]
#[case(dec!(-50))]
fn deposit_rejects_non_positive_amounts(#[case] amount: Amount) {
    let mut account = Account::open("Anna Smith", dec!(100.00)).unwrap();
    assert!(account.deposit(amount).is_err());
    assert_eq!(account.balance(), dec!(100.00));
}

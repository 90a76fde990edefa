//! Bank account service - balance mutation with validation.
//!
//! Both operations follow the same shape: validate the amount before any
//! store access, resolve the account, apply the balance change, persist.
//! On any failure path nothing is written.
//!
//! # Concurrency
//!
//! The read and the save are two separate store calls with no lock or
//! compare-and-swap between them. Two concurrent calls against the same
//! account number can both validate against a stale balance and lose one
//! update. This matches the contract of the system being replaced; fixing
//! it (per-account serialization or an atomic conditional update) would
//! change observable behavior and is deliberately not done here.

use crate::{error::AppError, models::bank_account::BankAccount, stores::AccountStore};

/// Withdraw `amount_cents` from the account identified by `account_number`.
///
/// # Errors
///
/// - `InvalidAmount` ("Withdraw amount must be greater than zero!") when
///   the amount is zero or negative; the store is not consulted.
/// - `AccountNotFound` when no account matches the number.
/// - `InsufficientBalance` when the balance is smaller than the amount;
///   nothing is persisted.
pub async fn draw_money<S: AccountStore>(
    accounts: &S,
    account_number: &str,
    amount_cents: i64,
) -> Result<BankAccount, AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidAmount(
            "Withdraw amount must be greater than zero!",
        ));
    }

    let mut account = accounts
        .find_by_number(account_number)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    if account.balance_cents < amount_cents {
        return Err(AppError::InsufficientBalance);
    }

    account.balance_cents -= amount_cents;
    accounts.save(&account).await?;

    Ok(account)
}

/// Deposit `amount_cents` into the account identified by `account_number`.
///
/// Unconditional once the amount is positive and the account exists;
/// there is no upper bound on the resulting balance.
///
/// # Errors
///
/// - `InvalidAmount` ("Deposit amount must be greater than zero!") when
///   the amount is zero or negative; the store is not consulted.
/// - `AccountNotFound` when no account matches the number.
pub async fn deposit_money<S: AccountStore>(
    accounts: &S,
    account_number: &str,
    amount_cents: i64,
) -> Result<BankAccount, AppError> {
    if amount_cents <= 0 {
        return Err(AppError::InvalidAmount(
            "Deposit amount must be greater than zero!",
        ));
    }

    let mut account = accounts
        .find_by_number(account_number)
        .await?
        .ok_or(AppError::AccountNotFound)?;

    account.balance_cents += amount_cents;
    accounts.save(&account).await?;

    Ok(account)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::stores::memory::MemoryAccountStore;

    fn store_with_balance(balance_cents: i64) -> MemoryAccountStore {
        MemoryAccountStore::with_accounts(vec![BankAccount {
            id: 1,
            account_number: "ACC12345678".to_string(),
            balance_cents,
        }])
    }

    #[tokio::test]
    async fn withdraw_returns_remaining_balance_and_saves_once() {
        let store = store_with_balance(10_000);

        let account = draw_money(&store, "ACC12345678", 5_000).await.unwrap();

        assert_eq!(account.account_number, "ACC12345678");
        assert_eq!(account.balance_cents, 5_000);
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
        assert_eq!(store.balance_of("ACC12345678"), Some(5_000));
    }

    #[tokio::test]
    async fn withdraw_fails_when_balance_is_not_enough() {
        let store = store_with_balance(10_000);

        let err = draw_money(&store, "ACC12345678", 15_000).await.unwrap_err();

        assert!(matches!(err, AppError::InsufficientBalance));
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
        // Balance untouched by the failed withdrawal.
        assert_eq!(store.balance_of("ACC12345678"), Some(10_000));
    }

    #[tokio::test]
    async fn withdraw_fails_when_account_does_not_exist() {
        let store = store_with_balance(10_000);

        let err = draw_money(&store, "ACCX", 5_000).await.unwrap_err();

        assert!(matches!(err, AppError::AccountNotFound));
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn withdraw_rejects_non_positive_amounts_before_any_lookup() {
        let store = store_with_balance(10_000);

        for amount in [0, -1, -5_000] {
            let err = draw_money(&store, "ACC12345678", amount).await.unwrap_err();
            assert_eq!(err.to_string(), "Withdraw amount must be greater than zero!");
        }

        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn deposit_adds_to_balance_unconditionally() {
        let store = store_with_balance(i64::MAX - 100);

        // No upper bound check; only the amount and account existence gate
        // a deposit.
        let account = deposit_money(&store, "ACC12345678", 100).await.unwrap();

        assert_eq!(account.balance_cents, i64::MAX);
        assert_eq!(store.saves.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn deposit_fails_when_account_does_not_exist() {
        let store = store_with_balance(10_000);

        let err = deposit_money(&store, "ACCX", 5_000).await.unwrap_err();

        assert!(matches!(err, AppError::AccountNotFound));
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn deposit_rejects_non_positive_amounts_before_any_lookup() {
        let store = store_with_balance(10_000);

        for amount in [0, -1] {
            let err = deposit_money(&store, "ACC12345678", amount)
                .await
                .unwrap_err();
            assert_eq!(err.to_string(), "Deposit amount must be greater than zero!");
        }

        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(store.saves.load(Ordering::SeqCst), 0);
    }
}

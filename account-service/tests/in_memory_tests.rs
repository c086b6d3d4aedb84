use std::collections::HashSet;

use account_service::{AccountRepository, AccountServiceConfig, InMemoryAccountRepository};
use common::decimal::dec;
use common::error::Error;
use common::model::account::Account;
use common::{Cancellation, CancellationSource};
use uuid::Uuid;

#[tokio::test]
async fn test_add_then_get_round_trips() {
    let repo = InMemoryAccountRepository::new();
    let cancel = Cancellation::never();
    assert!(repo.accounts.is_empty());

    let account = Account::open("Anna Smith", dec!(100.00)).unwrap();
    repo.add(account.clone(), &cancel).await.unwrap();

    let stored = repo.get(account.id(), &cancel).await.unwrap().unwrap();
    assert_eq!(stored, account);
    assert_eq!(repo.accounts.len(), 1);
}

#[tokio::test]
async fn test_get_missing_account_is_absent() {
    let repo = InMemoryAccountRepository::new();
    let result = repo.get(Uuid::new_v4(), &Cancellation::never()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_add_overwrites_existing_entry() {
    let repo = InMemoryAccountRepository::new();
    let cancel = Cancellation::never();
    let id = Uuid::new_v4();

    repo.add(Account::new(id, "Anna", dec!(10)).unwrap(), &cancel).await.unwrap();
    repo.add(Account::new(id, "Anna", dec!(20)).unwrap(), &cancel).await.unwrap();

    let stored = repo.get(id, &cancel).await.unwrap().unwrap();
    assert_eq!(stored.balance(), dec!(20));
    assert_eq!(repo.accounts.len(), 1);
}

#[tokio::test]
async fn test_list_returns_every_account_once() {
    let repo = InMemoryAccountRepository::new();
    let cancel = Cancellation::never();

    let mut expected = HashSet::new();
    for i in 0..25 {
        let account = Account::open(&format!("Owner {}", i), dec!(1)).unwrap();
        expected.insert(account.id());
        repo.add(account, &cancel).await.unwrap();
    }

    let listed = repo.list(&cancel).await.unwrap();
    let ids: HashSet<Uuid> = listed.iter().map(|a| a.id()).collect();
    assert_eq!(listed.len(), 25);
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_list_is_a_snapshot() {
    let repo = InMemoryAccountRepository::new();
    let cancel = Cancellation::never();
    let account = Account::open("Anna", dec!(5)).unwrap();
    repo.add(account.clone(), &cancel).await.unwrap();

    let mut listed = repo.list(&cancel).await.unwrap();
    listed[0].deposit(dec!(100)).unwrap();
    listed.clear();

    let stored = repo.get(account.id(), &cancel).await.unwrap().unwrap();
    assert_eq!(stored.balance(), dec!(5));
    assert_eq!(repo.list(&cancel).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_edits_reach_store_only_through_update() {
    let repo = InMemoryAccountRepository::new();
    let cancel = Cancellation::never();
    let account = Account::open("Anna", dec!(100)).unwrap();
    repo.add(account.clone(), &cancel).await.unwrap();

    let mut view = repo.get(account.id(), &cancel).await.unwrap().unwrap();
    view.deposit(dec!(50)).unwrap();
    assert_eq!(repo.get(account.id(), &cancel).await.unwrap().unwrap().balance(), dec!(100));

    repo.update(view, &cancel).await.unwrap();
    assert_eq!(repo.get(account.id(), &cancel).await.unwrap().unwrap().balance(), dec!(150));
}

#[tokio::test]
async fn test_interleaved_updates_last_writer_wins() {
    let repo = InMemoryAccountRepository::new();
    let cancel = Cancellation::never();
    let account = Account::open("Anna", dec!(100)).unwrap();
    repo.add(account.clone(), &cancel).await.unwrap();

    // Two read-modify-write sequences read the same starting balance
    let mut first = repo.get(account.id(), &cancel).await.unwrap().unwrap();
    let mut second = repo.get(account.id(), &cancel).await.unwrap().unwrap();
    first.deposit(dec!(10)).unwrap();
    second.deposit(dec!(20)).unwrap();

    repo.update(first, &cancel).await.unwrap();
    repo.update(second, &cancel).await.unwrap();

    // The first deposit is lost
    let stored = repo.get(account.id(), &cancel).await.unwrap().unwrap();
    assert_eq!(stored.balance(), dec!(120));
}

#[tokio::test]
async fn test_cancelled_calls_do_not_complete() {
    let repo = InMemoryAccountRepository::with_config(&AccountServiceConfig::new(8, false));
    let source = CancellationSource::new();
    let cancel = source.token();
    source.cancel();

    let account = Account::open("Anna", dec!(1)).unwrap();
    let result = repo.add(account.clone(), &cancel).await;
    assert!(matches!(result, Err(Error::Cancelled)));
    assert!(repo.accounts.is_empty());

    assert!(matches!(repo.get(account.id(), &cancel).await, Err(Error::Cancelled)));
    assert!(matches!(repo.list(&cancel).await, Err(Error::Cancelled)));
    assert!(matches!(repo.update(account, &cancel).await, Err(Error::Cancelled)));
}

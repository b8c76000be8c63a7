use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use marquee_core::{
    Account, AccountId, AccountStore, AccountStoreError, MovieId, NewAccount, ProfileChanges,
    Username,
};

/// In-memory account store for tests and local development. A single
/// write lock per mutation gives the same per-account atomicity the
/// Postgres adapter gets from its conditional single-statement updates.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<Username, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountStore for HashMapAccountStore {
    async fn insert_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.username) {
            return Err(AccountStoreError::UsernameTaken);
        }
        let stored = Account {
            id: AccountId::new(),
            username: account.username.clone(),
            hashed_password: account.hashed_password,
            email: account.email,
            birthday: account.birthday,
            death_date: None,
            favorites: Vec::new(),
        };
        accounts.insert(account.username, stored.clone());
        Ok(stored)
    }

    async fn find_by_username(&self, username: &Username) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(username)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        let accounts = self.accounts.read().await;
        let mut all: Vec<Account> = accounts.values().cloned().collect();
        all.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(all)
    }

    async fn update_profile(
        &self,
        username: &Username,
        changes: ProfileChanges,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(username)
            .ok_or(AccountStoreError::AccountNotFound)?;

        if let Some(hash) = changes.hashed_password {
            account.hashed_password = hash;
        }
        account.email = changes.email;
        account.birthday = changes.birthday;
        account.death_date = changes.death_date;

        Ok(account.clone())
    }

    async fn delete_account(&self, username: &Username) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts
            .remove(username)
            .ok_or(AccountStoreError::AccountNotFound)?;
        Ok(())
    }

    async fn push_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(username)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.favorites.push(movie_id.clone());
        Ok(account.clone())
    }

    async fn pull_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(username)
            .ok_or(AccountStoreError::AccountNotFound)?;
        if !account.favorites.contains(movie_id) {
            return Err(AccountStoreError::FavoriteNotFound);
        }
        account.favorites.retain(|id| id != movie_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_core::{Email, HashedPassword};

    fn new_account(username: &str) -> NewAccount {
        NewAccount {
            username: Username::parse(username).unwrap(),
            hashed_password: HashedPassword::new("phc".to_string()),
            email: Email::parse("a@b.com").unwrap(),
            birthday: None,
        }
    }

    #[tokio::test]
    async fn duplicate_insert_is_rejected() {
        let store = HashMapAccountStore::new();
        store.insert_account(new_account("alice01")).await.unwrap();

        let result = store.insert_account(new_account("alice01")).await;
        assert_eq!(result.unwrap_err(), AccountStoreError::UsernameTaken);
    }

    #[tokio::test]
    async fn concurrent_adds_for_one_account_both_persist() {
        let store = HashMapAccountStore::new();
        store.insert_account(new_account("alice01")).await.unwrap();
        let username = Username::parse("alice01").unwrap();

        let m1 = MovieId::new("m1");
        let m2 = MovieId::new("m2");
        let (a, b) = tokio::join!(
            store.push_favorite(&username, &m1),
            store.push_favorite(&username, &m2),
        );
        a.unwrap();
        b.unwrap();

        let account = store.find_by_username(&username).await.unwrap();
        assert_eq!(account.favorites.len(), 2);
    }

    #[tokio::test]
    async fn pull_removes_every_occurrence() {
        let store = HashMapAccountStore::new();
        store.insert_account(new_account("alice01")).await.unwrap();
        let username = Username::parse("alice01").unwrap();

        for id in ["m1", "m2", "m1"] {
            store.push_favorite(&username, &MovieId::new(id)).await.unwrap();
        }
        store.pull_favorite(&username, &MovieId::new("m1")).await.unwrap();

        let account = store.find_by_username(&username).await.unwrap();
        assert_eq!(account.favorites, vec![MovieId::new("m2")]);
    }

    #[tokio::test]
    async fn pull_of_absent_favorite_is_an_error() {
        let store = HashMapAccountStore::new();
        store.insert_account(new_account("alice01")).await.unwrap();
        let username = Username::parse("alice01").unwrap();

        let result = store.pull_favorite(&username, &MovieId::new("m404")).await;
        assert_eq!(result.unwrap_err(), AccountStoreError::FavoriteNotFound);
    }
}

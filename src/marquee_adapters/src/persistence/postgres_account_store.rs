use std::future::Future;
use std::time::Duration;

use chrono::NaiveDate;
use marquee_core::{
    Account, AccountId, AccountStore, AccountStoreError, Email, HashedPassword, MovieId,
    NewAccount, ProfileChanges, Username,
};
use secrecy::ExposeSecret;
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
    /// Upper bound per round-trip; a stalled store surfaces as an error
    /// instead of hanging the request task.
    op_timeout: Duration,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>, op_timeout: Duration) -> Self {
        PostgresAccountStore { pool, op_timeout }
    }

    async fn bounded<T>(
        &self,
        query: impl Future<Output = Result<T, sqlx::Error>>,
    ) -> Result<T, AccountStoreError> {
        tokio::time::timeout(self.op_timeout, query)
            .await
            .map_err(|_| AccountStoreError::Unexpected("database operation timed out".to_string()))?
            .map_err(|e| AccountStoreError::Unexpected(e.to_string()))
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: Uuid,
    username: String,
    password_hash: String,
    email: String,
    birthday: Option<NaiveDate>,
    death_date: Option<NaiveDate>,
    favorites: Vec<String>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, AccountStoreError> {
        let username = Username::parse(&self.username)
            .map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;
        let email =
            Email::parse(&self.email).map_err(|e| AccountStoreError::Unexpected(e.to_string()))?;

        Ok(Account {
            id: AccountId::from(self.id),
            username,
            hashed_password: HashedPassword::new(self.password_hash),
            email,
            birthday: self.birthday,
            death_date: self.death_date,
            favorites: self.favorites.into_iter().map(MovieId::new).collect(),
        })
    }
}

#[async_trait::async_trait]
impl AccountStore for PostgresAccountStore {
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn insert_account(&self, account: NewAccount) -> Result<Account, AccountStoreError> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
                INSERT INTO accounts (username, password_hash, email, birthday)
                VALUES ($1, $2, $3, $4)
                RETURNING id, username, password_hash, email, birthday, death_date, favorites
            "#,
        )
        .bind(account.username.as_str())
        .bind(account.hashed_password.as_ref().expose_secret())
        .bind(account.email.as_str())
        .bind(account.birthday);

        let row = tokio::time::timeout(self.op_timeout, query.fetch_one(&self.pool))
            .await
            .map_err(|_| {
                AccountStoreError::Unexpected("database operation timed out".to_string())
            })?
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return AccountStoreError::UsernameTaken;
                    }
                }
                AccountStoreError::Unexpected(e.to_string())
            })?;

        row.into_account()
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_username(&self, username: &Username) -> Result<Account, AccountStoreError> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, password_hash, email, birthday, death_date, favorites
                FROM accounts
                WHERE username = $1
            "#,
        )
        .bind(username.as_str());

        let row = self
            .bounded(query.fetch_optional(&self.pool))
            .await?
            .ok_or(AccountStoreError::AccountNotFound)?;

        row.into_account()
    }

    #[tracing::instrument(name = "Listing accounts from PostgreSQL", skip_all)]
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountStoreError> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, username, password_hash, email, birthday, death_date, favorites
                FROM accounts
                ORDER BY username
            "#,
        );

        let rows = self.bounded(query.fetch_all(&self.pool)).await?;

        rows.into_iter().map(AccountRow::into_account).collect()
    }

    #[tracing::instrument(name = "Updating account profile in PostgreSQL", skip_all)]
    async fn update_profile(
        &self,
        username: &Username,
        changes: ProfileChanges,
    ) -> Result<Account, AccountStoreError> {
        let password_hash = changes
            .hashed_password
            .as_ref()
            .map(|hash| hash.as_ref().expose_secret().clone());

        let query = sqlx::query_as::<_, AccountRow>(
            r#"
                UPDATE accounts
                SET password_hash = COALESCE($2, password_hash),
                    email = $3,
                    birthday = $4,
                    death_date = $5
                WHERE username = $1
                RETURNING id, username, password_hash, email, birthday, death_date, favorites
            "#,
        )
        .bind(username.as_str())
        .bind(password_hash)
        .bind(changes.email.as_str())
        .bind(changes.birthday)
        .bind(changes.death_date);

        let row = self
            .bounded(query.fetch_optional(&self.pool))
            .await?
            .ok_or(AccountStoreError::AccountNotFound)?;

        row.into_account()
    }

    #[tracing::instrument(name = "Deleting account from PostgreSQL", skip_all)]
    async fn delete_account(&self, username: &Username) -> Result<(), AccountStoreError> {
        let query = sqlx::query("DELETE FROM accounts WHERE username = $1")
            .bind(username.as_str());

        let result = self.bounded(query.execute(&self.pool)).await?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }

    // The append is a single conditional statement keyed on the username,
    // so concurrent favorites updates on one account serialize in the
    // store instead of losing writes.
    #[tracing::instrument(name = "Appending favorite in PostgreSQL", skip_all)]
    async fn push_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Account, AccountStoreError> {
        let query = sqlx::query_as::<_, AccountRow>(
            r#"
                UPDATE accounts
                SET favorites = array_append(favorites, $2)
                WHERE username = $1
                RETURNING id, username, password_hash, email, birthday, death_date, favorites
            "#,
        )
        .bind(username.as_str())
        .bind(movie_id.as_str());

        let row = self
            .bounded(query.fetch_optional(&self.pool))
            .await?
            .ok_or(AccountStoreError::AccountNotFound)?;

        row.into_account()
    }

    #[tracing::instrument(name = "Removing favorite in PostgreSQL", skip_all)]
    async fn pull_favorite(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<(), AccountStoreError> {
        // array_remove drops every occurrence; the ANY guard makes
        // "not in favorites" observable as zero affected rows.
        let query = sqlx::query(
            r#"
                UPDATE accounts
                SET favorites = array_remove(favorites, $2)
                WHERE username = $1 AND $2 = ANY(favorites)
            "#,
        )
        .bind(username.as_str())
        .bind(movie_id.as_str());

        let result = self.bounded(query.execute(&self.pool)).await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        // Zero rows: the account is missing or the id was not a favorite.
        self.find_by_username(username).await?;
        Err(AccountStoreError::FavoriteNotFound)
    }
}

use marquee_core::{Account, AccountStore, AccountStoreError, MovieId, Username};

/// Add favorite use case - appends a catalog-item reference to the
/// account's favorites.
///
/// The append is not deduplicated, and the id is not checked against the
/// catalog; both are deliberate boundary choices. Atomicity lives in the
/// store's `push_favorite`.
pub struct AddFavoriteUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    accounts: &'a S,
}

impl<'a, S> AddFavoriteUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "AddFavoriteUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<Account, AccountStoreError> {
        self.accounts.push_favorite(username, movie_id).await
    }
}

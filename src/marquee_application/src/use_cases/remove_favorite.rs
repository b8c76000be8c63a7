use marquee_core::{AccountStore, AccountStoreError, MovieId, Username};

/// Remove favorite use case - set-pull semantics: every occurrence of the
/// id is removed, and removing an id that is not present is an error
/// rather than a no-op.
pub struct RemoveFavoriteUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    accounts: &'a S,
}

impl<'a, S> RemoveFavoriteUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "RemoveFavoriteUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        username: &Username,
        movie_id: &MovieId,
    ) -> Result<(), AccountStoreError> {
        self.accounts.pull_favorite(username, movie_id).await
    }
}

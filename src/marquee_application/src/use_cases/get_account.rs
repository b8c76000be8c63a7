use marquee_core::{Account, AccountStore, AccountStoreError, Username};

/// Get account use case - single lookup by username.
pub struct GetAccountUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    accounts: &'a S,
}

impl<'a, S> GetAccountUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "GetAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, username: &Username) -> Result<Account, AccountStoreError> {
        self.accounts.find_by_username(username).await
    }
}

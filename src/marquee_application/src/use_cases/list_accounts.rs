use marquee_core::{Account, AccountStore, AccountStoreError};

/// List accounts use case - full directory listing.
pub struct ListAccountsUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    accounts: &'a S,
}

impl<'a, S> ListAccountsUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "ListAccountsUseCase::execute", skip(self))]
    pub async fn execute(&self) -> Result<Vec<Account>, AccountStoreError> {
        self.accounts.list_accounts().await
    }
}

use marquee_core::{AccountStore, AccountStoreError, Username};

/// Delete account use case - unconditional removal of the account record.
///
/// Deletion does not cascade into the catalog; favorites references die
/// with the account.
pub struct DeleteAccountUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    accounts: &'a S,
}

impl<'a, S> DeleteAccountUseCase<'a, S>
where
    S: AccountStore + ?Sized,
{
    pub fn new(accounts: &'a S) -> Self {
        Self { accounts }
    }

    #[tracing::instrument(name = "DeleteAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, username: &Username) -> Result<(), AccountStoreError> {
        self.accounts.delete_account(username).await
    }
}

use marquee_core::{
    Account, AccountStore, AccountStoreError, CredentialHasher, Password, Username,
};
use secrecy::Secret;

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Covers unknown username, unparseable credentials and wrong password
    /// alike, so the response never reveals which one failed.
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
}

/// Login use case - verifies submitted credentials against the stored hash.
///
/// On success the verified account is returned to the caller, which is the
/// only place allowed to issue a bearer token. Failure is terminal: no
/// token, no side effect on the account.
pub struct LoginUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    accounts: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> LoginUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub fn new(accounts: &'a S, hasher: &'a H) -> Self {
        Self { accounts, hasher }
    }

    /// Execute the login use case
    ///
    /// Takes the raw submitted fields: a candidate that does not even parse
    /// as a username or password fails the same way as a wrong password.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all, fields(username = %username))]
    pub async fn execute(
        &self,
        username: &str,
        password: Secret<String>,
    ) -> Result<Account, LoginError> {
        let username =
            Username::parse(username).map_err(|_| LoginError::InvalidCredentials)?;
        let password = Password::parse(password).map_err(|_| LoginError::InvalidCredentials)?;

        let account = self
            .accounts
            .find_by_username(&username)
            .await
            .map_err(|error| match error {
                AccountStoreError::AccountNotFound => LoginError::InvalidCredentials,
                other => LoginError::Store(other),
            })?;

        if !self.hasher.verify(&password, &account.hashed_password).await {
            tracing::debug!("password verification failed");
            return Err(LoginError::InvalidCredentials);
        }

        Ok(account)
    }
}

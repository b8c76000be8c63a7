use marquee_core::{
    Account, AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError, NewAccount,
    RegistrationCandidate, Violation, validate_registration,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("invalid registration payload")]
    Validation(Vec<Violation>),
    #[error("{username} already exists")]
    UsernameTaken { username: String },
    #[error(transparent)]
    Hasher(#[from] CredentialHasherError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
}

/// Register use case - validates a candidate payload, hashes the password
/// and inserts the account.
///
/// Uniqueness of the username is signalled by the store so the check and
/// the insert cannot race; validation itself never touches persisted state.
pub struct RegisterUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    accounts: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> RegisterUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub fn new(accounts: &'a S, hasher: &'a H) -> Self {
        Self { accounts, hasher }
    }

    /// Execute the register use case
    ///
    /// # Returns
    /// The freshly created account on success. Violations are collected and
    /// returned as one list; a taken username is reported as a conflict.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        candidate: RegistrationCandidate,
    ) -> Result<Account, RegisterError> {
        let valid = validate_registration(candidate).map_err(RegisterError::Validation)?;

        let hashed_password = self.hasher.hash(&valid.password).await?;

        let new_account = NewAccount {
            username: valid.username,
            hashed_password,
            email: valid.email,
            birthday: valid.birthday,
        };
        let username = new_account.username.to_string();

        self.accounts
            .insert_account(new_account)
            .await
            .map_err(|error| match error {
                AccountStoreError::UsernameTaken => RegisterError::UsernameTaken { username },
                other => RegisterError::Store(other),
            })
    }
}

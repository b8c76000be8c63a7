use marquee_core::{
    Account, AccountStore, AccountStoreError, CredentialHasher, CredentialHasherError,
    ProfileChanges, ProfileUpdateCandidate, Username, Violation, validate_profile_update,
};

/// Error types specific to the update profile use case
#[derive(Debug, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("invalid profile payload")]
    Validation(Vec<Violation>),
    /// A missing target is distinct from a validation failure.
    #[error("User not found")]
    NotFound,
    #[error(transparent)]
    Hasher(#[from] CredentialHasherError),
    #[error("Account store error: {0}")]
    Store(AccountStoreError),
}

/// Update profile use case - re-validates like registration, re-hashes the
/// password only when one is submitted, and persists the changed fields.
/// The username itself is immutable.
pub struct UpdateProfileUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    accounts: &'a S,
    hasher: &'a H,
}

impl<'a, S, H> UpdateProfileUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: CredentialHasher + ?Sized,
{
    pub fn new(accounts: &'a S, hasher: &'a H) -> Self {
        Self { accounts, hasher }
    }

    #[tracing::instrument(name = "UpdateProfileUseCase::execute", skip_all, fields(username = %username))]
    pub async fn execute(
        &self,
        username: &Username,
        candidate: ProfileUpdateCandidate,
    ) -> Result<Account, UpdateProfileError> {
        let valid = validate_profile_update(candidate).map_err(UpdateProfileError::Validation)?;

        let hashed_password = match valid.password {
            Some(password) => Some(self.hasher.hash(&password).await?),
            None => None,
        };

        let changes = ProfileChanges {
            hashed_password,
            email: valid.email,
            birthday: valid.birthday,
            death_date: valid.death_date,
        };

        self.accounts
            .update_profile(username, changes)
            .await
            .map_err(|error| match error {
                AccountStoreError::AccountNotFound => UpdateProfileError::NotFound,
                other => UpdateProfileError::Store(other),
            })
    }
}

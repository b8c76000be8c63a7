pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountId, AccountView, NewAccount, ProfileChanges},
    email::{Email, EmailError},
    movie::{Director, Genre, Movie, MovieId, NewMovie},
    password::{HashedPassword, Password, PasswordError},
    username::{Username, UsernameError},
    validation::{
        ProfileUpdateCandidate, RegistrationCandidate, ValidProfileUpdate, ValidRegistration,
        Violation, validate_profile_update, validate_registration,
    },
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError, MovieStore, MovieStoreError},
    services::{CredentialHasher, CredentialHasherError},
};

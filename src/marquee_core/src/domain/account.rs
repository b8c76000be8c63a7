use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::email::Email;
use super::movie::MovieId;
use super::password::HashedPassword;
use super::username::Username;

/// Opaque account identifier, assigned by the persistence layer at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered account as held by the store.
///
/// The password is present only in its hashed form; the serializable
/// projection is [`AccountView`], which structurally cannot contain it.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub username: Username,
    pub hashed_password: HashedPassword,
    pub email: Email,
    pub birthday: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    /// Ordered catalog-item references. Duplicates are permitted; removal
    /// takes out every occurrence.
    pub favorites: Vec<MovieId>,
}

impl Account {
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            birthday: self.birthday,
            death_date: self.death_date,
            favorites: self.favorites.clone(),
        }
    }
}

/// The client-facing projection of an [`Account`]. Wire keys follow the
/// original public API of this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountView {
    #[serde(rename = "Id")]
    pub id: AccountId,
    #[serde(rename = "Username")]
    pub username: Username,
    #[serde(rename = "Email")]
    pub email: Email,
    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    #[serde(rename = "Death", default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    #[serde(rename = "FavoriteMovies")]
    pub favorites: Vec<MovieId>,
}

/// Payload for account creation; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub username: Username,
    pub hashed_password: HashedPassword,
    pub email: Email,
    pub birthday: Option<NaiveDate>,
}

/// Validated field updates applied by a profile update. The username is
/// immutable and the favorites list is only touched through the favorites
/// operations.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    /// `None` keeps the stored hash.
    pub hashed_password: Option<HashedPassword>,
    pub email: Email,
    pub birthday: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque catalog-item identifier. Favorites reference movies by this id
/// only; the account side never validates that the id resolves to a
/// catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Bio")]
    pub bio: String,
    #[serde(rename = "Birth", default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<NaiveDate>,
    #[serde(rename = "Death", default, skip_serializing_if = "Option::is_none")]
    pub death: Option<NaiveDate>,
}

/// A catalog entry. Movies are plain records: the service stores and
/// retrieves them without further interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "Id")]
    pub id: MovieId,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Genre")]
    pub genre: Genre,
    #[serde(rename = "Director")]
    pub director: Director,
    #[serde(rename = "ImagePath", default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(rename = "Featured", default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

/// Payload for catalog insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Genre")]
    pub genre: Genre,
    #[serde(rename = "Director")]
    pub director: Director,
    #[serde(rename = "ImagePath", default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    #[serde(rename = "Featured", default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

use serde::{Deserialize, Deserializer, Serialize};

/// A record as the catalog API returns it: a numeric id plus a bag of
/// kind-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity<A> {
    pub id: u32,
    pub attributes: A,
}

pub type Character = Entity<CharacterAttributes>;
pub type Location = Entity<LocationAttributes>;
pub type Concept = Entity<ConceptAttributes>;
pub type Storyline = Entity<StorylineAttributes>;

// The remote API is loose about missing values, so every non-optional field
// falls back to its empty value when absent or null.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_appearance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alive: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub gender: String,
    #[serde(deserialize_with = "null_as_default")]
    pub abilities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub first_appearance: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notable_events: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_characters: Vec<String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub location_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_appearance: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub creator: String,
    #[serde(deserialize_with = "null_as_default")]
    pub related_characters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub related_locations: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorylineAttributes {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub issues: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub publication_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub writer: String,
    #[serde(deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(deserialize_with = "null_as_default")]
    pub characters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub image_url: String,
}

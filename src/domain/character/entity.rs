use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Stable identifier assigned by the remote catalog
pub type CharacterId = u32;

/// A character as published by the remote catalog.
///
/// The client never mutates these records; favorites keep full snapshots so
/// they can be displayed without a network round-trip. Field names follow the
/// upstream payload, which lets the same type deserialize API responses and
/// persisted favorites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,

    pub name: String,

    pub status: CharacterStatus,

    pub species: String,

    /// Sub-species or variant, often empty
    #[serde(rename = "type", default)]
    pub kind: String,

    pub gender: String,

    pub origin: LocationRef,

    pub location: LocationRef,

    /// Avatar URL
    pub image: String,

    /// Episode resource URLs this character appears in
    #[serde(default)]
    pub episode: Vec<String>,

    /// Resource URL of the character itself
    #[serde(default)]
    pub url: String,

    /// When the record was created upstream
    pub created: DateTime<Utc>,
}

/// Named link to a location resource
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocationRef {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Life status reported by the catalog.
///
/// Upstream sends `"Alive"`, `"Dead"` or `"unknown"`; parsing is
/// case-insensitive and anything else is treated as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    pub const ALL: [CharacterStatus; 3] = [
        CharacterStatus::Alive,
        CharacterStatus::Dead,
        CharacterStatus::Unknown,
    ];

    /// Case-insensitive parse, `None` for unrecognised input
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "alive" => Some(CharacterStatus::Alive),
            "dead" => Some(CharacterStatus::Dead),
            "unknown" => Some(CharacterStatus::Unknown),
            _ => None,
        }
    }

    /// Lowercase form used as the `status` query parameter and CSS-like class suffix
    pub fn as_query_value(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "alive",
            CharacterStatus::Dead => "dead",
            CharacterStatus::Unknown => "unknown",
        }
    }

    /// Human label with the first letter capitalised
    pub fn label(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "Unknown",
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        CharacterStatus::parse(&value).unwrap_or(CharacterStatus::Unknown)
    }
}

impl From<CharacterStatus> for String {
    fn from(status: CharacterStatus) -> Self {
        match status {
            CharacterStatus::Alive => "Alive".to_string(),
            CharacterStatus::Dead => "Dead".to_string(),
            CharacterStatus::Unknown => "unknown".to_string(),
        }
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Character {
    /// Number of episodes the character appears in
    pub fn appearance_count(&self) -> usize {
        self.episode.len()
    }

    /// Creation date as `dd/mm/yyyy` in the given time zone
    pub fn created_date_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.created.with_timezone(tz).format("%d/%m/%Y").to_string()
    }

    /// Creation date formatted for local display
    pub fn created_date_local(&self) -> String {
        self.created_date_in(&chrono::Local)
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

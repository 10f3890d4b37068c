use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Placeholder shown for a team the server sent without a name
pub const UNNAMED_TEAM: &str = "Unnamed";

/// Team identifier as the server sends it.
///
/// Club listings carry numeric ids while some upstream feeds use strings, so both
/// shapes are accepted and written back unchanged. A `null` id is kept as
/// `Missing` and posted as an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(untagged)]
pub enum TeamId {
    Numeric(i64),
    Text(String),
    #[default]
    Missing,
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamId::Numeric(id) => write!(f, "{}", id),
            TeamId::Text(id) => f.write_str(id),
            TeamId::Missing => Ok(()),
        }
    }
}

impl From<i64> for TeamId {
    fn from(id: i64) -> Self {
        TeamId::Numeric(id)
    }
}

/// Data Transfer Object for a club or team
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamDto {
    #[serde(default)]
    pub id: TeamId,

    #[serde(default)]
    pub name: Option<String>,

    /// Crest image URL
    #[serde(default)]
    pub crest: Option<String>,
}

impl TeamDto {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            crest: None,
        }
    }

    pub fn with_crest(mut self, crest: impl Into<String>) -> Self {
        self.crest = Some(crest.into());
        self
    }

    /// Name as posted to the server, empty when unknown
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Name as shown on screen
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNNAMED_TEAM,
        }
    }

    pub fn crest_src(&self) -> &str {
        self.crest.as_deref().unwrap_or("")
    }

    pub fn crest_alt(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "crest",
        }
    }
}

/// Body of `/clubs/popular` and `/teams/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamListResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub teams: Vec<TeamDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// `"teams": null` reads as an empty list
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

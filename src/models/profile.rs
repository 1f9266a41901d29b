use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Gender;

/// Id of the built-in household profile.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// A household member whose checks are grouped together on the client.
/// Not an identity: there is no authentication behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: Option<String>,
    pub gender: Option<Gender>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl UserProfile {
    pub fn default_profile() -> Self {
        Self {
            id: DEFAULT_PROFILE_ID.to_string(),
            name: "Default User".to_string(),
            age: None,
            gender: None,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Fields accepted when creating or updating a profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<Gender>,
}

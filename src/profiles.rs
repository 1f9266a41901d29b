//! Household profiles: a keyed in-memory record store.
//!
//! There is no authentication or ownership here. Anyone who can reach the
//! API can list, edit or delete any profile. Profiles only group checks
//! for display. The `default` profile always exists.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{ProfileInput, UserProfile, DEFAULT_PROFILE_ID};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("The default profile cannot be deleted")]
    DefaultUndeletable,

    #[error("Profile name is required")]
    InvalidName,
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug)]
pub struct ProfileStore {
    profiles: HashMap<String, UserProfile>,
}

impl ProfileStore {
    pub fn new() -> Self {
        let default = UserProfile::default_profile();
        Self {
            profiles: HashMap::from([(default.id.clone(), default)]),
        }
    }

    /// All profiles, oldest first (default first).
    pub fn list(&self) -> Vec<UserProfile> {
        let mut profiles: Vec<UserProfile> = self.profiles.values().cloned().collect();
        profiles.sort_by(|a, b| {
            (a.id != DEFAULT_PROFILE_ID, a.created_at, &a.id)
                .cmp(&(b.id != DEFAULT_PROFILE_ID, b.created_at, &b.id))
        });
        profiles
    }

    pub fn get(&self, id: &str) -> Result<UserProfile, ProfileError> {
        self.profiles
            .get(id)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))
    }

    pub fn create(&mut self, input: ProfileInput) -> Result<UserProfile, ProfileError> {
        let name = clean(input.name).ok_or(ProfileError::InvalidName)?;
        let profile = UserProfile {
            id: format!("user_{}", Uuid::new_v4().simple()),
            name,
            age: clean(input.age),
            gender: input.gender,
            created_at: Utc::now(),
            updated_at: None,
        };
        self.profiles.insert(profile.id.clone(), profile.clone());
        tracing::info!(profile_id = %profile.id, "Profile created");
        Ok(profile)
    }

    /// Apply the fields present in `input`; absent fields are left unchanged.
    pub fn update(&mut self, id: &str, input: ProfileInput) -> Result<UserProfile, ProfileError> {
        let profile = self
            .profiles
            .get_mut(id)
            .ok_or_else(|| ProfileError::NotFound(id.to_string()))?;

        if let Some(name) = input.name {
            profile.name = clean(Some(name)).ok_or(ProfileError::InvalidName)?;
        }
        if input.age.is_some() {
            profile.age = clean(input.age);
        }
        if input.gender.is_some() {
            profile.gender = input.gender;
        }
        profile.updated_at = Some(Utc::now());
        Ok(profile.clone())
    }

    pub fn delete(&mut self, id: &str) -> Result<(), ProfileError> {
        if id == DEFAULT_PROFILE_ID {
            return Err(ProfileError::DefaultUndeletable);
        }
        if self.profiles.remove(id).is_none() {
            return Err(ProfileError::NotFound(id.to_string()));
        }
        tracing::info!(profile_id = id, "Profile deleted");
        Ok(())
    }
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    fn input(name: &str) -> ProfileInput {
        ProfileInput {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_default_profile() {
        let store = ProfileStore::new();
        let profiles = store.list();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].id, DEFAULT_PROFILE_ID);
    }

    #[test]
    fn create_and_get() {
        let mut store = ProfileStore::new();
        let created = store
            .create(ProfileInput {
                name: Some("  Asha ".into()),
                age: Some("34".into()),
                gender: Some(Gender::Female),
            })
            .unwrap();
        assert!(created.id.starts_with("user_"));
        assert_eq!(created.name, "Asha");
        assert_eq!(store.get(&created.id).unwrap(), created);
        assert_eq!(store.list().len(), 2);
        assert_eq!(store.list()[0].id, DEFAULT_PROFILE_ID);
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut store = ProfileStore::new();
        assert_eq!(store.create(input("   ")).unwrap_err(), ProfileError::InvalidName);
        assert_eq!(
            store.create(ProfileInput::default()).unwrap_err(),
            ProfileError::InvalidName
        );
    }

    #[test]
    fn update_changes_only_given_fields() {
        let mut store = ProfileStore::new();
        let created = store
            .create(ProfileInput {
                name: Some("Ravi".into()),
                age: Some("61".into()),
                gender: Some(Gender::Male),
            })
            .unwrap();

        let updated = store
            .update(
                &created.id,
                ProfileInput {
                    age: Some("62".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Ravi");
        assert_eq!(updated.age.as_deref(), Some("62"));
        assert_eq!(updated.gender, Some(Gender::Male));
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn update_unknown_is_not_found() {
        let mut store = ProfileStore::new();
        assert_eq!(
            store.update("user_missing", input("X")).unwrap_err(),
            ProfileError::NotFound("user_missing".into())
        );
    }

    #[test]
    fn default_profile_cannot_be_deleted() {
        let mut store = ProfileStore::new();
        assert_eq!(
            store.delete(DEFAULT_PROFILE_ID).unwrap_err(),
            ProfileError::DefaultUndeletable
        );
    }

    #[test]
    fn delete_removes_profile() {
        let mut store = ProfileStore::new();
        let created = store.create(input("Meera")).unwrap();
        store.delete(&created.id).unwrap();
        assert!(matches!(store.get(&created.id), Err(ProfileError::NotFound(_))));
        assert!(matches!(store.delete(&created.id), Err(ProfileError::NotFound(_))));
    }
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use super::{PhotoSource, ProfileField, UserRecord};

/// The in-memory, editable copy of a user's profile.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    pub photo: String,
    pub name: String,
    pub username: String,
    pub bio: String,
}

impl ProfileDraft {
    pub fn from_user(user: &UserRecord) -> Self {
        Self {
            photo: user.image.clone().unwrap_or_default(),
            name: user.name.clone().unwrap_or_default(),
            username: user.username.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::ProfilePhoto => &self.photo,
            ProfileField::Name => &self.name,
            ProfileField::Username => &self.username,
            ProfileField::Bio => &self.bio,
        }
    }

    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::ProfilePhoto => self.photo = value,
            ProfileField::Name => self.name = value,
            ProfileField::Username => self.username = value,
            ProfileField::Bio => self.bio = value,
        }
    }

    pub fn photo_source(&self) -> PhotoSource {
        PhotoSource::classify(&self.photo)
    }
}

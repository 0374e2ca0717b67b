// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::user_profiles::models::{FieldErrors, PhotoSource, ProfileDraft, ProfileField};
use crate::domain::user_profiles::services::ProfileValidator;

const MIN_TEXT_LENGTH: usize = 3;
const MAX_NAME_LENGTH: usize = 30;
const MAX_BIO_LENGTH: usize = 1000;

/// The default profile schema.
///
/// - `profile_photo`: required, a hosted http(s) URL or an inline image.
/// - `name`, `username`: 3 to 30 characters.
/// - `bio`: 3 to 1000 characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserValidation;

impl ProfileValidator for UserValidation {
    fn validate(&self, draft: &ProfileDraft) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();

        match draft.photo_source() {
            PhotoSource::Empty => errors.insert(ProfileField::ProfilePhoto, "Required"),
            PhotoSource::Invalid => errors.insert(ProfileField::ProfilePhoto, "Invalid url"),
            PhotoSource::Hosted(_) | PhotoSource::Inline(_) => (),
        }

        check_length(&mut errors, ProfileField::Name, &draft.name, MAX_NAME_LENGTH);
        check_length(
            &mut errors,
            ProfileField::Username,
            &draft.username,
            MAX_NAME_LENGTH,
        );
        check_length(&mut errors, ProfileField::Bio, &draft.bio, MAX_BIO_LENGTH);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn check_length(errors: &mut FieldErrors, field: ProfileField, value: &str, max: usize) {
    let len = value.chars().count();

    if len < MIN_TEXT_LENGTH {
        errors.insert(field, format!("Minimum {MIN_TEXT_LENGTH} characters."));
    } else if len > max {
        errors.insert(field, format!("Maximum {max} characters."));
    }
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use parking_lot::RwLock;
use strum::IntoEnumIterator;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::app::deps::{
    DynAppContext, DynNavigator, DynProfileValidator, DynUploadService, DynUserAccountService,
    EmptyUploadPolicy,
};
use crate::domain::navigation::models::{route_decision, Navigation};
use crate::domain::shared::models::UserId;
use crate::domain::uploads::models::SelectedFile;
use crate::domain::user_profiles::models::{
    is_inline_image, FieldErrors, ProfileDraft, ProfileField, UpdateUserRequest, UserRecord,
};
use crate::domain::user_profiles::services::ImageEncoder;

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("The profile is invalid ({0}).")]
    Validation(FieldErrors),

    #[error("The profile is already being submitted.")]
    SubmissionInProgress,

    #[error("Failed to upload the profile photo. Reason: {0:#}")]
    Upload(anyhow::Error),

    #[error("The upload service did not return a URL for the profile photo.")]
    UploadSkipped,

    #[error("Failed to update the user. Reason: {0:#}")]
    Mutation(anyhow::Error),
}

#[derive(Default)]
struct FormState {
    draft: ProfileDraft,
    /// The complete last selection, handed to the upload service on submit.
    files: Vec<SelectedFile>,
    errors: FieldErrors,
}

/// The profile editing form of a single user.
///
/// The form owns the draft and the selected files. It is `Sync`, so the UI
/// can keep editing while a submission is awaiting the network.
pub struct ProfileForm {
    ctx: DynAppContext,
    navigator: DynNavigator,
    profile_validator: DynProfileValidator,
    upload_service: DynUploadService,
    user_account_service: DynUserAccountService,

    user_id: UserId,
    initial_draft: ProfileDraft,
    state: RwLock<FormState>,
    photo_selection: AtomicU64,
    is_submitting: AtomicBool,
}

impl ProfileForm {
    pub(crate) fn new(
        ctx: DynAppContext,
        navigator: DynNavigator,
        profile_validator: DynProfileValidator,
        upload_service: DynUploadService,
        user_account_service: DynUserAccountService,
        user: &UserRecord,
    ) -> Self {
        let draft = ProfileDraft::from_user(user);

        Self {
            ctx,
            navigator,
            profile_validator,
            upload_service,
            user_account_service,
            user_id: user.id.clone(),
            initial_draft: draft.clone(),
            state: RwLock::new(FormState {
                draft,
                ..Default::default()
            }),
            photo_selection: Default::default(),
            is_submitting: Default::default(),
        }
    }
}

impl ProfileForm {
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn draft(&self) -> ProfileDraft {
        self.state.read().draft.clone()
    }

    pub fn value(&self, field: ProfileField) -> String {
        self.state.read().draft.get(field).to_string()
    }

    pub fn set_value(&self, field: ProfileField, value: impl Into<String>) {
        self.state.write().draft.set(field, value);
    }

    pub fn is_dirty(&self) -> bool {
        self.state.read().draft != self.initial_draft
    }

    pub fn dirty_fields(&self) -> Vec<ProfileField> {
        let state = self.state.read();
        ProfileField::iter()
            .filter(|field| state.draft.get(*field) != self.initial_draft.get(*field))
            .collect()
    }

    /// The messages of the last failed validation.
    pub fn field_errors(&self) -> FieldErrors {
        self.state.read().errors.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting.load(Ordering::Acquire)
    }
}

impl ProfileForm {
    /// Buffers `files` for the upload and replaces the photo field with the
    /// inline-encoded first file. Returns the new field value, or `None` if
    /// the field was left untouched because the selection was empty or the
    /// first file is not an image.
    pub fn select_photo(&self, files: Vec<SelectedFile>) -> Option<String> {
        let selection = self.begin_photo_selection();
        self.finish_photo_selection(selection, files)
    }

    /// Reads the files at `paths` and selects them like `select_photo`. If
    /// another selection starts while the files are being read, this one is
    /// discarded.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn select_photo_from_paths(
        &self,
        paths: &[std::path::PathBuf],
    ) -> anyhow::Result<Option<String>> {
        let selection = self.begin_photo_selection();

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            files.push(SelectedFile::open(path).await?);
        }

        Ok(self.finish_photo_selection(selection, files))
    }

    fn begin_photo_selection(&self) -> u64 {
        self.photo_selection.fetch_add(1, Ordering::AcqRel) + 1
    }

    fn finish_photo_selection(&self, selection: u64, files: Vec<SelectedFile>) -> Option<String> {
        if files.is_empty() {
            return None;
        }

        let encoded = ImageEncoder::encode_selection(&files).map(|image| image.to_string());

        let mut state = self.state.write();
        if self.photo_selection.load(Ordering::Acquire) != selection {
            debug!("Discarding outdated photo selection.");
            return None;
        }

        state.files = files;
        let encoded = encoded?;
        state.draft.photo = encoded.clone();

        Some(encoded)
    }
}

impl ProfileForm {
    /// Validates the draft, uploads a newly selected photo, saves the profile
    /// and navigates away. `current_path` is the route the form is shown on.
    pub async fn submit(&self, current_path: &str) -> Result<Navigation, SubmitError> {
        if self.is_submitting.swap(true, Ordering::AcqRel) {
            return Err(SubmitError::SubmissionInProgress);
        }
        let _guard = SubmittingGuard(&self.is_submitting);

        let (mut values, files) = {
            let mut state = self.state.write();

            if let Err(errors) = self.profile_validator.validate(&state.draft) {
                debug!("Profile validation failed: {}", errors);
                state.errors = errors.clone();
                return Err(SubmitError::Validation(errors));
            }

            state.errors = FieldErrors::default();
            (state.draft.clone(), state.files.clone())
        };

        if is_inline_image(&values.photo) {
            debug!("Uploading profile photo…");
            let uploaded_files = self
                .upload_service
                .start_upload(&files)
                .await
                .map_err(SubmitError::Upload)?;

            let file_url = uploaded_files
                .and_then(|files| files.into_iter().next())
                .and_then(|file| file.file_url);

            match (file_url, self.ctx.config.empty_upload_policy) {
                (Some(url), _) => {
                    debug!("Profile photo uploaded to {}.", url);
                    let inline_photo = std::mem::replace(&mut values.photo, url.to_string());

                    // A photo selected during the upload stays in the draft.
                    let mut state = self.state.write();
                    if state.draft.photo == inline_photo {
                        state.draft.photo = values.photo.clone();
                    } else {
                        debug!("Photo changed during upload. Keeping the new selection.");
                    }
                }
                (None, EmptyUploadPolicy::KeepInline) => {
                    warn!("Upload returned no URL. Submitting the inline profile photo.")
                }
                (None, EmptyUploadPolicy::Reject) => return Err(SubmitError::UploadSkipped),
            }
        }

        let request = UpdateUserRequest {
            user_id: self.user_id.clone(),
            username: values.username,
            name: values.name,
            bio: values.bio,
            path: current_path.to_string(),
            image: values.photo,
        };

        debug!("Updating user {}…", self.user_id);
        self.user_account_service
            .update_user(&request)
            .await
            .map_err(SubmitError::Mutation)?;

        let navigation = route_decision(current_path);
        info!("Profile of {} saved. Navigating {:?}.", self.user_id, navigation);
        self.navigator.navigate(&navigation);

        Ok(navigation)
    }
}

struct SubmittingGuard<'a>(&'a AtomicBool);

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[cfg(all(test, feature = "test"))]
mod tests {
    use crate::services::ProfileService;
    use crate::test::{mock_data, MockAppDependencies};

    use super::*;

    #[test]
    fn test_outdated_photo_selection_is_discarded() {
        let deps = MockAppDependencies::default();
        let form = ProfileService::from(&deps.into_deps()).edit_profile(&mock_data::user_record());
        let gif = SelectedFile::new("b.gif", mime::IMAGE_GIF, b"GIF8".to_vec());

        let first = form.begin_photo_selection();
        let second = form.begin_photo_selection();

        assert_eq!(
            form.finish_photo_selection(second, vec![gif.clone()]),
            Some("data:image/gif;base64,R0lGOA==".to_string())
        );
        assert_eq!(
            form.finish_photo_selection(first, vec![mock_data::png_file()]),
            None
        );

        assert_eq!(
            form.value(ProfileField::ProfilePhoto),
            "data:image/gif;base64,R0lGOA=="
        );
        assert_eq!(form.state.read().files, vec![gif]);
    }
}

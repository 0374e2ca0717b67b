// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::debug;

use crate::domain::uploads::models::SelectedFile;
use crate::domain::user_profiles::models::InlineImage;

/// Turns a file selection into the inline representation shown as preview and
/// submitted with the profile until the upload replaced it.
pub struct ImageEncoder;

impl ImageEncoder {
    /// Encodes the first file of `files`. Returns `None` for an empty
    /// selection or when the first file is not an image.
    pub fn encode_selection(files: &[SelectedFile]) -> Option<InlineImage> {
        let file = files.first()?;

        if !file.is_image() {
            debug!(
                "Ignoring selected file {} of type {}.",
                file.file_name, file.media_type
            );
            return None;
        }

        InlineImage::new(file.media_type.clone(), file.data.clone()).ok()
    }
}

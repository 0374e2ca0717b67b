// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use url::Url;

/// One entry of the upload service's response. A missing `file_url` means the
/// service accepted the request but did not host the file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub file_url: Option<Url>,
}

impl UploadedFile {
    pub fn new(file_url: Url) -> Self {
        Self {
            file_url: Some(file_url),
        }
    }
}

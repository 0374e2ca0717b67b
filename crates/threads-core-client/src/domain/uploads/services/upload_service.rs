// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::uploads::models::{SelectedFile, UploadedFile};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UploadService: Send + Sync {
    /// Uploads `files` and returns one entry per hosted file, or `None` if the
    /// service produced no result at all.
    async fn start_upload(&self, files: &[SelectedFile]) -> Result<Option<Vec<UploadedFile>>>;
}

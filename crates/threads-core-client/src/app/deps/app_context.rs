// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::sidebar::models::SidebarLink;
use crate::infra::constants::default_sidebar_links;

/// What to submit when the upload service returns no URL for a freshly
/// selected photo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EmptyUploadPolicy {
    /// Submit the inline-encoded photo as-is.
    #[default]
    KeepInline,
    /// Fail the submission with `SubmitError::UploadSkipped`.
    Reject,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub empty_upload_policy: EmptyUploadPolicy,
    /// The links shown in the bottom bar, in display order.
    pub sidebar_links: Vec<SidebarLink>,
}

#[derive(Debug, Default)]
pub struct AppContext {
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            empty_upload_policy: Default::default(),
            sidebar_links: default_sidebar_links(),
        }
    }
}

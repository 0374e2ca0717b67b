// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::user_profiles::models::{FieldErrors, ProfileDraft};

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ProfileValidator: Send + Sync {
    fn validate(&self, draft: &ProfileDraft) -> Result<(), FieldErrors>;
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::user_profiles::models::UpdateUserRequest;

/// Persists profile changes server-side. Implementations must treat repeated
/// requests for the same user as idempotent updates.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait UserAccountService: Send + Sync {
    async fn update_user(&self, request: &UpdateUserRequest) -> Result<()>;
}

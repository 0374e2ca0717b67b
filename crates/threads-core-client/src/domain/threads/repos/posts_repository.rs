// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::shared::models::{CommunityId, UserId};
use crate::domain::threads::models::{CommunityThreads, UserThreads};

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait PostsRepository: Send + Sync {
    /// Returns `None` if no user with `user_id` exists.
    async fn fetch_user_posts(&self, user_id: &UserId) -> Result<Option<UserThreads>>;
    /// Returns `None` if no community with `community_id` exists.
    async fn fetch_community_posts(
        &self,
        community_id: &CommunityId,
    ) -> Result<Option<CommunityThreads>>;
}

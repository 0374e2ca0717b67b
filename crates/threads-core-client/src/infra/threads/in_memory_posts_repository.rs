// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::shared::models::{CommunityId, UserId};
use crate::domain::threads::models::{CommunityThreads, UserThreads};
use crate::domain::threads::repos::PostsRepository;

/// Serves threads from memory, e.g. for previews or server-rendered
/// snapshots.
#[derive(Default)]
pub struct InMemoryPostsRepository {
    users: RwLock<HashMap<UserId, UserThreads>>,
    communities: RwLock<HashMap<CommunityId, CommunityThreads>>,
}

impl InMemoryPostsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_user(&self, threads: UserThreads) {
        self.users.write().insert(threads.id.clone(), threads);
    }

    pub fn insert_community(&self, threads: CommunityThreads) {
        self.communities.write().insert(threads.id.clone(), threads);
    }
}

#[async_trait]
impl PostsRepository for InMemoryPostsRepository {
    async fn fetch_user_posts(&self, user_id: &UserId) -> Result<Option<UserThreads>> {
        Ok(self.users.read().get(user_id).cloned())
    }

    async fn fetch_community_posts(
        &self,
        community_id: &CommunityId,
    ) -> Result<Option<CommunityThreads>> {
        Ok(self.communities.read().get(community_id).cloned())
    }
}

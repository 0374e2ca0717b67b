// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::info;

use threads_proc_macros::InjectDependencies;

use crate::app::deps::{DynNavigator, DynPostsRepository};
use crate::domain::navigation::models::{Navigation, HOME_ROUTE};
use crate::domain::shared::models::UserId;
use crate::domain::threads::models::{AccountKind, AccountThreads};
use crate::dtos::{ThreadCard, ThreadsTab};

#[derive(InjectDependencies)]
pub struct ThreadsService {
    #[inject]
    navigator: DynNavigator,
    #[inject(posts_repo)]
    posts: DynPostsRepository,
}

impl ThreadsService {
    /// Loads the threads listed on the profile page of a user or community.
    /// Navigates home if the account does not exist.
    pub async fn threads_tab(
        &self,
        current_user_id: &UserId,
        account_id: &str,
        kind: AccountKind,
    ) -> Result<ThreadsTab> {
        let threads: Option<AccountThreads> = match kind {
            AccountKind::Community => self
                .posts
                .fetch_community_posts(&account_id.into())
                .await?
                .map(Into::into),
            AccountKind::User => self
                .posts
                .fetch_user_posts(&account_id.into())
                .await?
                .map(Into::into),
        };

        let Some(threads) = threads else {
            info!("No {} with id {} found. Redirecting home.", kind, account_id);
            let navigation = Navigation::push(HOME_ROUTE);
            self.navigator.navigate(&navigation);
            return Ok(ThreadsTab::Redirected(navigation));
        };

        let cards = threads
            .threads()
            .iter()
            .map(|thread| ThreadCard {
                id: thread.id.clone(),
                current_user_id: current_user_id.clone(),
                parent_id: thread.parent_id.clone(),
                content: thread.text.clone(),
                author: threads.author_of(thread),
                community: thread.community.clone(),
                created_at: thread.created_at,
                comments: thread.children.clone(),
            })
            .collect();

        Ok(ThreadsTab::Threads(cards))
    }
}

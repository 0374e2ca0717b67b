// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};

use crate::domain::navigation::models::Navigation;
use crate::domain::shared::models::{ThreadId, UserId};
use crate::domain::threads::models::{ThreadAuthor, ThreadComment, ThreadCommunity};

#[derive(Debug, Clone, PartialEq)]
pub struct ThreadCard {
    pub id: ThreadId,
    pub current_user_id: UserId,
    pub parent_id: Option<ThreadId>,
    pub content: String,
    pub author: ThreadAuthor,
    pub community: Option<ThreadCommunity>,
    pub created_at: DateTime<Utc>,
    pub comments: Vec<ThreadComment>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThreadsTab {
    Threads(Vec<ThreadCard>),
    /// The account does not exist, the user was sent elsewhere.
    Redirected(Navigation),
}

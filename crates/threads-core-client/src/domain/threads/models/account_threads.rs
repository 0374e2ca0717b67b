// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{CommunityId, UserId};

use super::{AccountKind, Thread, ThreadAuthor};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserThreads {
    pub id: UserId,
    pub name: String,
    pub image: String,
    pub threads: Vec<Thread>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityThreads {
    pub id: CommunityId,
    pub name: String,
    pub image: String,
    pub threads: Vec<Thread>,
}

/// The threads of an account, tagged with the kind of account they were
/// loaded for.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountThreads {
    User(UserThreads),
    Community(CommunityThreads),
}

impl AccountThreads {
    pub fn kind(&self) -> AccountKind {
        match self {
            AccountThreads::User(_) => AccountKind::User,
            AccountThreads::Community(_) => AccountKind::Community,
        }
    }

    pub fn threads(&self) -> &[Thread] {
        match self {
            AccountThreads::User(user) => &user.threads,
            AccountThreads::Community(community) => &community.threads,
        }
    }

    /// The author to display for `thread`. Threads listed on a user's profile
    /// are always by that user, threads listed on a community carry their own
    /// author.
    pub fn author_of(&self, thread: &Thread) -> ThreadAuthor {
        match self {
            AccountThreads::User(user) => ThreadAuthor {
                id: user.id.clone(),
                name: user.name.clone(),
                image: user.image.clone(),
            },
            AccountThreads::Community(_) => thread.author.clone(),
        }
    }
}

impl From<UserThreads> for AccountThreads {
    fn from(value: UserThreads) -> Self {
        AccountThreads::User(value)
    }
}

impl From<CommunityThreads> for AccountThreads {
    fn from(value: CommunityThreads) -> Self {
        AccountThreads::Community(value)
    }
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{CommunityId, ThreadId, UserId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    #[serde(rename = "_id")]
    pub id: ThreadId,
    pub text: String,
    pub parent_id: Option<ThreadId>,
    pub author: ThreadAuthor,
    pub community: Option<ThreadCommunity>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub children: Vec<ThreadComment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadAuthor {
    pub id: UserId,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadCommunity {
    pub id: CommunityId,
    pub name: String,
    pub image: String,
}

/// A reply to a thread. Only the author's image is loaded for the avatar
/// stack shown under a card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadComment {
    pub author: CommentAuthor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub image: String,
}

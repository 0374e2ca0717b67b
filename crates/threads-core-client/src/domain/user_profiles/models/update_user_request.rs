// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::UserId;

/// The payload handed to the user mutation. `path` is the route the form was
/// submitted from so that the server can decide which cached pages to
/// invalidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub bio: String,
    pub path: String,
    pub image: String,
}

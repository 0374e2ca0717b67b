// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use url::Url;

pub use bottombar_item::BottombarItem;
pub use thread_card::{ThreadCard, ThreadsTab};

pub use crate::domain::{
    database::models::{ConnectionState, DatabaseConfig},
    navigation::models::Navigation,
    shared::models::{CommunityId, ThreadId, UserId},
    sidebar::models::SidebarLink,
    threads::models::{
        AccountKind, AccountThreads, CommentAuthor, CommunityThreads, Thread, ThreadAuthor,
        ThreadComment, ThreadCommunity, UserThreads,
    },
    uploads::models::{SelectedFile, UploadedFile},
    user_profiles::models::{
        FieldErrors, InlineImage, PhotoSource, ProfileDraft, ProfileField, UpdateUserRequest,
        UserRecord,
    },
};

mod bottombar_item;
mod thread_card;

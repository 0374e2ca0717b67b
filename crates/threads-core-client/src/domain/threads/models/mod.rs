// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_kind::AccountKind;
pub use account_threads::{AccountThreads, CommunityThreads, UserThreads};
pub use thread::{CommentAuthor, Thread, ThreadAuthor, ThreadComment, ThreadCommunity};

mod account_kind;
mod account_threads;
mod thread;

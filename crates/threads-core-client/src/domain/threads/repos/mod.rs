// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use posts_repository::PostsRepository;

mod posts_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::posts_repository::MockPostsRepository;
}

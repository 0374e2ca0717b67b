// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_posts_repository::InMemoryPostsRepository;

mod in_memory_posts_repository;

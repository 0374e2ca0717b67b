// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AppConfig, EmptyUploadPolicy};
pub use app::{dtos, services};
pub use client::{Client, ClientInner};
pub use client_builder::{
    ClientBuilder, UndefinedPostsRepository, UndefinedUploadService, UndefinedUserAccountService,
};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;

pub mod domain;
pub mod infra;

pub(crate) mod util;

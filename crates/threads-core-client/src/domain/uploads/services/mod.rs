// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use upload_service::UploadService;

mod upload_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::upload_service::MockUploadService;
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use image_encoder::ImageEncoder;
pub use profile_validator::ProfileValidator;
pub use user_account_service::UserAccountService;

mod image_encoder;
mod profile_validator;
mod user_account_service;

pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::profile_validator::MockProfileValidator;
    pub use super::user_account_service::MockUserAccountService;
}

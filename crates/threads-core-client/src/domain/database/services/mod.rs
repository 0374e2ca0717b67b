// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use database_driver::DatabaseDriver;

mod database_driver;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::database_driver::MockDatabaseDriver;
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

/// The database client library.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait DatabaseDriver: Send + Sync {
    fn set_strict_query(&self, enabled: bool);
    async fn connect(&self, url: &str) -> Result<()>;
}

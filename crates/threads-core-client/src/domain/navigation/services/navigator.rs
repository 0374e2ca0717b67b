// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::navigation::models::Navigation;

/// The application router.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate(&self, navigation: &Navigation);
}

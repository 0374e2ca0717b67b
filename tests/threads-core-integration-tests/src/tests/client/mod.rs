// threads-core-client/threads-core-integration-tests
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

mod bottombar;
mod helpers;
mod profile;
mod threads;

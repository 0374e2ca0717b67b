// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod database;
pub mod navigation;
pub mod shared;
pub mod sidebar;
pub mod threads;
pub mod uploads;
pub mod user_profiles;

// threads-core-client/threads-utils
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

extern crate self as threads_utils;

pub use serde;

mod id_string_macro;

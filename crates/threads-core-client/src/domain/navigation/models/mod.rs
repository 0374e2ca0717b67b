// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use navigation::{route_decision, Navigation, EDIT_PROFILE_ROUTE, HOME_ROUTE, SIGN_IN_ROUTE};

mod navigation;

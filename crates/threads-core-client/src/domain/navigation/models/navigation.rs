// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub const HOME_ROUTE: &str = "/";
pub const EDIT_PROFILE_ROUTE: &str = "/profile/edit";
pub const SIGN_IN_ROUTE: &str = "sign-in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Go back one entry in the history.
    Back,
    /// Navigate to the given route.
    Push(String),
}

impl Navigation {
    pub fn push(route: impl Into<String>) -> Self {
        Navigation::Push(route.into())
    }
}

/// Where to go after the profile form was saved. Editing an existing profile
/// returns to the page the user came from, onboarding continues at home.
pub fn route_decision(current_path: &str) -> Navigation {
    if current_path == EDIT_PROFILE_ROUTE {
        Navigation::Back
    } else {
        Navigation::push(HOME_ROUTE)
    }
}

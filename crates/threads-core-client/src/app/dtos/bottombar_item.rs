// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BottombarItem {
    /// The first word of the link's label.
    pub label: String,
    pub route: String,
    pub img_url: String,
    pub is_active: bool,
}

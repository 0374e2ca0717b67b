// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::sidebar::models::SidebarLink;

pub fn default_sidebar_links() -> Vec<SidebarLink> {
    vec![
        SidebarLink::new("/assets/home.svg", "/", "Home"),
        SidebarLink::new("/assets/search.svg", "/search", "Search"),
        SidebarLink::new("/assets/heart.svg", "/activity", "Activity"),
        SidebarLink::new("/assets/create.svg", "/create-thread", "Create Thread"),
        SidebarLink::new("/assets/community.svg", "/communities", "Communities"),
        SidebarLink::new("/assets/user.svg", "/profile", "Profile"),
    ]
}

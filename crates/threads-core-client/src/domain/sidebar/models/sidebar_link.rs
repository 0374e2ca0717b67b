// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarLink {
    pub img_url: String,
    pub route: String,
    pub label: String,
}

impl SidebarLink {
    pub fn new(
        img_url: impl Into<String>,
        route: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            img_url: img_url.into(),
            route: route.into(),
            label: label.into(),
        }
    }

    /// A link is active on its own route and on every route below it. The root
    /// route only matches itself. A plain substring check would keep Home
    /// active on every page.
    pub fn is_active(&self, current_path: &str) -> bool {
        (self.route.len() > 1 && current_path.contains(self.route.as_str()))
            || current_path == self.route
    }

    /// The first word of the label, used where space is tight.
    pub fn short_label(&self) -> &str {
        self.label.split_whitespace().next().unwrap_or_default()
    }
}

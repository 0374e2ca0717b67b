// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use tracing::debug;

use crate::domain::navigation::models::{Navigation, HOME_ROUTE};
use crate::domain::navigation::services::Navigator;

/// An in-memory browser history. Going back from the first entry is a no-op.
pub struct HistoryNavigator {
    entries: RwLock<Vec<String>>,
}

impl HistoryNavigator {
    pub fn new(initial_route: impl Into<String>) -> Self {
        Self {
            entries: RwLock::new(vec![initial_route.into()]),
        }
    }

    pub fn current_route(&self) -> String {
        self.entries.read().last().cloned().unwrap_or_default()
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.read().clone()
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(HOME_ROUTE)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&self, navigation: &Navigation) {
        let mut entries = self.entries.write();

        match navigation {
            Navigation::Back if entries.len() > 1 => {
                entries.pop();
            }
            Navigation::Back => debug!("Ignoring back navigation on first history entry."),
            Navigation::Push(route) => entries.push(route.clone()),
        }
    }
}

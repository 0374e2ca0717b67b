// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::info;

use threads_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynNavigator};
use crate::domain::navigation::models::{Navigation, SIGN_IN_ROUTE};
use crate::dtos::BottombarItem;

#[derive(InjectDependencies)]
pub struct BottombarService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    navigator: DynNavigator,
}

impl BottombarService {
    pub fn items(&self, current_path: &str) -> Vec<BottombarItem> {
        self.ctx
            .config
            .sidebar_links
            .iter()
            .map(|link| BottombarItem {
                label: link.short_label().to_string(),
                route: link.route.clone(),
                img_url: link.img_url.clone(),
                is_active: link.is_active(current_path),
            })
            .collect()
    }

    pub fn sign_out(&self) {
        info!("Signing out.");
        self.navigator.navigate(&Navigation::push(SIGN_IN_ROUTE));
    }
}

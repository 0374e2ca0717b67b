// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::domain::navigation::services::Navigator;
use crate::domain::threads::repos::PostsRepository;
use crate::domain::uploads::services::UploadService;
use crate::domain::user_profiles::services::{ProfileValidator, UserAccountService};

pub(crate) type DynAppContext = Arc<AppContext>;
pub(crate) type DynNavigator = Arc<dyn Navigator>;
pub(crate) type DynPostsRepository = Arc<dyn PostsRepository>;
pub(crate) type DynProfileValidator = Arc<dyn ProfileValidator>;
pub(crate) type DynUploadService = Arc<dyn UploadService>;
pub(crate) type DynUserAccountService = Arc<dyn UserAccountService>;

pub struct AppDependencies {
    pub ctx: DynAppContext,
    pub navigator: DynNavigator,
    pub posts_repo: DynPostsRepository,
    pub profile_validator: DynProfileValidator,
    pub upload_service: DynUploadService,
    pub user_account_service: DynUserAccountService,
}

// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynNavigator, DynPostsRepository,
    DynProfileValidator, DynUploadService, DynUserAccountService,
};
use crate::client::ClientInner;
use crate::domain::navigation::services::Navigator;
use crate::domain::threads::repos::PostsRepository;
use crate::domain::uploads::services::UploadService;
use crate::domain::user_profiles::services::impls::UserValidation;
use crate::domain::user_profiles::services::{ProfileValidator, UserAccountService};
use crate::infra::navigation::HistoryNavigator;
use crate::services::{BottombarService, ProfileService, ThreadsService};
use crate::Client;

pub struct UndefinedUploadService;
pub struct UndefinedUserAccountService;
pub struct UndefinedPostsRepository;

pub struct ClientBuilder<U, A, P> {
    config: AppConfig,
    navigator: DynNavigator,
    posts_repo: P,
    profile_validator: DynProfileValidator,
    upload_service: U,
    user_account_service: A,
}

impl ClientBuilder<UndefinedUploadService, UndefinedUserAccountService, UndefinedPostsRepository> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            config: Default::default(),
            navigator: Arc::new(HistoryNavigator::default()),
            posts_repo: UndefinedPostsRepository,
            profile_validator: Arc::new(UserValidation),
            upload_service: UndefinedUploadService,
            user_account_service: UndefinedUserAccountService,
        }
    }
}

impl<A, P> ClientBuilder<UndefinedUploadService, A, P> {
    pub fn set_upload_service(
        self,
        upload_service: impl UploadService + 'static,
    ) -> ClientBuilder<DynUploadService, A, P> {
        ClientBuilder {
            config: self.config,
            navigator: self.navigator,
            posts_repo: self.posts_repo,
            profile_validator: self.profile_validator,
            upload_service: Arc::new(upload_service),
            user_account_service: self.user_account_service,
        }
    }
}

impl<U, P> ClientBuilder<U, UndefinedUserAccountService, P> {
    pub fn set_user_account_service(
        self,
        user_account_service: impl UserAccountService + 'static,
    ) -> ClientBuilder<U, DynUserAccountService, P> {
        ClientBuilder {
            config: self.config,
            navigator: self.navigator,
            posts_repo: self.posts_repo,
            profile_validator: self.profile_validator,
            upload_service: self.upload_service,
            user_account_service: Arc::new(user_account_service),
        }
    }
}

impl<U, A> ClientBuilder<U, A, UndefinedPostsRepository> {
    pub fn set_posts_repository(
        self,
        posts_repo: impl PostsRepository + 'static,
    ) -> ClientBuilder<U, A, DynPostsRepository> {
        ClientBuilder {
            config: self.config,
            navigator: self.navigator,
            posts_repo: Arc::new(posts_repo),
            profile_validator: self.profile_validator,
            upload_service: self.upload_service,
            user_account_service: self.user_account_service,
        }
    }
}

impl<U, A, P> ClientBuilder<U, A, P> {
    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default in-memory history.
    pub fn set_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn set_profile_validator(mut self, validator: impl ProfileValidator + 'static) -> Self {
        self.profile_validator = Arc::new(validator);
        self
    }
}

impl ClientBuilder<DynUploadService, DynUserAccountService, DynPostsRepository> {
    pub fn build(self) -> Client {
        let ctx = Arc::new(AppContext::new(self.config));

        let dependencies = AppDependencies {
            ctx: ctx.clone(),
            navigator: self.navigator,
            posts_repo: self.posts_repo,
            profile_validator: self.profile_validator,
            upload_service: self.upload_service,
            user_account_service: self.user_account_service,
        };

        let client_inner = Arc::new(ClientInner {
            bottombar: BottombarService::from(&dependencies),
            profile: ProfileService::from(&dependencies),
            threads: ThreadsService::from(&dependencies),
            ctx,
        });

        Client::from(client_inner)
    }
}

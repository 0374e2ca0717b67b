// threads-core-client/threads-core-client
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use crate::app::deps::{AppConfig, DynAppContext};
use crate::client_builder::{
    ClientBuilder, UndefinedPostsRepository, UndefinedUploadService, UndefinedUserAccountService,
};
use crate::services::{BottombarService, ProfileService, ThreadsService};

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

impl Client {
    pub fn builder(
    ) -> ClientBuilder<UndefinedUploadService, UndefinedUserAccountService, UndefinedPostsRepository>
    {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub bottombar: BottombarService,
    pub profile: ProfileService,
    pub threads: ThreadsService,
    pub(crate) ctx: DynAppContext,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub fn config(&self) -> &AppConfig {
        &self.ctx.config
    }
}

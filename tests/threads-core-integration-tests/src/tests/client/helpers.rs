// threads-core-client/threads-core-integration-tests
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{format_err, Result};
use async_trait::async_trait;
use parking_lot::Mutex;

use threads_core_client::domain::navigation::services::Navigator;
use threads_core_client::domain::threads::repos::PostsRepository;
use threads_core_client::domain::uploads::services::UploadService;
use threads_core_client::domain::user_profiles::services::UserAccountService;
use threads_core_client::dtos::{
    CommunityId, CommunityThreads, Navigation, SelectedFile, UpdateUserRequest, UploadedFile, Url,
    UserId, UserThreads,
};
use threads_core_client::infra::navigation::HistoryNavigator;
use threads_core_client::infra::threads::InMemoryPostsRepository;
use threads_core_client::{AppConfig, Client};

/// Hosts every uploaded file under `base_url` and remembers what was uploaded.
struct TestUploadService {
    base_url: Url,
    uploads: Arc<Mutex<Vec<SelectedFile>>>,
}

#[async_trait]
impl UploadService for TestUploadService {
    async fn start_upload(&self, files: &[SelectedFile]) -> Result<Option<Vec<UploadedFile>>> {
        self.uploads.lock().extend_from_slice(files);

        let uploaded_files = files
            .iter()
            .map(|file| Ok(UploadedFile::new(self.base_url.join(&file.file_name)?)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(uploaded_files))
    }
}

/// Records every update. Usernames in `taken_usernames` are rejected.
struct TestUserAccountService {
    taken_usernames: Vec<String>,
    updates: Arc<Mutex<Vec<UpdateUserRequest>>>,
}

#[async_trait]
impl UserAccountService for TestUserAccountService {
    async fn update_user(&self, request: &UpdateUserRequest) -> Result<()> {
        if self.taken_usernames.contains(&request.username) {
            return Err(format_err!("Username {} is taken", request.username));
        }
        self.updates.lock().push(request.clone());
        Ok(())
    }
}

/// Gives the test a handle to the repository the client reads from.
struct SharedPostsRepository(Arc<InMemoryPostsRepository>);

#[async_trait]
impl PostsRepository for SharedPostsRepository {
    async fn fetch_user_posts(&self, user_id: &UserId) -> Result<Option<UserThreads>> {
        self.0.fetch_user_posts(user_id).await
    }

    async fn fetch_community_posts(
        &self,
        community_id: &CommunityId,
    ) -> Result<Option<CommunityThreads>> {
        self.0.fetch_community_posts(community_id).await
    }
}

pub struct TestClient {
    pub client: Client,
    pub navigator: Arc<HistoryNavigator>,
    pub posts_repo: Arc<InMemoryPostsRepository>,
    pub uploads: Arc<Mutex<Vec<SelectedFile>>>,
    pub updates: Arc<Mutex<Vec<UpdateUserRequest>>>,
}

impl TestClient {
    pub const UPLOAD_BASE_URL: &'static str = "https://utfs.io/f/";

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TestClientBuilder {
        TestClientBuilder::default()
    }

    /// Pushes `route` onto the history, as if the user followed a link.
    pub fn visit(&self, route: &str) {
        self.navigator.navigate(&Navigation::push(route));
    }
}

#[derive(Default)]
pub struct TestClientBuilder {
    config: AppConfig,
    taken_usernames: Vec<String>,
}

impl TestClientBuilder {
    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn set_taken_usernames(mut self, usernames: &[&str]) -> Self {
        self.taken_usernames = usernames.iter().map(ToString::to_string).collect();
        self
    }

    pub fn build(self) -> TestClient {
        let navigator = Arc::new(HistoryNavigator::default());
        let posts_repo = Arc::new(InMemoryPostsRepository::new());
        let uploads = Arc::new(Mutex::new(vec![]));
        let updates = Arc::new(Mutex::new(vec![]));

        let client = Client::builder()
            .set_config(self.config)
            .set_navigator(navigator.clone())
            .set_posts_repository(SharedPostsRepository(posts_repo.clone()))
            .set_upload_service(TestUploadService {
                base_url: TestClient::UPLOAD_BASE_URL
                    .parse()
                    .expect("Invalid upload base URL"),
                uploads: uploads.clone(),
            })
            .set_user_account_service(TestUserAccountService {
                taken_usernames: self.taken_usernames,
                updates: updates.clone(),
            })
            .build();

        TestClient {
            client,
            navigator,
            posts_repo,
            uploads,
            updates,
        }
    }
}

// threads-core-client/threads-core-integration-tests
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use pretty_assertions::assert_eq;

use threads_core_client::dtos::SidebarLink;
use threads_core_client::AppConfig;

use super::helpers::TestClient;

#[tokio::test]
async fn test_bottombar_follows_navigation() {
    let client = TestClient::new();

    let active_label = |client: &TestClient| {
        client
            .client
            .bottombar
            .items(&client.navigator.current_route())
            .into_iter()
            .filter(|item| item.is_active)
            .map(|item| item.label)
            .collect::<Vec<_>>()
    };

    assert_eq!(active_label(&client), vec!["Home"]);

    client.visit("/communities/org_rust");
    assert_eq!(active_label(&client), vec!["Communities"]);

    client.client.bottombar.sign_out();
    assert_eq!(client.navigator.current_route(), "sign-in");
    assert!(active_label(&client).is_empty());
}

#[tokio::test]
async fn test_bottombar_uses_configured_links() {
    let client = TestClient::builder()
        .set_config(AppConfig {
            sidebar_links: vec![
                SidebarLink::new("/assets/home.svg", "/", "Home"),
                SidebarLink::new("/assets/bookmark.svg", "/saved", "Saved Threads"),
            ],
            ..Default::default()
        })
        .build();

    assert_eq!(client.client.config().sidebar_links.len(), 2);
    assert_eq!(
        client
            .client
            .bottombar
            .items("/saved")
            .into_iter()
            .map(|item| (item.label, item.is_active))
            .collect::<Vec<_>>(),
        vec![("Home".to_string(), false), ("Saved".to_string(), true)]
    );
}

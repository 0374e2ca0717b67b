// threads-core-client/threads-core-integration-tests
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use threads_core_client::dtos::{
    AccountKind, CommunityThreads, Thread, ThreadAuthor, ThreadCommunity, ThreadsTab, UserThreads,
};

use super::helpers::TestClient;

fn thread(id: &str, text: &str, author: ThreadAuthor) -> Thread {
    Thread {
        id: id.into(),
        text: text.to_string(),
        parent_id: None,
        author,
        community: None,
        created_at: Utc.with_ymd_and_hms(2024, 1, 12, 9, 30, 0).unwrap(),
        children: vec![],
    }
}

fn author(id: &str, name: &str) -> ThreadAuthor {
    ThreadAuthor {
        id: id.into(),
        name: name.to_string(),
        image: format!("https://utfs.io/f/{id}.png"),
    }
}

#[tokio::test]
async fn test_shows_user_and_community_threads() -> Result<()> {
    let client = TestClient::new();
    let rustaceans = ThreadCommunity {
        id: "org_rust".into(),
        name: "Rustaceans".to_string(),
        image: "https://utfs.io/f/org_rust.png".to_string(),
    };

    client.posts_repo.insert_user(UserThreads {
        id: "user_jane".into(),
        name: "Jane Doe".to_string(),
        image: "https://utfs.io/f/user_jane.png".to_string(),
        threads: vec![thread("t1", "First!", author("user_jane", "Jane"))],
    });
    client.posts_repo.insert_community(CommunityThreads {
        id: rustaceans.id.clone(),
        name: rustaceans.name.clone(),
        image: rustaceans.image.clone(),
        threads: vec![
            Thread {
                community: Some(rustaceans.clone()),
                ..thread("t2", "Borrowck tips", author("user_bob", "Bob"))
            },
            thread("t3", "Async traits", author("user_alice", "Alice")),
        ],
    });

    let ThreadsTab::Threads(user_cards) = client
        .client
        .threads
        .threads_tab(&"user_jane".into(), "user_jane", AccountKind::User)
        .await?
    else {
        panic!("Expected threads of user_jane.");
    };
    assert_eq!(user_cards.len(), 1);
    assert_eq!(user_cards[0].author, author("user_jane", "Jane Doe"));

    let ThreadsTab::Threads(community_cards) = client
        .client
        .threads
        .threads_tab(&"user_jane".into(), "org_rust", "Community".parse()?)
        .await?
    else {
        panic!("Expected threads of org_rust.");
    };
    assert_eq!(
        community_cards
            .iter()
            .map(|card| (card.content.as_str(), card.author.name.as_str()))
            .collect::<Vec<_>>(),
        vec![("Borrowck tips", "Bob"), ("Async traits", "Alice")]
    );
    assert_eq!(community_cards[0].community, Some(rustaceans));
    assert_eq!(client.navigator.entries(), vec!["/".to_string()]);

    Ok(())
}

#[tokio::test]
async fn test_unknown_community_redirects_home() -> Result<()> {
    let client = TestClient::new();
    client.visit("/communities/org_gone");

    let tab = client
        .client
        .threads
        .threads_tab(&"user_jane".into(), "org_gone", AccountKind::Community)
        .await?;

    assert!(matches!(tab, ThreadsTab::Redirected(_)));
    assert_eq!(client.navigator.current_route(), "/");

    Ok(())
}

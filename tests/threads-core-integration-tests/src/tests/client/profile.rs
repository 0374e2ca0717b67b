// threads-core-client/threads-core-integration-tests
//
// Copyright: 2024, The threads-core-client authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use threads_core_client::dtos::{
    Navigation, ProfileField, SelectedFile, UpdateUserRequest, UserRecord,
};
use threads_core_client::services::SubmitError;

use super::helpers::TestClient;

fn user() -> UserRecord {
    UserRecord {
        id: "user_2aXk".into(),
        object_id: "65a1f0c2e4b0".to_string(),
        username: Some("jane_doe".to_string()),
        name: Some("Jane Doe".to_string()),
        bio: None,
        image: None,
    }
}

#[tokio::test]
async fn test_edit_profile_uploads_photo_and_returns_to_previous_page() -> Result<()> {
    let client = TestClient::new();
    client.visit("/profile/user_2aXk");
    client.visit("/profile/edit");

    let form = client.client.profile.edit_profile(&user());
    assert_eq!(form.value(ProfileField::Bio), "");
    assert_eq!(form.value(ProfileField::ProfilePhoto), "");

    let avatar = SelectedFile::new("avatar.png", "image/png".parse()?, b"\x89PNG".to_vec());
    form.select_photo(vec![avatar.clone()]);
    form.set_value(ProfileField::Bio, "Writing about Rust and coffee.");

    assert_eq!(form.submit("/profile/edit").await?, Navigation::Back);

    assert_eq!(*client.uploads.lock(), vec![avatar]);
    assert_eq!(
        *client.updates.lock(),
        vec![UpdateUserRequest {
            user_id: "user_2aXk".into(),
            username: "jane_doe".to_string(),
            name: "Jane Doe".to_string(),
            bio: "Writing about Rust and coffee.".to_string(),
            path: "/profile/edit".to_string(),
            image: "https://utfs.io/f/avatar.png".to_string(),
        }]
    );
    assert_eq!(
        client.navigator.entries(),
        vec!["/".to_string(), "/profile/user_2aXk".to_string()]
    );

    Ok(())
}

#[tokio::test]
async fn test_onboarding_navigates_home() -> Result<()> {
    let client = TestClient::new();
    client.visit("/onboarding");

    let form = client.client.profile.edit_profile(&user());
    form.set_value(ProfileField::ProfilePhoto, "https://utfs.io/f/existing.png");
    form.set_value(ProfileField::Bio, "Hello there");

    assert_eq!(
        form.submit("/onboarding").await?,
        Navigation::Push("/".to_string())
    );

    assert!(client.uploads.lock().is_empty());
    assert_eq!(client.updates.lock().len(), 1);
    assert_eq!(client.navigator.current_route(), "/");
    assert_eq!(client.navigator.entries().len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_missing_fields_are_reported_without_submitting() -> Result<()> {
    let client = TestClient::new();
    client.visit("/profile/edit");

    let form = client.client.profile.edit_profile(&user());

    let Err(SubmitError::Validation(errors)) = form.submit("/profile/edit").await else {
        panic!("Expected a validation error.");
    };

    assert_eq!(errors.get(ProfileField::ProfilePhoto), Some("Required"));
    assert_eq!(errors.get(ProfileField::Bio), Some("Minimum 3 characters."));
    assert!(client.updates.lock().is_empty());
    assert_eq!(client.navigator.current_route(), "/profile/edit");

    Ok(())
}

#[tokio::test]
async fn test_rejected_update_keeps_the_form_open() -> Result<()> {
    let client = TestClient::builder()
        .set_taken_usernames(&["jane"])
        .build();
    client.visit("/profile/edit");

    let form = client.client.profile.edit_profile(&user());
    form.set_value(ProfileField::ProfilePhoto, "https://utfs.io/f/existing.png");
    form.set_value(ProfileField::Bio, "Hello there");
    form.set_value(ProfileField::Username, "jane");

    let err = form.submit("/profile/edit").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Failed to update the user. Reason: Username jane is taken"
    );
    assert_eq!(client.navigator.current_route(), "/profile/edit");
    assert_eq!(form.value(ProfileField::Username), "jane");

    // The user picks another name and tries again.
    form.set_value(ProfileField::Username, "jane_writes");
    assert_eq!(form.submit("/profile/edit").await?, Navigation::Back);
    assert_eq!(client.navigator.current_route(), "/");

    Ok(())
}

#[tokio::test]
async fn test_select_photo_from_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("portrait.jfif");
    std::fs::write(&path, b"\xff\xd8\xff")?;

    let client = TestClient::new();
    let form = client.client.profile.edit_profile(&user());

    assert_eq!(
        form.select_photo_from_paths(&[path]).await?,
        Some("data:image/jpeg;base64,/9j/".to_string())
    );

    Ok(())
}

use domain::UserRole;
use terra_storage::{InMemoryUserStore, MockStore, NewUser, SeedOptions, StorageError, UserStore};

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password: "secret".to_string(),
        institution: None,
    }
}

#[tokio::test]
async fn find_seeded_researcher() {
    let store = MockStore::seeded(SeedOptions::default());
    let user = store
        .users
        .get_user_by_email("s.chen@conservation.org")
        .await
        .expect("researcher");
    assert_eq!(user.id, 1);
    assert_eq!(user.username, "dr.sarah.chen");
    assert_eq!(user.role, UserRole::Researcher);
    assert!(user.is_researcher);
    assert_eq!(user.institution.as_deref(), Some("Stanford Marine Lab"));

    let by_name = store
        .users
        .get_user_by_username("dr.sarah.chen")
        .await
        .expect("by username");
    assert_eq!(by_name, user);
}

#[tokio::test]
async fn missing_user_is_none() {
    let store = MockStore::seeded(SeedOptions::default());
    assert!(store.users.get_user(999).await.is_none());
    assert!(store.users.get_user_by_email("nobody@example.org").await.is_none());
    assert!(store.users.get_user_by_username("nobody").await.is_none());
}

#[tokio::test]
async fn create_user_applies_defaults_and_reads_back() {
    let store = InMemoryUserStore::new();
    let created = store
        .create_user(new_user("river", "river@example.org"))
        .await
        .expect("create");
    assert_eq!(created.id, 1);
    assert_eq!(created.role, UserRole::User);
    assert!(!created.is_researcher);
    assert!(created.institution.is_none());

    let fetched = store.get_user(created.id).await.expect("read back");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn duplicate_username_or_email_is_rejected() {
    let store = InMemoryUserStore::new();
    store
        .create_user(new_user("river", "river@example.org"))
        .await
        .expect("first");

    let err = store
        .create_user(new_user("river", "other@example.org"))
        .await
        .unwrap_err();
    assert_eq!(err, StorageError::conflict("username", "river"));

    let err = store
        .create_user(new_user("delta", "river@example.org"))
        .await
        .unwrap_err();
    assert_eq!(err, StorageError::conflict("email", "river@example.org"));

    // 被拒绝的插入不消耗 id
    let next = store
        .create_user(new_user("delta", "delta@example.org"))
        .await
        .expect("second");
    assert_eq!(next.id, 2);
}

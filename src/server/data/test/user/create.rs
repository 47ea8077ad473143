use super::*;

/// Tests creating a profile and reading it back by username.
///
/// Expected: Ok with every submitted field stored
#[tokio::test]
async fn creates_and_finds_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(profile("alice")).await?;

    assert_eq!(created.username, "alice");
    assert_eq!(created.email, "alice@example.com");
    assert_eq!(created.city.as_deref(), Some("Lyon"));
    assert_eq!(created.created_at, created.updated_at);

    let found = repo.find_by_username("alice").await?;
    assert_eq!(found, Some(created));

    Ok(())
}

/// Tests that the username is a primary key.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(profile("alice")).await?;

    let result = repo.create(profile("alice")).await;
    assert!(result.is_err());

    Ok(())
}

#[tokio::test]
async fn find_returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db).find_by_username("ghost").await?;
    assert!(found.is_none());

    Ok(())
}

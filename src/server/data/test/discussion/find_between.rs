use super::*;

/// Tests that participant order does not matter.
///
/// Verifies that a discussion opened by alice towards bob is found when bob
/// looks it up towards alice.
///
/// Expected: Ok(Some) in both directions
#[tokio::test]
async fn matches_either_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discussion = factory::create_discussion(db, "alice", "bob").await?;
    let repo = DiscussionRepository::new(db);

    let forward = repo.find_between("alice", "bob", None).await?;
    let backward = repo.find_between("bob", "alice", None).await?;

    assert_eq!(forward.map(|d| d.id), Some(discussion.id));
    assert_eq!(backward.map(|d| d.id), Some(discussion.id));

    Ok(())
}

/// Tests that the announcement is part of a discussion's identity.
///
/// Verifies that a discussion about one announcement is neither returned for
/// another announcement nor for the announcement-less conversation.
///
/// Expected: Ok(None) for every other scope
#[tokio::test]
async fn scopes_by_announcement() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let about_seven = factory::discussion::DiscussionFactory::new(db, "alice", "bob")
        .announcement(7)
        .build()
        .await?;
    let repo = DiscussionRepository::new(db);

    assert_eq!(
        repo.find_between("bob", "alice", Some(7)).await?.map(|d| d.id),
        Some(about_seven.id)
    );
    assert!(repo.find_between("alice", "bob", Some(8)).await?.is_none());
    assert!(repo.find_between("alice", "bob", None).await?.is_none());

    Ok(())
}

#[tokio::test]
async fn ignores_other_participants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_discussion(db, "alice", "bob").await?;
    let repo = DiscussionRepository::new(db);

    assert!(repo.find_between("alice", "carol", None).await?.is_none());
    assert!(repo.find_between("carol", "bob", None).await?.is_none());

    Ok(())
}

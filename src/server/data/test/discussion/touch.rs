use super::*;

/// Tests bumping a discussion's activity timestamp.
///
/// Expected: `updated_at` changes on the touched discussion only
#[tokio::test]
async fn updates_only_the_given_discussion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let touched = factory::create_discussion(db, "alice", "bob").await?;
    let untouched = factory::create_discussion(db, "alice", "carol").await?;
    let repo = DiscussionRepository::new(db);

    repo.touch(touched.id).await?;

    let touched_after = repo.find_by_id(touched.id).await?.unwrap();
    let untouched_after = repo.find_by_id(untouched.id).await?.unwrap();

    assert_ne!(touched_after.updated_at, touched.updated_at);
    assert_eq!(touched_after.created_at, touched.created_at);
    assert_eq!(untouched_after.updated_at, untouched.updated_at);

    Ok(())
}

use super::*;

/// Tests listing a user's discussions.
///
/// Verifies that discussions where the user is either sender or recipient are
/// returned, most recently active first.
///
/// Expected: Ok with the two discussions involving alice, latest activity first
#[tokio::test]
async fn lists_most_recent_activity_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let quiet = factory::discussion::DiscussionFactory::new(db, "alice", "bob")
        .updated_at_offset(10)
        .build()
        .await?;
    let busy = factory::discussion::DiscussionFactory::new(db, "carol", "alice")
        .updated_at_offset(20)
        .build()
        .await?;
    factory::create_discussion(db, "bob", "carol").await?;

    let discussions = DiscussionRepository::new(db).get_for_user("alice").await?;

    let ids: Vec<i32> = discussions.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![busy.id, quiet.id]);

    Ok(())
}

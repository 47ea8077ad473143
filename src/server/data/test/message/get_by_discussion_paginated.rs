use super::*;

/// Tests reading a conversation page by page.
///
/// Verifies that messages come oldest first, that messages from other
/// discussions are excluded and that the total covers the whole conversation.
///
/// Expected: Ok with pages [m1, m2] and [m3]
#[tokio::test]
async fn pages_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discussion = factory::create_discussion(db, "alice", "bob").await?;
    let other = factory::create_discussion(db, "alice", "carol").await?;

    let m1 = factory::create_message(db, discussion.id, "alice", "one").await?;
    factory::create_message(db, other.id, "carol", "elsewhere").await?;
    let m2 = factory::create_message(db, discussion.id, "bob", "two").await?;
    let m3 = factory::create_message(db, discussion.id, "alice", "three").await?;

    let repo = MessageRepository::new(db);
    let first = repo
        .get_by_discussion_paginated(discussion.id, PageParams { page: 0, per_page: 2 })
        .await?;
    let second = repo
        .get_by_discussion_paginated(discussion.id, PageParams { page: 1, per_page: 2 })
        .await?;

    assert_eq!(first.total, 3);
    assert_eq!(
        first.items.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![m1.id, m2.id]
    );
    assert_eq!(
        second.items.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![m3.id]
    );

    Ok(())
}

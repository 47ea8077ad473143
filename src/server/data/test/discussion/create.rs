use super::*;

#[tokio::test]
async fn creates_discussion_with_equal_timestamps() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscussionRepository::new(db);
    let created = repo
        .create(OpenDiscussionParams {
            sender_username: "alice".to_string(),
            recipient_username: "bob".to_string(),
            announcement_id: Some(3),
        })
        .await?;

    assert_eq!(created.announcement_id, Some(3));
    assert_eq!(created.created_at, created.updated_at);
    assert!(created.has_participant("alice"));
    assert!(created.has_participant("bob"));
    assert!(!created.has_participant("carol"));
    assert_eq!(repo.find_by_id(created.id).await?, Some(created));

    Ok(())
}

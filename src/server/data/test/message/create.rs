use super::*;

#[tokio::test]
async fn stores_message_in_discussion() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_chat_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let discussion = factory::create_discussion(db, "alice", "bob").await?;

    let message = MessageRepository::new(db)
        .create(SendMessageParams {
            discussion_id: discussion.id,
            sender_username: "bob".to_string(),
            content: "Hello!".to_string(),
        })
        .await?;

    assert_eq!(message.discussion_id, discussion.id);
    assert_eq!(message.sender_username, "bob");
    assert_eq!(message.content, "Hello!");

    Ok(())
}

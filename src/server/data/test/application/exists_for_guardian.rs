use super::*;

#[tokio::test]
async fn matches_announcement_and_guardian_together() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_announcement(db, "owner").await?;
    let second = factory::create_announcement(db, "owner").await?;
    factory::create_application(db, first.id, "bob").await?;

    let repo = ApplicationRepository::new(db);
    assert!(repo.exists_for_guardian(first.id, "bob").await?);
    assert!(!repo.exists_for_guardian(second.id, "bob").await?);
    assert!(!repo.exists_for_guardian(first.id, "carol").await?);

    Ok(())
}

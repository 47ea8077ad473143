use super::*;

#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_announcement_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_announcement(db, "owner").await?;
    let second = factory::create_announcement(db, "owner").await?;
    let older = factory::create_application(db, first.id, "bob").await?;
    factory::create_application(db, first.id, "carol").await?;
    let newer = factory::create_application(db, second.id, "bob").await?;

    let applications = ApplicationRepository::new(db).get_by_guardian("bob").await?;

    let ids: Vec<i32> = applications.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

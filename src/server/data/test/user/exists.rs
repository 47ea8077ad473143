use super::*;

#[tokio::test]
async fn detects_existing_profiles_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.exists(&user.username).await?);
    assert!(!repo.exists("someone-else").await?);

    Ok(())
}

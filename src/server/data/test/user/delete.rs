use super::*;

/// Tests deleting a profile twice.
///
/// Expected: Ok(true) the first time, Ok(false) once the row is gone
#[tokio::test]
async fn reports_whether_a_row_was_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.delete(&user.username).await?);
    assert!(!repo.delete(&user.username).await?);
    assert!(repo.find_by_username(&user.username).await?.is_none());

    Ok(())
}

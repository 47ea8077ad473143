use super::*;

/// Tests replacing the editable fields of a profile.
///
/// Verifies that every editable field is overwritten, optional fields can be
/// cleared and `created_at` is preserved.
///
/// Expected: Ok with updated fields
#[tokio::test]
async fn replaces_editable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo.create(profile("alice")).await?;

    let updated = repo
        .update(UpsertUserParams {
            email: "new@example.com".to_string(),
            first_name: "Alicia".to_string(),
            city: None,
            bio: Some("Loves dogs".to_string()),
            ..profile("alice")
        })
        .await?;

    assert_eq!(updated.email, "new@example.com");
    assert_eq!(updated.first_name, "Alicia");
    assert_eq!(updated.city, None);
    assert_eq!(updated.bio.as_deref(), Some("Loves dogs"));
    assert_eq!(updated.created_at, created.created_at);

    Ok(())
}

/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).update(profile("ghost")).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

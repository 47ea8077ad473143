use super::*;

/// Tests listing the ratings a user received.
///
/// Expected: Ok with only the recipient's ratings, newest first
#[tokio::test]
async fn pages_newest_first_for_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avis)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oldest = factory::create_avis(db, "alice", "bob", 5).await?;
    factory::create_avis(db, "alice", "carol", 3).await?;
    let middle = factory::create_avis(db, "dave", "bob", 2).await?;
    let newest = factory::create_avis(db, "erin", "bob", 4).await?;

    let repo = RatingRepository::new(db);
    let first = repo
        .get_by_recipient_paginated("bob", PageParams { page: 0, per_page: 2 })
        .await?;
    let second = repo
        .get_by_recipient_paginated("bob", PageParams { page: 1, per_page: 2 })
        .await?;

    assert_eq!(first.total, 3);
    assert_eq!(first.total_pages(), 2);
    assert_eq!(
        first.items.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![newest.id, middle.id]
    );
    assert_eq!(
        second.items.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![oldest.id]
    );

    Ok(())
}

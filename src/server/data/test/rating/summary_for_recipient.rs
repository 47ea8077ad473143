use super::*;

/// Tests the average and count of a user's ratings.
///
/// Expected: average 11/3 over three ratings, other recipients excluded
#[tokio::test]
async fn averages_received_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avis)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_avis(db, "alice", "bob", 5).await?;
    factory::create_avis(db, "carol", "bob", 4).await?;
    factory::create_avis(db, "dave", "bob", 2).await?;
    factory::create_avis(db, "bob", "alice", 1).await?;

    let summary = RatingRepository::new(db).summary_for_recipient("bob").await?;

    assert_eq!(summary.recipient_username, "bob");
    assert_eq!(summary.count, 3);
    let average = summary.average.unwrap();
    assert!((average - 11.0 / 3.0).abs() < 1e-9);

    Ok(())
}

/// Expected: no average and a zero count
#[tokio::test]
async fn empty_for_unrated_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Avis)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let summary = RatingRepository::new(db).summary_for_recipient("nobody").await?;

    assert_eq!(summary.average, None);
    assert_eq!(summary.count, 0);

    Ok(())
}

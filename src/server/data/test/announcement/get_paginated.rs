use super::*;

fn params(page: u64, per_page: u64, city: Option<&str>) -> GetAnnouncementsParams {
    GetAnnouncementsParams {
        page: PageParams { page, per_page },
        city: city.map(str::to_string),
    }
}

/// Tests walking the listing page by page.
///
/// Verifies that announcements come newest first, that pages do not overlap
/// and that the total counts every announcement.
///
/// Expected: Ok with pages of 2, 2 and 1 items
#[tokio::test]
async fn pages_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut created = Vec::new();
    for _ in 0..5 {
        created.push(factory::create_announcement(db, "alice").await?.id);
    }
    created.reverse();

    let repo = AnnouncementRepository::new(db);
    let mut seen = Vec::new();
    for page in 0..3 {
        let result = repo.get_paginated(params(page, 2, None)).await?;
        assert_eq!(result.total, 5);
        assert_eq!(result.total_pages(), 3);
        seen.extend(result.items.into_iter().map(|a| a.id));
    }

    assert_eq!(seen, created);

    Ok(())
}

/// Tests restricting the listing to one city.
///
/// Expected: Ok with only the matching announcements counted
#[tokio::test]
async fn filters_by_city() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::announcement::AnnouncementFactory::new(db)
        .city("Lyon")
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db)
        .city("Paris")
        .build()
        .await?;
    factory::announcement::AnnouncementFactory::new(db)
        .city("Lyon")
        .build()
        .await?;

    let result = AnnouncementRepository::new(db)
        .get_paginated(params(0, 10, Some("Lyon")))
        .await?;

    assert_eq!(result.total, 2);
    assert!(result.items.iter().all(|a| a.city == "Lyon"));

    Ok(())
}

/// Expected: Ok with no items but the full total
#[tokio::test]
async fn page_past_the_end_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Announcement)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_announcement(db, "alice").await?;

    let result = AnnouncementRepository::new(db)
        .get_paginated(params(4, 10, None))
        .await?;

    assert!(result.items.is_empty());
    assert_eq!(result.total, 1);
    assert_eq!(result.page, 4);

    Ok(())
}

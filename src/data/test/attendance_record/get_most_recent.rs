use super::*;

/// Expected: Ok(None) when no attendance was ever recorded in the channel
#[tokio::test]
async fn returns_none_for_empty_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRecordRepository::new(db);
    let result = repo.get_most_recent(555000111).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that the newest row wins when a channel has several.
///
/// Expected: Ok(Some) with the row created last
#[tokio::test]
async fn returns_newest_record_for_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    AttendanceRecordFactory::new(db)
        .channel_id("555000111")
        .sender("1", "old#0001")
        .created_at(now - Duration::hours(48))
        .build()
        .await?;
    AttendanceRecordFactory::new(db)
        .channel_id("555000111")
        .sender("2", "new#0002")
        .last_sender("1")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;

    let repo = AttendanceRecordRepository::new(db);
    let record = repo.get_most_recent(555000111).await?.unwrap();

    assert_eq!(record.new_sender_discord_id, 2);
    assert_eq!(record.last_sender_discord_id, Some(1));
    assert_eq!(record.sender_discord_tag, "new#0002");

    Ok(())
}

/// Tests that rows from other channels are ignored.
///
/// Expected: Ok(Some) with the queried channel's row even though another channel has a
/// newer one
#[tokio::test]
async fn ignores_other_channels() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    AttendanceRecordFactory::new(db)
        .channel_id("111")
        .created_at(now - Duration::hours(30))
        .build()
        .await?;
    AttendanceRecordFactory::new(db)
        .channel_id("222")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let repo = AttendanceRecordRepository::new(db);
    let record = repo.get_most_recent(111).await?.unwrap();

    assert_eq!(record.channel_id, 111);

    Ok(())
}

/// Tests that a missing table surfaces as a database error rather than "no record".
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_when_table_is_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRecordRepository::new(db);
    let result = repo.get_most_recent(555000111).await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}

use super::*;

fn param(channel_id: u64, last_sender: Option<u64>) -> CreateAttendanceRecordParam {
    CreateAttendanceRecordParam {
        channel_id,
        last_sender_discord_id: last_sender,
        new_sender_discord_id: 100000001,
        sender_discord_tag: "raider#0001".to_string(),
        game_address: "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".to_string(),
        chain_id: 100,
        tx_hash: format!("0x{}", "ab".repeat(32)),
        message: String::new(),
    }
}

/// Expected: Ok with every field stored and created_at stamped with the current time
#[tokio::test]
async fn creates_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let before = Utc::now() - Duration::seconds(1);
    let repo = AttendanceRecordRepository::new(db);
    let record = repo.create(param(555000111, Some(42))).await?;

    assert_eq!(record.channel_id, 555000111);
    assert_eq!(record.last_sender_discord_id, Some(42));
    assert_eq!(record.new_sender_discord_id, 100000001);
    assert_eq!(record.chain_id, 100);
    assert_eq!(record.message, "");
    assert!(record.created_at >= before);

    Ok(())
}

/// Tests that the ledger keeps history instead of overwriting the channel's row.
///
/// Expected: Ok with two rows stored and the second returned as most recent
#[tokio::test]
async fn appends_instead_of_replacing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_attendance_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AttendanceRecordRepository::new(db);
    repo.create(param(555000111, None)).await?;
    let second = repo.create(param(555000111, Some(100000001))).await?;

    let count = entity::prelude::AttendanceRecord::find().count(db).await?;
    assert_eq!(count, 2);

    let latest = repo.get_most_recent(555000111).await?.unwrap();
    assert_eq!(latest.id, second.id);

    Ok(())
}

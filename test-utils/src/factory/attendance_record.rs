//! Attendance record factory for inserting ledger rows.
//!
//! Cooldown tests mostly care about two fields, the channel and `created_at`; everything
//! else defaults to the values in `fixture::attendance_record`.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture::attendance_record as defaults;

/// Factory for creating attendance records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let record = AttendanceRecordFactory::new(&db)
///     .channel_id("555")
///     .sender("42", "raider#0042")
///     .created_at(Utc::now() - Duration::hours(2))
///     .build()
///     .await?;
/// ```
pub struct AttendanceRecordFactory<'a> {
    db: &'a DatabaseConnection,
    channel_id: String,
    last_sender_discord_id: Option<String>,
    new_sender_discord_id: String,
    sender_discord_tag: String,
    tx_hash: String,
    created_at: DateTime<Utc>,
}

impl<'a> AttendanceRecordFactory<'a> {
    /// Creates a new AttendanceRecordFactory with default values.
    ///
    /// Defaults:
    /// - channel_id: `fixture::attendance_record::DEFAULT_CHANNEL_ID`
    /// - sender: fixture defaults, no previous sender
    /// - tx_hash: unique per factory instance
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            channel_id: defaults::DEFAULT_CHANNEL_ID.to_string(),
            last_sender_discord_id: None,
            new_sender_discord_id: defaults::DEFAULT_SENDER_DISCORD_ID.to_string(),
            sender_discord_tag: defaults::DEFAULT_SENDER_DISCORD_TAG.to_string(),
            tx_hash: format!("0x{:064x}", id),
            created_at: Utc::now(),
        }
    }

    /// Sets the channel the record belongs to.
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets the previous sender carried forward from the prior record.
    pub fn last_sender(mut self, discord_id: impl Into<String>) -> Self {
        self.last_sender_discord_id = Some(discord_id.into());
        self
    }

    /// Sets the member who recorded attendance.
    pub fn sender(mut self, discord_id: impl Into<String>, tag: impl Into<String>) -> Self {
        self.new_sender_discord_id = discord_id.into();
        self.sender_discord_tag = tag.into();
        self
    }

    /// Sets the transaction hash.
    pub fn tx_hash(mut self, tx_hash: impl Into<String>) -> Self {
        self.tx_hash = tx_hash.into();
        self
    }

    /// Sets the creation timestamp, which drives the cooldown window.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the attendance record into the database.
    ///
    /// # Returns
    /// - `Ok(entity::attendance_record::Model)` - Created record
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::attendance_record::Model, DbErr> {
        entity::attendance_record::ActiveModel {
            id: ActiveValue::NotSet,
            channel_id: ActiveValue::Set(self.channel_id),
            last_sender_discord_id: ActiveValue::Set(self.last_sender_discord_id),
            new_sender_discord_id: ActiveValue::Set(self.new_sender_discord_id),
            sender_discord_tag: ActiveValue::Set(self.sender_discord_tag),
            game_address: ActiveValue::Set(defaults::DEFAULT_GAME_ADDRESS.to_string()),
            chain_id: ActiveValue::Set(defaults::DEFAULT_CHAIN_ID),
            tx_hash: ActiveValue::Set(self.tx_hash),
            message: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an attendance record with default values.
///
/// Shorthand for `AttendanceRecordFactory::new(db).build().await`.
pub async fn create_attendance_record(
    db: &DatabaseConnection,
) -> Result<entity::attendance_record::Model, DbErr> {
    AttendanceRecordFactory::new(db).build().await
}

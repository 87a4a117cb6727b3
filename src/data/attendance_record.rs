//! Attendance ledger repository.
//!
//! The ledger is append-only. Each successful attendance run adds one row, and the newest
//! row for a channel is the baseline the cooldown gate compares against.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::attendance::{AttendanceRecord, CreateAttendanceRecordParam},
};

pub struct AttendanceRecordRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRecordRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the newest ledger row for a channel.
    ///
    /// Rows are ordered by `created_at` and then by `id`, so two rows written within the
    /// same timestamp still resolve to the later insert.
    ///
    /// # Arguments
    /// - `channel_id` - Discord voice channel ID
    ///
    /// # Returns
    /// - `Ok(Some(AttendanceRecord))` - Newest record for the channel
    /// - `Ok(None)` - Attendance was never recorded in this channel
    /// - `Err(AppError::DbErr)` - Database error, including a missing table
    /// - `Err(AppError::InternalErr)` - Stored Discord ID is not numeric
    pub async fn get_most_recent(
        &self,
        channel_id: u64,
    ) -> Result<Option<AttendanceRecord>, AppError> {
        let entity = entity::prelude::AttendanceRecord::find()
            .filter(entity::attendance_record::Column::ChannelId.eq(channel_id.to_string()))
            .order_by_desc(entity::attendance_record::Column::CreatedAt)
            .order_by_desc(entity::attendance_record::Column::Id)
            .one(self.db)
            .await?;

        entity.map(AttendanceRecord::from_entity).transpose()
    }

    /// Appends a ledger row stamped with the current time.
    ///
    /// # Returns
    /// - `Ok(AttendanceRecord)` - The inserted record
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateAttendanceRecordParam,
    ) -> Result<AttendanceRecord, AppError> {
        let entity = entity::attendance_record::ActiveModel {
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            last_sender_discord_id: ActiveValue::Set(
                param.last_sender_discord_id.map(|id| id.to_string()),
            ),
            new_sender_discord_id: ActiveValue::Set(param.new_sender_discord_id.to_string()),
            sender_discord_tag: ActiveValue::Set(param.sender_discord_tag),
            game_address: ActiveValue::Set(param.game_address),
            chain_id: ActiveValue::Set(param.chain_id as i64),
            tx_hash: ActiveValue::Set(param.tx_hash),
            message: ActiveValue::Set(param.message),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        AttendanceRecord::from_entity(entity)
    }
}

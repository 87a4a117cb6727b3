use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    data::attendance_record::AttendanceRecordRepository, error::AppError,
    model::attendance::AttendanceRecord,
};

use super::COOLDOWN_HOURS;

/// Cooldown state derived from a channel's newest ledger row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CooldownStatus {
    pub is_on_cooldown: bool,
    pub cooldown_end_time: Option<DateTime<Utc>>,
    pub last_channel_id: Option<u64>,
    pub last_sender_discord_id: Option<u64>,
}

impl CooldownStatus {
    pub fn from_record(record: Option<&AttendanceRecord>, now: DateTime<Utc>) -> Self {
        let Some(record) = record else {
            return Self::default();
        };

        let end_time = record.created_at + Duration::hours(COOLDOWN_HOURS);

        Self {
            is_on_cooldown: now < end_time,
            cooldown_end_time: Some(end_time),
            last_channel_id: Some(record.channel_id),
            last_sender_discord_id: Some(record.new_sender_discord_id),
        }
    }

    /// A cooldown only blocks the channel it was recorded in.
    pub fn blocks(&self, channel_id: u64) -> bool {
        self.is_on_cooldown && self.last_channel_id == Some(channel_id)
    }
}

pub struct CooldownGate<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CooldownGate<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the channel's newest ledger row and derives its cooldown.
    ///
    /// A failed read is returned as an error and the run stops; the gate never assumes
    /// "no cooldown" when the ledger cannot be read.
    pub async fn check(
        &self,
        channel_id: u64,
        now: DateTime<Utc>,
    ) -> Result<CooldownStatus, AppError> {
        let record = AttendanceRecordRepository::new(self.db)
            .get_most_recent(channel_id)
            .await?;

        Ok(CooldownStatus::from_record(record.as_ref(), now))
    }
}

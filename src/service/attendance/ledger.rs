use alloy::primitives::TxHash;
use sea_orm::DatabaseConnection;

use crate::{
    data::attendance_record::AttendanceRecordRepository,
    error::AppError,
    model::{
        attendance::{AttendanceRecord, CreateAttendanceRecordParam, Participant},
        cohort::CohortConfig,
    },
};

/// Writes the ledger row that becomes the channel's next cooldown baseline.
pub struct LedgerRecorder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerRecorder<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Only called once the badge drop receipt reports success.
    pub async fn record(
        &self,
        channel_id: u64,
        last_sender_discord_id: Option<u64>,
        sender: &Participant,
        game: &CohortConfig,
        tx_hash: TxHash,
    ) -> Result<AttendanceRecord, AppError> {
        AttendanceRecordRepository::new(self.db)
            .create(CreateAttendanceRecordParam {
                channel_id,
                last_sender_discord_id,
                new_sender_discord_id: sender.discord_id,
                sender_discord_tag: sender.tag.clone(),
                game_address: game.game_address.to_checksum(None),
                chain_id: game.chain_id,
                tx_hash: tx_hash.to_string(),
                message: String::new(),
            })
            .await
    }
}

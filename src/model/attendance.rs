//! Domain models for attendance runs and the attendance ledger.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A guild member taking part in (or invoking) an attendance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    /// Discord user ID.
    pub discord_id: u64,
    /// Discord display tag, the key used by the member registry.
    pub tag: String,
}

/// Snapshot of the members connected to a voice channel at invocation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSession {
    pub channel_id: u64,
    /// Connected members, ordered by Discord ID.
    pub members: Vec<Participant>,
}

/// A `record-attendance` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRequest {
    pub requester: Participant,
    /// Channel the command was invoked in.
    pub channel_id: u64,
    /// `None` when the invoking channel is not voice based.
    pub voice_session: Option<VoiceSession>,
}

/// A ledger row describing a successful attendance run.
///
/// The newest record for a channel is that channel's cooldown baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i32,
    pub channel_id: u64,
    /// Sender of the record this one replaced, carried forward for auditing.
    pub last_sender_discord_id: Option<u64>,
    pub new_sender_discord_id: u64,
    pub sender_discord_tag: String,
    /// Checksummed game contract address the badges were dropped on.
    pub game_address: String,
    pub chain_id: u64,
    pub tx_hash: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl AttendanceRecord {
    /// Converts an entity model to an attendance record domain model at the repository
    /// boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(AttendanceRecord)` - The converted domain model
    /// - `Err(AppError::InternalErr)` - A stored Discord ID is not numeric
    pub fn from_entity(entity: entity::attendance_record::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            last_sender_discord_id: entity
                .last_sender_discord_id
                .map(parse_u64_from_string)
                .transpose()?,
            new_sender_discord_id: parse_u64_from_string(entity.new_sender_discord_id)?,
            sender_discord_tag: entity.sender_discord_tag,
            game_address: entity.game_address,
            chain_id: entity.chain_id as u64,
            tx_hash: entity.tx_hash,
            message: entity.message,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for appending a ledger row after a confirmed badge drop.
#[derive(Debug, Clone)]
pub struct CreateAttendanceRecordParam {
    pub channel_id: u64,
    pub last_sender_discord_id: Option<u64>,
    pub new_sender_discord_id: u64,
    pub sender_discord_tag: String,
    pub game_address: String,
    pub chain_id: u64,
    pub tx_hash: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::attendance_record as fixture;

    #[test]
    fn converts_stored_ids() {
        let mut entity = fixture::entity();
        entity.last_sender_discord_id = Some("42".to_string());

        let record = AttendanceRecord::from_entity(entity).unwrap();

        assert_eq!(record.channel_id, 555000111);
        assert_eq!(record.new_sender_discord_id, 100000001);
        assert_eq!(record.last_sender_discord_id, Some(42));
        assert_eq!(record.chain_id, 100);
    }

    #[test]
    fn rejects_non_numeric_channel_id() {
        let mut entity = fixture::entity();
        entity.channel_id = "general".to_string();

        assert!(matches!(
            AttendanceRecord::from_entity(entity),
            Err(AppError::InternalErr(_))
        ));
    }
}

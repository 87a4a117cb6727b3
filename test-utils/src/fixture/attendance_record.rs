//! Attendance record fixtures for creating in-memory ledger rows.

use chrono::Utc;
use entity::attendance_record;

/// Default voice channel ID the record was written for.
pub const DEFAULT_CHANNEL_ID: &str = "555000111";

/// Default Discord ID of the member who recorded attendance.
pub const DEFAULT_SENDER_DISCORD_ID: &str = "100000001";

/// Default Discord tag of the member who recorded attendance.
pub const DEFAULT_SENDER_DISCORD_TAG: &str = "raider#0001";

/// Default checksummed game contract address.
pub const DEFAULT_GAME_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

/// Default chain ID (Gnosis).
pub const DEFAULT_CHAIN_ID: i64 = 100;

/// Default transaction hash.
pub const DEFAULT_TX_HASH: &str =
    "0x1111111111111111111111111111111111111111111111111111111111111111";

/// Creates an attendance record entity model with default values.
///
/// The record has no previous sender, an empty message, and `created_at` set to now,
/// which puts its channel on cooldown.
///
/// # Returns
/// - `attendance_record::Model` - In-memory attendance record entity
pub fn entity() -> attendance_record::Model {
    attendance_record::Model {
        id: 1,
        channel_id: DEFAULT_CHANNEL_ID.to_string(),
        last_sender_discord_id: None,
        new_sender_discord_id: DEFAULT_SENDER_DISCORD_ID.to_string(),
        sender_discord_tag: DEFAULT_SENDER_DISCORD_TAG.to_string(),
        game_address: DEFAULT_GAME_ADDRESS.to_string(),
        chain_id: DEFAULT_CHAIN_ID,
        tx_hash: DEFAULT_TX_HASH.to_string(),
        message: String::new(),
        created_at: Utc::now(),
    }
}

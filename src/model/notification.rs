//! User-facing notifications emitted by the attendance workflow.
//!
//! Notifications are plain data; the Discord layer renders them as embeds. Each one has a
//! title, an optional description and an optional link, and all share the guild colour.

use chrono::{DateTime, Utc};

use crate::service::attendance::COOLDOWN_HOURS;

/// Embed colour used for every attendance notification.
pub const NOTIFICATION_COLOR: u32 = 0xff3864;

const GAME_URL: &str = "https://play.raidguild.org";

const REGISTRATION_HINT: &str = "If you think this is an error, ensure that your Discord handle and ETH address are registered correctly in DungeonMaster.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceNotification {
    NotVoiceChannel,
    CooldownActive {
        end_time: Option<DateTime<Utc>>,
    },
    NotEnoughAttendees {
        minimum: usize,
    },
    NotAMember,
    NoCharactersFound {
        member_ids: Vec<u64>,
    },
    Recording,
    TxPending {
        tx_url: String,
    },
    TxFailed {
        tx_url: String,
    },
    TxSucceeded {
        tx_url: String,
        sender_id: u64,
        rewarded_ids: Vec<u64>,
    },
    /// Generic failure shown after an infrastructure error.
    Failed,
}

impl AttendanceNotification {
    pub fn title(&self) -> &'static str {
        match self {
            Self::NotVoiceChannel => "Not a Voice Channel",
            Self::CooldownActive { .. } => "Attendance Recording Cooldown",
            Self::NotEnoughAttendees { .. } => "Not Enough Attendees",
            Self::NotAMember => "Not a Member",
            Self::NoCharactersFound { .. } => "No Characters Found",
            Self::Recording => "Recording Attendance...",
            Self::TxPending { .. } => "Attendance Recording Tx Pending...",
            Self::TxFailed { .. } => "Attendance Recording Tx Failed!",
            Self::TxSucceeded { .. } => "Attendance Recording Succeeded!",
            Self::Failed => "Attendance Recording Failed",
        }
    }

    pub fn description(&self) -> Option<String> {
        match self {
            Self::NotVoiceChannel => {
                Some("You must be in a voice channel to record attendance.".to_string())
            }
            Self::CooldownActive { end_time } => Some(match end_time {
                Some(end_time) => format!(
                    "All members must wait until <t:{}:F> to record attendance again.",
                    end_time.timestamp()
                ),
                None => format!(
                    "All members must wait {} hours between attendance recording.",
                    COOLDOWN_HOURS
                ),
            }),
            Self::NotEnoughAttendees { minimum } => Some(format!(
                "There must be at least {} attendees in the voice channel to record attendance.",
                minimum
            )),
            Self::NotAMember => Some(format!(
                "You are not a member of RaidGuild! {}",
                REGISTRATION_HINT
            )),
            Self::NoCharactersFound { member_ids } => Some(format!(
                "No characters were found for the following users: {}.\n---\n{}",
                mentions(member_ids),
                REGISTRATION_HINT
            )),
            Self::Recording => None,
            Self::TxPending { tx_url } => Some(format!(
                "Transaction is pending. View your transaction here:\n{}",
                tx_url
            )),
            Self::TxFailed { tx_url } => Some(format!(
                "Transaction failed. View your transaction here:\n{}",
                tx_url
            )),
            Self::TxSucceeded {
                sender_id,
                rewarded_ids,
                ..
            } => Some(format!(
                "**<@{}>** gave an attendance badge to all characters in this voice channel:\n{}.\n---\nView the game at {}\n---\nIf you did not receive a badge, you are either not a member of RaidGuild, not in DungeonMaster, or not in CharacterSheets.",
                sender_id,
                mentions(rewarded_ids),
                GAME_URL
            )),
            Self::Failed => Some(
                "Something went wrong while recording attendance. Please try again later."
                    .to_string(),
            ),
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Self::TxPending { tx_url }
            | Self::TxFailed { tx_url }
            | Self::TxSucceeded { tx_url, .. } => Some(tx_url),
            _ => None,
        }
    }

    /// Transaction status updates replace the original response instead of adding a
    /// follow-up message.
    pub fn edits_original(&self) -> bool {
        matches!(
            self,
            Self::TxPending { .. } | Self::TxFailed { .. } | Self::TxSucceeded { .. }
        )
    }
}

fn mentions(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| format!("<@{}>", id))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cooldown_mentions_end_time_as_discord_timestamp() {
        let end_time = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let notification = AttendanceNotification::CooldownActive {
            end_time: Some(end_time),
        };

        let description = notification.description().unwrap();

        assert!(description.contains(&format!("<t:{}:F>", end_time.timestamp())));
    }

    #[test]
    fn cooldown_without_end_time_falls_back_to_window() {
        let notification = AttendanceNotification::CooldownActive { end_time: None };
        assert!(notification.description().unwrap().contains("24 hours"));
    }

    #[test]
    fn success_lists_sender_and_rewarded_members() {
        let notification = AttendanceNotification::TxSucceeded {
            tx_url: "https://gnosisscan.io/tx/0xabc".to_string(),
            sender_id: 1,
            rewarded_ids: vec![2, 3],
        };

        let description = notification.description().unwrap();

        assert!(description.starts_with("**<@1>**"));
        assert!(description.contains("<@2>,<@3>."));
        assert_eq!(notification.url(), Some("https://gnosisscan.io/tx/0xabc"));
    }

    #[test]
    fn only_transaction_updates_edit_the_original_response() {
        let tx_url = "https://gnosisscan.io/tx/0xabc".to_string();

        assert!(AttendanceNotification::TxPending {
            tx_url: tx_url.clone()
        }
        .edits_original());
        assert!(AttendanceNotification::TxFailed { tx_url }.edits_original());
        assert!(!AttendanceNotification::Recording.edits_original());
        assert!(!AttendanceNotification::NotAMember.edits_original());
    }
}

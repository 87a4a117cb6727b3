//! Slash command definitions and their runners.

use serenity::all::CreateCommand;

pub mod record_attendance;

/// Every slash command the bot registers.
pub fn definitions() -> Vec<CreateCommand> {
    vec![record_attendance::definition()]
}

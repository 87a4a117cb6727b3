//! Discord bot integration.
//!
//! Registers the `record-attendance` slash command and turns each invocation into an
//! `AttendanceRequest` for the attendance workflow. Replies are rendered as embeds on the
//! interaction; operational errors optionally go to a log channel.
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - channel lookups in the cache
//! - `GUILD_VOICE_STATES` - who is connected to which voice channel
//! - `GUILD_MEMBERS` - member tags (privileged, enable it in the Developer Portal)

pub mod command;
pub mod handler;
pub mod logger;
pub mod reply;
pub mod start;
pub mod voice;

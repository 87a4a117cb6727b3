//! Ready event handler.
//!
//! Fired once per gateway connection. Slash commands are (re)registered on the configured
//! guild here so that command definitions always match the running build.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
/// - `guild_id` - Guild receiving the slash command definitions
pub async fn handle_ready(ctx: Context, ready: Ready, guild_id: GuildId) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match guild_id.set_commands(&ctx.http, command::definitions()).await {
        Ok(commands) => tracing::info!(
            "Registered {} slash commands in guild {}",
            commands.len(),
            guild_id
        ),
        Err(e) => tracing::error!("Failed to register slash commands: {:?}", e),
    }
}

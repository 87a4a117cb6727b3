use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents, GuildId};
use std::sync::Arc;

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    service::attendance::AttendanceDeps,
};

/// Starts the Discord bot and blocks until the gateway connection ends.
///
/// # Arguments
/// - `config` - Application configuration
/// - `db` - Database connection holding the attendance ledger
/// - `attendance` - Collaborators of the attendance workflow
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - Client construction or the gateway connection failed
pub async fn start_bot(
    config: &Config,
    db: DatabaseConnection,
    attendance: Arc<AttendanceDeps>,
) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(db, attendance, GuildId::new(config.discord_guild_id));

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

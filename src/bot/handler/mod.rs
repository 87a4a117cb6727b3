use sea_orm::DatabaseConnection;
use serenity::all::{Context, EventHandler, GuildId, Interaction, Ready};
use serenity::async_trait;
use std::sync::Arc;

use crate::service::attendance::AttendanceDeps;

pub mod interaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub attendance: Arc<AttendanceDeps>,
    /// Guild the slash commands are registered in.
    pub guild_id: GuildId,
}

impl Handler {
    pub fn new(db: DatabaseConnection, attendance: Arc<AttendanceDeps>, guild_id: GuildId) -> Self {
        Self {
            db,
            attendance,
            guild_id,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready, self.guild_id).await;
    }

    /// Called for every interaction; slash commands are dispatched by name
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction_create(&self.db, &self.attendance, ctx, interaction)
            .await;
    }
}

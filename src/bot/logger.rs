//! Operational log sink posting error messages to a Discord channel.

use async_trait::async_trait;
use dioxus_logger::tracing;
use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};
use std::sync::Arc;

use crate::service::attendance::port::OperationalLog;

/// Mirrors operational errors into the configured log channel.
///
/// Without a channel the logger is silent; the caller already traces every message.
pub struct DiscordLogger {
    http: Arc<Http>,
    channel_id: Option<ChannelId>,
}

impl DiscordLogger {
    pub fn new(http: Arc<Http>, channel_id: Option<u64>) -> Self {
        Self {
            http,
            channel_id: channel_id.map(ChannelId::new),
        }
    }
}

#[async_trait]
impl OperationalLog for DiscordLogger {
    async fn error(&self, message: &str) {
        let Some(channel_id) = self.channel_id else {
            return;
        };

        let message = CreateMessage::new().content(format!("**Error:** {}", message));
        if let Err(e) = channel_id.send_message(&self.http, message).await {
            tracing::error!("Failed to post to log channel {}: {}", channel_id, e);
        }
    }
}

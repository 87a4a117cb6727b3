//! Renders attendance notifications onto a slash command interaction.

use async_trait::async_trait;
use serenity::{
    all::{
        CommandInteraction, CreateEmbed, CreateInteractionResponseFollowup,
        EditInteractionResponse, Timestamp,
    },
    http::Http,
};

use crate::{
    error::AppError,
    model::notification::{AttendanceNotification, NOTIFICATION_COLOR},
    service::attendance::port::ReplySink,
};

/// Reply sink bound to one deferred command interaction.
///
/// Transaction status updates edit the original response; everything else is sent as a
/// follow-up.
pub struct InteractionReplySink<'a> {
    http: &'a Http,
    command: &'a CommandInteraction,
}

impl<'a> InteractionReplySink<'a> {
    pub fn new(http: &'a Http, command: &'a CommandInteraction) -> Self {
        Self { http, command }
    }
}

#[async_trait]
impl ReplySink for InteractionReplySink<'_> {
    async fn notify(&self, notification: AttendanceNotification) -> Result<(), AppError> {
        let embed = build_embed(&notification);

        if notification.edits_original() {
            self.command
                .edit_response(self.http, EditInteractionResponse::new().embed(embed))
                .await?;
        } else {
            self.command
                .create_followup(
                    self.http,
                    CreateInteractionResponseFollowup::new().embed(embed),
                )
                .await?;
        }

        Ok(())
    }
}

pub fn build_embed(notification: &AttendanceNotification) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(notification.title())
        .colour(NOTIFICATION_COLOR)
        .timestamp(Timestamp::now());

    if let Some(description) = notification.description() {
        embed = embed.description(description);
    }
    if let Some(url) = notification.url() {
        embed = embed.url(url);
    }

    embed
}

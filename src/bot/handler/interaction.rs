use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, Interaction};

use crate::{bot::command, service::attendance::AttendanceDeps};

/// Dispatches slash commands; other interaction kinds are ignored.
pub async fn handle_interaction_create(
    db: &DatabaseConnection,
    attendance: &AttendanceDeps,
    ctx: Context,
    interaction: Interaction,
) {
    let Interaction::Command(invocation) = interaction else {
        return;
    };

    match invocation.data.name.as_str() {
        command::record_attendance::NAME => {
            command::record_attendance::run(db, attendance, &ctx, &invocation).await;
        }
        other => tracing::warn!("Received unknown command /{}", other),
    }
}

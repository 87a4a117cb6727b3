//! `/record-attendance`: rewards everyone in the caller's voice channel with an attendance
//! badge.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand};

use crate::{
    bot::{reply::InteractionReplySink, voice::voice_session},
    error::AppError,
    model::{
        attendance::{AttendanceRequest, Participant},
        notification::AttendanceNotification,
    },
    service::attendance::{
        port::{OperationalLog, ReplySink},
        AttendanceDeps, AttendanceOutcome, AttendanceService,
    },
};

pub const NAME: &str = "record-attendance";

pub fn definition() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Drops an attendance badge to every character in this voice channel")
}

/// Runs the command and reports its result.
pub async fn run(
    db: &DatabaseConnection,
    attendance: &AttendanceDeps,
    ctx: &Context,
    command: &CommandInteraction,
) {
    let sink = InteractionReplySink::new(&ctx.http, command);

    let result = execute(db, attendance, ctx, command, &sink).await;

    report(result, &command.user.tag(), &sink, attendance.log.as_ref()).await;
}

/// Top-level handling of a finished run.
///
/// Errors are traced, mirrored to the log channel, and answered with one generic failure
/// notification. Outcomes were already reported by the workflow and are only traced.
async fn report(
    result: Result<AttendanceOutcome, AppError>,
    requester_tag: &str,
    sink: &dyn ReplySink,
    log: &dyn OperationalLog,
) {
    match result {
        Ok(outcome) => tracing::info!("/{} by {} finished: {:?}", NAME, requester_tag, outcome),
        Err(e) => {
            let message = format!("/{} by {} failed: {}", NAME, requester_tag, e);
            tracing::error!("{}", message);
            log.error(&message).await;

            if let Err(e) = sink.notify(AttendanceNotification::Failed).await {
                tracing::error!("Failed to send failure notification: {}", e);
            }
        }
    }
}

async fn execute(
    db: &DatabaseConnection,
    attendance: &AttendanceDeps,
    ctx: &Context,
    command: &CommandInteraction,
    sink: &InteractionReplySink<'_>,
) -> Result<AttendanceOutcome, AppError> {
    command.defer(&ctx.http).await?;

    let voice_session = command
        .guild_id
        .and_then(|guild_id| voice_session(&ctx.cache, guild_id, command.channel_id));

    let request = AttendanceRequest {
        requester: Participant {
            discord_id: command.user.id.get(),
            tag: command.user.tag(),
        },
        channel_id: command.channel_id.get(),
        voice_session,
    };

    AttendanceService::new(db, attendance)
        .record_attendance(&request, sink)
        .await
}

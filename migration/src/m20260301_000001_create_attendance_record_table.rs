use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AttendanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(AttendanceRecord::Id))
                    .col(string(AttendanceRecord::ChannelId))
                    .col(string_null(AttendanceRecord::LastSenderDiscordId))
                    .col(string(AttendanceRecord::NewSenderDiscordId))
                    .col(string(AttendanceRecord::SenderDiscordTag))
                    .col(string(AttendanceRecord::GameAddress))
                    .col(big_integer(AttendanceRecord::ChainId))
                    .col(string(AttendanceRecord::TxHash))
                    .col(string(AttendanceRecord::Message))
                    .col(timestamp(AttendanceRecord::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Cooldown lookups read the newest row per channel
        manager
            .create_index(
                Index::create()
                    .name("idx_attendance_record_channel_id_created_at")
                    .table(AttendanceRecord::Table)
                    .col(AttendanceRecord::ChannelId)
                    .col(AttendanceRecord::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_attendance_record_channel_id_created_at")
                    .table(AttendanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(AttendanceRecord::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AttendanceRecord {
    Table,
    Id,
    ChannelId,
    LastSenderDiscordId,
    NewSenderDiscordId,
    SenderDiscordTag,
    GameAddress,
    ChainId,
    TxHash,
    Message,
    CreatedAt,
}

use sea_orm::entity::prelude::*;

/// One successful attendance run. The newest row for a channel is the
/// cooldown baseline for that channel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub channel_id: String,
    pub last_sender_discord_id: Option<String>,
    pub new_sender_discord_id: String,
    pub sender_discord_tag: String,
    pub game_address: String,
    pub chain_id: i64,
    pub tx_hash: String,
    pub message: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

use serenity::http::Http;
use std::sync::Arc;

use crate::{
    bot::logger::DiscordLogger,
    config::Config,
    error::AppError,
    model::cohort::Cohort,
    service::{
        attendance::AttendanceDeps, badge::ChainBadgeDropper,
        character::SubgraphCharacterDirectory, registry::DungeonMasterRegistry,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the registry and subgraph clients.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    Ok(client)
}

/// Wires the attendance workflow to its production collaborators.
///
/// The chain RPC endpoint is asked for its chain id, and a mismatch with the main cohort's
/// configured chain is logged as a warning.
///
/// # Returns
/// - `Ok(AttendanceDeps)` - Registry, subgraph, chain and log clients ready for use
/// - `Err(AppError::ConfigErr)` - The signer private key is invalid
pub async fn build_attendance_deps(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<AttendanceDeps, AppError> {
    let main = config.character_sheets.get(Cohort::Main);

    let dropper = ChainBadgeDropper::connect(
        config.chain_rpc_url.clone(),
        &config.signer_private_key,
        main.game_address,
        config.badge_item_id,
    )?;
    dropper.check_chain_id(main.chain_id).await;

    let discord_http = Arc::new(Http::new(&config.discord_bot_token));

    Ok(AttendanceDeps {
        registry: Arc::new(DungeonMasterRegistry::new(
            http_client.clone(),
            config.registry_url.clone(),
            config.registry_admin_secret.clone(),
        )),
        directory: Arc::new(SubgraphCharacterDirectory::new(http_client)),
        dropper: Arc::new(dropper),
        log: Arc::new(DiscordLogger::new(
            discord_http,
            config.discord_log_channel_id,
        )),
        character_sheets: config.character_sheets.clone(),
        confirmation_timeout: config.tx_confirmation_timeout,
    })
}

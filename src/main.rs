mod bot;
mod config;
mod data;
mod error;
mod model;
mod service;
mod startup;
mod util;

use dioxus_logger::tracing::{self, Level};
use std::sync::Arc;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).map_err(|e| AppError::InternalError(e.to_string()))?;

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let attendance = Arc::new(startup::build_attendance_deps(&config, http_client).await?);

    for cohort in config.character_sheets.iter() {
        tracing::info!(
            "{} cohort: game {} on chain {}",
            cohort.cohort,
            cohort.game_address,
            cohort.chain_id
        );
        if cohort.explorer_url.is_none() {
            tracing::warn!("{} cohort has no explorer URL configured", cohort.cohort);
        }
    }

    bot::start::start_bot(&config, db, attendance).await
}

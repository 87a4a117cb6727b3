//! Error types for the bot.
//!
//! `AppError` is the top-level error type. It wraps domain-specific errors from
//! configuration, persistence, Discord, the member registry and the chain. Business-rule
//! rejections in the attendance workflow are not errors; they are reported as workflow
//! outcomes. Anything that reaches the interaction handler as an `AppError` is treated as an
//! infrastructure fault: logged, sent to the log channel, and shown to the user as a generic
//! failure.

pub mod chain;
pub mod config;
pub mod internal;
pub mod registry;

use thiserror::Error;

use crate::error::{
    chain::ChainError, config::ConfigError, internal::InternalError, registry::RegistryError,
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    ///
    /// Raised when the member registry or a subgraph cannot be reached or returns a
    /// non-JSON body.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Chain RPC, signing or confirmation error.
    #[error(transparent)]
    ChainErr(#[from] ChainError),

    /// Member registry or subgraph returned an unusable GraphQL response.
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),

    /// Unexpected internal state such as an unparsable stored ID.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

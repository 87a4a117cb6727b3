use alloy::primitives::{Address, U256};
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::{
    error::{config::ConfigError, AppError},
    model::cohort::{CharacterSheetsConfig, Cohort, CohortConfig, Environment},
};

const DEFAULT_TX_CONFIRMATION_TIMEOUT_SECS: u64 = 300;

pub struct Config {
    pub database_url: String,

    pub discord_bot_token: String,
    /// Guild the slash commands are registered in.
    pub discord_guild_id: u64,
    /// Channel receiving operational error messages, if any.
    pub discord_log_channel_id: Option<u64>,

    pub registry_url: Url,
    pub registry_admin_secret: Option<String>,

    pub chain_rpc_url: Url,
    pub signer_private_key: String,
    pub badge_item_id: U256,
    pub tx_confirmation_timeout: Duration,

    pub character_sheets: CharacterSheetsConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let environment: Environment = vars.parsed("ENVIRONMENT")?;

        Ok(Self {
            database_url: vars.required("DATABASE_URL")?,
            discord_bot_token: vars.required("DISCORD_BOT_TOKEN")?,
            discord_guild_id: vars.parsed("DISCORD_GUILD_ID")?,
            discord_log_channel_id: vars.parsed_optional("DISCORD_BOT_LOG_CHANNEL_ID")?,
            registry_url: vars.parsed("DUNGEON_MASTER_GRAPHQL_URL")?,
            registry_admin_secret: vars.optional("DUNGEON_MASTER_ADMIN_SECRET"),
            chain_rpc_url: vars.parsed("CHAIN_RPC_URL")?,
            signer_private_key: vars.required("ATTENDANCE_SIGNER_PRIVATE_KEY")?,
            badge_item_id: vars.parsed("ATTENDANCE_BADGE_ITEM_ID")?,
            tx_confirmation_timeout: Duration::from_secs(
                vars.parsed_optional("TX_CONFIRMATION_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_TX_CONFIRMATION_TIMEOUT_SECS),
            ),
            character_sheets: CharacterSheetsConfig {
                environment,
                main: vars.cohort(Cohort::Main, environment)?,
                cohort7: vars.cohort(Cohort::Cohort7, environment)?,
            },
        })
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parsed_optional<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.optional(name)
            .map(|value| {
                value
                    .trim()
                    .parse::<T>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        name: name.to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()
    }

    fn parsed<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.parsed_optional(name)?
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn cohort(&self, cohort: Cohort, environment: Environment) -> Result<CohortConfig, ConfigError> {
        let key = |field: &str| format!("CHARACTER_SHEETS_{}_{}", cohort.env_prefix(), field);

        Ok(CohortConfig {
            cohort,
            game_address: self.parsed::<Address>(&key("GAME_ADDRESS"))?,
            subgraph_url: self.parsed::<Url>(&key("SUBGRAPH_URL"))?,
            explorer_url: self
                .optional(&key("EXPLORER_URL"))
                .map(|url| url.trim().trim_end_matches('/').to_string()),
            chain_id: self
                .parsed_optional::<u64>(&key("CHAIN_ID"))?
                .unwrap_or_else(|| environment.default_chain_id()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_vars() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "sqlite://guard.db?mode=rwc"),
            ("DISCORD_BOT_TOKEN", "token"),
            ("DISCORD_GUILD_ID", "449372876574490625"),
            ("ENVIRONMENT", "main"),
            ("DUNGEON_MASTER_GRAPHQL_URL", "https://dm.example/v1/graphql"),
            ("CHAIN_RPC_URL", "https://rpc.gnosischain.com"),
            ("ATTENDANCE_SIGNER_PRIVATE_KEY", "0x01"),
            ("ATTENDANCE_BADGE_ITEM_ID", "3"),
            (
                "CHARACTER_SHEETS_MAIN_GAME_ADDRESS",
                "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
            ),
            (
                "CHARACTER_SHEETS_MAIN_SUBGRAPH_URL",
                "https://subgraph.example/main",
            ),
            ("CHARACTER_SHEETS_MAIN_EXPLORER_URL", "https://gnosisscan.io/"),
            (
                "CHARACTER_SHEETS_COHORT7_GAME_ADDRESS",
                "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            ),
            (
                "CHARACTER_SHEETS_COHORT7_SUBGRAPH_URL",
                "https://subgraph.example/cohort7",
            ),
            ("CHARACTER_SHEETS_COHORT7_CHAIN_ID", "10"),
        ])
    }

    fn load(vars: &HashMap<&'static str, &'static str>) -> Result<Config, AppError> {
        Config::from_lookup(|key| vars.get(key).map(|value| value.to_string()))
    }

    #[test]
    fn loads_per_cohort_settings() {
        let config = load(&base_vars()).unwrap();
        let sheets = &config.character_sheets;

        assert_eq!(sheets.environment, Environment::Main);
        assert_eq!(sheets.main.chain_id, 100);
        assert_eq!(
            sheets.main.explorer_url.as_deref(),
            Some("https://gnosisscan.io")
        );
        assert_eq!(sheets.cohort7.chain_id, 10);
        assert!(sheets.cohort7.explorer_url.is_none());
        assert_eq!(config.badge_item_id, U256::from(3));
        assert_eq!(
            config.tx_confirmation_timeout,
            Duration::from_secs(DEFAULT_TX_CONFIRMATION_TIMEOUT_SECS)
        );
        assert!(config.discord_log_channel_id.is_none());
    }

    #[test]
    fn dev_environment_defaults_to_sepolia() {
        let mut vars = base_vars();
        vars.insert("ENVIRONMENT", "dev");

        let config = load(&vars).unwrap();

        assert_eq!(config.character_sheets.main.chain_id, 11155111);
    }

    #[test]
    fn missing_explorer_url_is_not_a_startup_error() {
        let mut vars = base_vars();
        vars.remove("CHARACTER_SHEETS_MAIN_EXPLORER_URL");

        let config = load(&vars).unwrap();

        assert!(config.character_sheets.main.explorer_url.is_none());
    }

    #[test]
    fn reports_missing_variable_by_name() {
        let mut vars = base_vars();
        vars.remove("DISCORD_BOT_TOKEN");

        let result = load(&vars);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DISCORD_BOT_TOKEN"
        ));
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut vars = base_vars();
        vars.insert("DATABASE_URL", "  ");

        let result = load(&vars);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_invalid_game_address() {
        let mut vars = base_vars();
        vars.insert("CHARACTER_SHEETS_COHORT7_GAME_ADDRESS", "not-an-address");

        let result = load(&vars);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. }))
                if name == "CHARACTER_SHEETS_COHORT7_GAME_ADDRESS"
        ));
    }
}

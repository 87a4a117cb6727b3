//! Cohorts and their per-environment game deployment settings.

use alloy::primitives::{Address, TxHash};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// An independently configured CharacterSheets game deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cohort {
    /// The guild-wide game. Only this cohort is rewarded.
    Main,
    /// The cohort 7 game. Resolved for eligibility but not rewarded.
    Cohort7,
}

impl Cohort {
    /// Every configured cohort, main first.
    pub const ALL: [Cohort; 2] = [Cohort::Main, Cohort::Cohort7];

    /// Tag used in logs and as the registry partition key.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Cohort7 => "cohort7",
        }
    }

    /// Prefix of the cohort's `CHARACTER_SHEETS_{PREFIX}_*` environment variables.
    pub fn env_prefix(&self) -> &'static str {
        match self {
            Self::Main => "MAIN",
            Self::Cohort7 => "COHORT7",
        }
    }

    /// Registry collection holding this cohort's verified members.
    pub fn registry_collection(&self) -> &'static str {
        match self {
            Self::Main => "members",
            Self::Cohort7 => "cohort7_members",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Deployment environment; selects default chain IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Main,
    Dev,
}

impl Environment {
    /// Chain used when a cohort does not override `CHAIN_ID`.
    ///
    /// Main runs on Gnosis, dev on Sepolia.
    pub fn default_chain_id(&self) -> u64 {
        match self {
            Self::Main => 100,
            Self::Dev => 11155111,
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "main" => Ok(Self::Main),
            "dev" => Ok(Self::Dev),
            other => Err(format!("expected `main` or `dev`, got `{}`", other)),
        }
    }
}

/// Settings for one cohort's game deployment.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortConfig {
    pub cohort: Cohort,
    /// CharacterSheets game contract.
    pub game_address: Address,
    /// Subgraph indexing the game's characters.
    pub subgraph_url: Url,
    /// Block explorer base URL, without trailing slash.
    pub explorer_url: Option<String>,
    pub chain_id: u64,
}

impl CohortConfig {
    /// Builds the explorer link for a transaction, if an explorer is configured.
    pub fn tx_url(&self, tx_hash: &TxHash) -> Option<String> {
        self.explorer_url
            .as_deref()
            .map(|explorer| format!("{}/tx/{}", explorer.trim_end_matches('/'), tx_hash))
    }
}

/// Per-environment settings for every cohort.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSheetsConfig {
    pub environment: Environment,
    pub main: CohortConfig,
    pub cohort7: CohortConfig,
}

impl CharacterSheetsConfig {
    /// Returns the settings for a cohort.
    pub fn get(&self, cohort: Cohort) -> &CohortConfig {
        match cohort {
            Cohort::Main => &self.main,
            Cohort::Cohort7 => &self.cohort7,
        }
    }

    /// Iterates every cohort's settings in `Cohort::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &CohortConfig> {
        Cohort::ALL.into_iter().map(move |cohort| self.get(cohort))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cohort_config(explorer_url: Option<&str>) -> CohortConfig {
        CohortConfig {
            cohort: Cohort::Main,
            game_address: Address::repeat_byte(0x11),
            subgraph_url: Url::parse("https://subgraph.example/main").unwrap(),
            explorer_url: explorer_url.map(str::to_string),
            chain_id: 100,
        }
    }

    #[test]
    fn builds_explorer_tx_link() {
        let config = cohort_config(Some("https://gnosisscan.io/"));
        let hash = TxHash::repeat_byte(0xab);

        let url = config.tx_url(&hash).unwrap();

        assert_eq!(url, format!("https://gnosisscan.io/tx/{}", hash));
    }

    #[test]
    fn no_link_without_explorer() {
        let config = cohort_config(None);
        assert!(config.tx_url(&TxHash::ZERO).is_none());
    }

    #[test]
    fn parses_environment_case_insensitively() {
        assert_eq!("MAIN".parse::<Environment>(), Ok(Environment::Main));
        assert_eq!(" dev ".parse::<Environment>(), Ok(Environment::Dev));
        assert!("staging".parse::<Environment>().is_err());
    }
}

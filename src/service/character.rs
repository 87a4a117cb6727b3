//! CharacterSheets subgraph client.

use alloy::primitives::Address;
use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

use crate::{
    error::AppError, model::eligibility::AccountLookup,
    service::attendance::port::CharacterDirectory, util::graphql::post_query,
};

const CHARACTERS_QUERY: &str = "query CharactersByPlayers($game: String!, $players: [String!]!) { \
     characters(where: { game: $game, player_in: $players, removed: false }) { player account } }";

#[derive(Serialize)]
struct CharactersVariables {
    game: String,
    players: Vec<String>,
}

#[derive(Deserialize)]
struct CharactersData {
    characters: Vec<CharacterRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterRow {
    pub player: String,
    pub account: String,
}

pub struct SubgraphCharacterDirectory {
    http_client: reqwest::Client,
}

impl SubgraphCharacterDirectory {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl CharacterDirectory for SubgraphCharacterDirectory {
    async fn resolve_accounts(
        &self,
        players: &[Address],
        game_address: Address,
        subgraph_url: &Url,
    ) -> Result<AccountLookup, AppError> {
        if players.is_empty() {
            return Ok(AccountLookup::default());
        }

        // The subgraph stores ids as lowercase hex.
        let variables = CharactersVariables {
            game: lowercase(&game_address),
            players: players.iter().map(lowercase).collect(),
        };

        let data: CharactersData = post_query(
            self.http_client.post(subgraph_url.clone()),
            subgraph_url.as_str(),
            CHARACTERS_QUERY,
            variables,
        )
        .await?;

        Ok(index_accounts(players, data.characters))
    }
}

fn lowercase(address: &Address) -> String {
    format!("{:#x}", address)
}

/// Maps each requested player to its character account.
///
/// A player with several characters keeps the first one returned.
pub fn index_accounts(players: &[Address], rows: Vec<CharacterRow>) -> AccountLookup {
    let requested: BTreeSet<Address> = players.iter().copied().collect();
    let mut lookup = AccountLookup::default();

    for row in rows {
        let (Ok(player), Ok(account)) = (
            row.player.trim().parse::<Address>(),
            row.account.trim().parse::<Address>(),
        ) else {
            tracing::warn!(
                "Ignoring subgraph character with invalid address: player {}, account {}",
                row.player,
                row.account
            );
            continue;
        };

        if requested.contains(&player) {
            lookup.accounts.entry(player).or_insert(account);
        }
    }

    lookup.unresolved = requested
        .into_iter()
        .filter(|player| !lookup.accounts.contains_key(player))
        .collect();

    lookup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(byte: u8) -> Address {
        Address::repeat_byte(byte)
    }

    fn row(player: Address, account: Address) -> CharacterRow {
        CharacterRow {
            player: lowercase(&player),
            account: lowercase(&account),
        }
    }

    #[test]
    fn maps_players_to_accounts() {
        let players = vec![address(1), address(2), address(3)];
        let rows = vec![row(address(1), address(0xa1)), row(address(3), address(0xa3))];

        let lookup = index_accounts(&players, rows);

        assert_eq!(lookup.accounts.len(), 2);
        assert_eq!(lookup.accounts[&address(1)], address(0xa1));
        assert_eq!(lookup.accounts[&address(3)], address(0xa3));
        assert_eq!(lookup.unresolved, vec![address(2)]);
    }

    #[test]
    fn keeps_first_character_per_player() {
        let players = vec![address(1)];
        let rows = vec![row(address(1), address(0xa1)), row(address(1), address(0xb1))];

        let lookup = index_accounts(&players, rows);

        assert_eq!(lookup.accounts[&address(1)], address(0xa1));
    }

    #[test]
    fn skips_unrequested_and_malformed_rows() {
        let players = vec![address(1)];
        let rows = vec![
            row(address(9), address(0xa9)),
            CharacterRow {
                player: lowercase(&address(1)),
                account: "0xnope".to_string(),
            },
        ];

        let lookup = index_accounts(&players, rows);

        assert!(lookup.accounts.is_empty());
        assert_eq!(lookup.unresolved, vec![address(1)]);
    }

    #[test]
    fn deserializes_subgraph_response() {
        let data: CharactersData = serde_json::from_value(serde_json::json!({
            "characters": [
                { "player": lowercase(&address(1)), "account": lowercase(&address(0xa1)) }
            ]
        }))
        .unwrap();

        let lookup = index_accounts(&[address(1)], data.characters);

        assert_eq!(lookup.accounts[&address(1)], address(0xa1));
    }

    #[test]
    fn formats_addresses_as_lowercase_hex() {
        let value = lowercase(&"0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap());
        assert_eq!(value, "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed");
    }
}

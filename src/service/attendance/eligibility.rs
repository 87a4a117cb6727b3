use alloy::primitives::Address;
use dioxus_logger::tracing;
use futures::future::try_join_all;
use std::collections::BTreeSet;

use crate::{
    error::AppError,
    model::{
        attendance::{Participant, VoiceSession},
        cohort::{CharacterSheetsConfig, Cohort, CohortConfig},
        eligibility::{CohortCharacters, Eligibility, IdentityResolution},
    },
};

use super::{
    port::{CharacterDirectory, MemberRegistry},
    MINIMUM_ATTENDEES,
};

/// Maps voice participants to verified addresses and then to character accounts.
pub struct EligibilityResolver<'a> {
    registry: &'a dyn MemberRegistry,
    directory: &'a dyn CharacterDirectory,
    character_sheets: &'a CharacterSheetsConfig,
}

impl<'a> EligibilityResolver<'a> {
    pub fn new(
        registry: &'a dyn MemberRegistry,
        directory: &'a dyn CharacterDirectory,
        character_sheets: &'a CharacterSheetsConfig,
    ) -> Self {
        Self {
            registry,
            directory,
            character_sheets,
        }
    }

    pub fn has_quorum(session: &VoiceSession) -> bool {
        session.members.len() >= MINIMUM_ATTENDEES
    }

    /// Looks up every participant's verified address in every cohort.
    pub async fn resolve_identities(
        &self,
        members: &[Participant],
    ) -> Result<IdentityResolution, AppError> {
        let tags = members
            .iter()
            .map(|member| member.tag.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();

        let identities = self
            .registry
            .resolve_addresses(&tags, &Cohort::ALL)
            .await?;

        for cohort in Cohort::ALL {
            tracing::debug!(
                "{} cohort: {} resolved, {} unresolved",
                cohort,
                identities.resolved(cohort).map_or(0, |r| r.len()),
                identities.unresolved(cohort).len()
            );
        }

        Ok(identities)
    }

    /// Resolves character accounts for each cohort concurrently.
    ///
    /// Cohorts without any resolved address skip the directory query entirely.
    pub async fn resolve_characters(
        &self,
        identities: IdentityResolution,
    ) -> Result<Eligibility, AppError> {
        let lookups = self
            .character_sheets
            .iter()
            .map(|config| self.resolve_cohort(config, &identities));

        let characters = try_join_all(lookups).await?.into_iter().collect();

        Ok(Eligibility {
            identities,
            characters,
        })
    }

    async fn resolve_cohort(
        &self,
        config: &CohortConfig,
        identities: &IdentityResolution,
    ) -> Result<(Cohort, CohortCharacters), AppError> {
        let Some(resolved) = identities
            .resolved(config.cohort)
            .filter(|resolved| !resolved.is_empty())
        else {
            return Ok((config.cohort, CohortCharacters::default()));
        };

        let players = resolved
            .values()
            .copied()
            .collect::<BTreeSet<Address>>()
            .into_iter()
            .collect::<Vec<_>>();

        let lookup = self
            .directory
            .resolve_accounts(&players, config.game_address, &config.subgraph_url)
            .await?;

        let mut characters = CohortCharacters::default();
        for (tag, player) in resolved {
            match lookup.accounts.get(player) {
                Some(account) => {
                    characters.accounts.insert(tag.clone(), *account);
                }
                None => characters.without_character.push(tag.clone()),
            }
        }

        tracing::debug!(
            "{} cohort: {} characters, {} players without character",
            config.cohort,
            characters.accounts.len(),
            characters.without_character.len()
        );

        Ok((config.cohort, characters))
    }
}

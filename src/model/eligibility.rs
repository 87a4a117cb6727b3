//! Results of resolving voice participants to verified addresses and character accounts.
//!
//! Maps are `BTreeMap`s so that identical inputs always produce identical, ordered results.

use alloy::primitives::Address;
use std::collections::{BTreeMap, BTreeSet};

use super::cohort::Cohort;

/// Member registry answer: verified addresses per cohort, keyed by Discord tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityResolution {
    pub addresses: BTreeMap<Cohort, BTreeMap<String, Address>>,
    /// Tags without a verified address, per cohort.
    pub unresolved: BTreeMap<Cohort, Vec<String>>,
}

impl IdentityResolution {
    /// Verified address of `tag` in `cohort`, if any.
    pub fn address(&self, cohort: Cohort, tag: &str) -> Option<&Address> {
        self.addresses.get(&cohort).and_then(|by_tag| by_tag.get(tag))
    }

    /// Every resolved tag/address pair in `cohort`.
    pub fn resolved(&self, cohort: Cohort) -> Option<&BTreeMap<String, Address>> {
        self.addresses.get(&cohort)
    }

    /// Tags without a verified address in `cohort`.
    pub fn unresolved(&self, cohort: Cohort) -> &[String] {
        self.unresolved
            .get(&cohort)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Character subgraph answer: character account per player address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountLookup {
    pub accounts: BTreeMap<Address, Address>,
    /// Player addresses that own no character in the game.
    pub unresolved: Vec<Address>,
}

/// Character accounts of one cohort, keyed by Discord tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CohortCharacters {
    pub accounts: BTreeMap<String, Address>,
    /// Tags with a verified address but no character in this cohort's game.
    pub without_character: Vec<String>,
}

/// Full eligibility picture for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Eligibility {
    pub identities: IdentityResolution,
    pub characters: BTreeMap<Cohort, CohortCharacters>,
}

impl Eligibility {
    /// Distinct character accounts across all cohorts.
    pub fn all_accounts(&self) -> BTreeSet<Address> {
        self.characters
            .values()
            .flat_map(|characters| characters.accounts.values().copied())
            .collect()
    }

    /// Accounts receiving the badge. Only the main cohort is rewarded.
    pub fn reward_accounts(&self) -> Vec<Address> {
        self.characters
            .get(&Cohort::Main)
            .map(|characters| {
                characters
                    .accounts
                    .values()
                    .copied()
                    .collect::<BTreeSet<_>>()
                    .into_iter()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether `tag` was rewarded: it resolved to a main address and that address owns a
    /// main character.
    pub fn is_rewarded(&self, tag: &str) -> bool {
        self.characters
            .get(&Cohort::Main)
            .is_some_and(|characters| characters.accounts.contains_key(tag))
    }
}

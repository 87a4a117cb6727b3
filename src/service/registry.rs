//! DungeonMaster member registry client.
//!
//! The registry is a Hasura GraphQL endpoint with one member collection per cohort. Members
//! are matched on the Discord handle stored in `contact_info.discord`.

use alloy::primitives::Address;
use async_trait::async_trait;
use dioxus_logger::tracing;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use url::Url;

use crate::{
    error::AppError,
    model::{cohort::Cohort, eligibility::IdentityResolution},
    service::attendance::port::MemberRegistry,
    util::graphql::post_query,
};

const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

#[derive(Serialize)]
struct MembersVariables<'a> {
    tags: &'a [String],
}

#[derive(Deserialize)]
struct MembersData {
    members: Vec<MemberRow>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberRow {
    pub eth_address: Option<String>,
    pub contact_info: Option<ContactInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfo {
    pub discord: Option<String>,
}

pub struct DungeonMasterRegistry {
    http_client: reqwest::Client,
    endpoint: Url,
    admin_secret: Option<String>,
}

impl DungeonMasterRegistry {
    pub fn new(http_client: reqwest::Client, endpoint: Url, admin_secret: Option<String>) -> Self {
        Self {
            http_client,
            endpoint,
            admin_secret,
        }
    }

    async fn query_cohort(
        &self,
        cohort: Cohort,
        tags: &[String],
    ) -> Result<(Cohort, BTreeMap<String, Address>, Vec<String>), AppError> {
        let query = members_query(cohort);

        let mut request = self.http_client.post(self.endpoint.clone());
        if let Some(secret) = &self.admin_secret {
            request = request.header(ADMIN_SECRET_HEADER, secret);
        }

        let data: MembersData = post_query(
            request,
            self.endpoint.as_str(),
            &query,
            MembersVariables { tags },
        )
        .await?;

        let (resolved, unresolved) = partition_members(tags, data.members);

        Ok((cohort, resolved, unresolved))
    }
}

#[async_trait]
impl MemberRegistry for DungeonMasterRegistry {
    async fn resolve_addresses(
        &self,
        tags: &[String],
        cohorts: &[Cohort],
    ) -> Result<IdentityResolution, AppError> {
        let mut resolution = IdentityResolution::default();
        if tags.is_empty() {
            return Ok(resolution);
        }

        let results = try_join_all(
            cohorts
                .iter()
                .map(|cohort| self.query_cohort(*cohort, tags)),
        )
        .await?;

        for (cohort, resolved, unresolved) in results {
            resolution.addresses.insert(cohort, resolved);
            resolution.unresolved.insert(cohort, unresolved);
        }

        Ok(resolution)
    }
}

fn members_query(cohort: Cohort) -> String {
    format!(
        "query MembersByDiscordTags($tags: [String!]!) {{ \
         members: {}(where: {{ contact_info: {{ discord: {{ _in: $tags }} }} }}) {{ \
         eth_address contact_info {{ discord }} }} }}",
        cohort.registry_collection()
    )
}

/// Splits the requested tags into those with a valid registered address and the rest.
///
/// Every requested tag lands in exactly one of the two outputs. Rows with a malformed
/// address count as unregistered.
pub fn partition_members(
    tags: &[String],
    rows: Vec<MemberRow>,
) -> (BTreeMap<String, Address>, Vec<String>) {
    let mut by_tag: HashMap<String, Address> = HashMap::new();

    for row in rows {
        let Some(tag) = row.contact_info.and_then(|info| info.discord) else {
            continue;
        };
        let Some(raw) = row.eth_address else {
            continue;
        };

        match raw.trim().parse::<Address>() {
            Ok(address) => {
                by_tag.entry(tag).or_insert(address);
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid registry address for {}: {}", tag, e);
            }
        }
    }

    let mut resolved = BTreeMap::new();
    let mut unresolved = Vec::new();
    for tag in tags {
        match by_tag.get(tag) {
            Some(address) => {
                resolved.insert(tag.clone(), *address);
            }
            None => unresolved.push(tag.clone()),
        }
    }

    (resolved, unresolved)
}

//! Minimal GraphQL-over-HTTP helper shared by the member registry and the character
//! subgraph clients.

use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::{registry::RegistryError, AppError};

#[derive(Serialize)]
struct GraphQlRequest<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlErrorMessage>>,
}

#[derive(Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// Posts a GraphQL query and deserializes its `data` payload.
///
/// The caller supplies the request builder so it can attach endpoint-specific headers
/// (for example the registry admin secret).
///
/// # Arguments
/// - `request` - POST request builder targeting the GraphQL endpoint
/// - `endpoint` - Endpoint URL, used for error messages only
/// - `query` - GraphQL document
/// - `variables` - Serializable query variables
///
/// # Returns
/// - `Ok(T)` - Deserialized `data` object
/// - `Err(AppError::ReqwestErr)` - Transport failure, non-2xx status or invalid JSON
/// - `Err(AppError::RegistryErr)` - Response carried GraphQL errors or no data
pub async fn post_query<V, T>(
    request: RequestBuilder,
    endpoint: &str,
    query: &str,
    variables: V,
) -> Result<T, AppError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let response: GraphQlResponse<T> = request
        .json(&GraphQlRequest { query, variables })
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        let messages = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");

        return Err(RegistryError::Query {
            endpoint: endpoint.to_string(),
            messages,
        }
        .into());
    }

    response.data.ok_or_else(|| {
        RegistryError::MissingData {
            endpoint: endpoint.to_string(),
        }
        .into()
    })
}

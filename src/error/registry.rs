use thiserror::Error;

/// Errors returned by GraphQL endpoints (member registry and character subgraphs).
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The endpoint answered with a GraphQL `errors` array.
    #[error("GraphQL query to {endpoint} failed: {messages}")]
    Query {
        /// Endpoint that was queried
        endpoint: String,
        /// Joined error messages from the response
        messages: String,
    },

    /// The endpoint answered without `data` and without errors.
    #[error("GraphQL query to {endpoint} returned no data")]
    MissingData {
        /// Endpoint that was queried
        endpoint: String,
    },
}

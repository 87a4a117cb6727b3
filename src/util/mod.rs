pub mod graphql;
pub mod parse;

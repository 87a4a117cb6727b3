//! Business logic and the concrete clients behind the attendance workflow's collaborators.

pub mod attendance;
pub mod badge;
pub mod character;
pub mod registry;

//! Persistence: sea-orm entities, shared value types and the repositories
//! handlers go through.

pub mod entities;
pub mod enums;
pub mod repositories;

pub use entities::{Artist, Show, Venue};
pub use enums::Genre;

//! HTTP handlers for the movie resource.

pub mod movie;
pub use movie::*;

//! Domain types and pure rules for the project dashboard.
//!
//! Nothing in this crate performs I/O. The resource client and the state
//! managers build on these types so that validation, filtering, status
//! presentation and routing behave identically everywhere.

pub mod error;
pub mod filter;
pub mod presentation;
pub mod project;
pub mod routes;
pub mod types;

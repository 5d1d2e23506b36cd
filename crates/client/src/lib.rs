//! Resource client for the remote `/projects` collection.
//!
//! [`ProjectResource`](resource::ProjectResource) is the capability set the
//! state managers program against. Two implementations ship here: the
//! [`reqwest`]-backed [`HttpProjectApi`](api::HttpProjectApi) and the
//! in-memory [`MemoryProjectStore`](memory::MemoryProjectStore) used for
//! fixtures and tests. Neither retries nor caches.

pub mod api;
pub mod config;
pub mod error;
pub mod memory;
pub mod resource;

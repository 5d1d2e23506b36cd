//! Terminal front end for the project managers.
//!
//! [`args`] turns the command line into a [`args::Command`], [`commands`]
//! drives the matching manager against a resource, and [`render`] prints
//! manager state as plain text.

pub mod args;
pub mod commands;
pub mod render;

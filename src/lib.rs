//! Command-line front end for the Stryker mutation testing tool.
//!
//! Maps raw arguments onto a strongly-typed [`config::ConfigModel`].

pub mod args;
pub mod config;
pub mod logging;

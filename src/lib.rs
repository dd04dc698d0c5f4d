//! gsearch library
//!
//! A blocking client for the Google AJAX Search API, plus the config and
//! logging plumbing used by the `gsearch` binary.

pub mod cli;
pub mod config;
pub mod logging;
pub mod search;

pub use search::{ClientConfig, Operation, QueryOptions, SearchClient, SearchError};

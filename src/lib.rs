//! tasknest - TaskNest Client Library
//!
//! This library provides the core functionality for the tasknest CLI, a
//! client for the TaskNest task service.
//!
//! # Core Concepts
//!
//! - **Tasks**: titled, categorized records owned by the remote service
//! - **Sessions**: bearer tokens obtained via login, persisted across runs
//! - **Synchronization**: an in-memory mirror updated only on server
//!   confirmation, with full replacement on fetch (last-fetch-wins)
//!
//! # Module Organization
//!
//! - `api`: remote API trait and the HTTP implementation
//! - `cli`: command-line interface using clap
//! - `client`: task list synchronization client
//! - `config`: configuration loading from `tasknest.toml`
//! - `error`: error types and result aliases
//! - `output`: shared JSON/human output formatting
//! - `session`: session type and file-backed token store
//! - `task`: task and category wire models

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod session;
pub mod task;

pub use error::{Error, Result};

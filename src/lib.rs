//! Nether, a chat-style personal task tracker.
//!
//! Lines like `todo buy milk` or `deadline report /by 2024-03-15 1800` are
//! parsed into [`parser::Command`]s, applied to an in-memory list of
//! [`models::Task`]s and persisted to a pipe-delimited text file after every
//! change.

pub mod chat;
pub mod commands;
pub mod config;
pub mod datetime;
pub mod error;
pub mod models;
pub mod parser;
pub mod storage;

pub use error::{NetherError, Result};

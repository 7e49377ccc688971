//! 議員候補者名簿 CLI

pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod photo_store;
pub mod session;

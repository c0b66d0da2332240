//! Configuration file and credential lookup

pub mod config_store;
pub mod token_store;

pub use config_store::{ConfigStore, HeimdallConfig, PlatformEntry};
pub use token_store::{ConfiguredTokens, TokenProvider};

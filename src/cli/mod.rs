//! CLI module for the HTLC wallet

pub mod app;
pub mod commands;

pub use app::WalletApp;
pub use commands::{Cli, Commands};

//! CLI command definitions

use crate::types::{AccountId, AssetId, HtlcId};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "htlc-wallet")]
#[command(about = "Build and submit hashed timelock contract operations", long_about = None)]
pub struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the core (fee) asset id
    #[arg(long, global = true)]
    pub core_asset: Option<AssetId>,

    /// Sign without broadcasting
    #[arg(long, global = true)]
    pub no_broadcast: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Hash a preimage and print the digest and its size
    Hash {
        /// Preimage text (or hex with --hex)
        preimage: String,

        /// Hash algorithm (sha256, ripemd160)
        #[arg(short, long, default_value = "sha256")]
        cipher: String,

        /// Treat the preimage as hex
        #[arg(long)]
        hex: bool,
    },

    /// Generate a random secret and its commitment
    Secret {
        /// Secret length in bytes
        #[arg(short, long, default_value = "32")]
        length: usize,

        /// Hash algorithm (sha256, ripemd160)
        #[arg(short, long, default_value = "sha256")]
        cipher: String,
    },

    /// Lock funds in a new HTLC
    Create {
        /// Sending account
        #[arg(long)]
        from: AccountId,

        /// Receiving account
        #[arg(long)]
        to: AccountId,

        /// Asset to lock
        #[arg(long, default_value = "1.3.0")]
        asset: AssetId,

        /// Amount in the asset's smallest unit
        #[arg(short, long)]
        amount: u64,

        /// Seconds until the contract expires
        #[arg(short, long)]
        lock_seconds: u32,

        /// Hash algorithm (sha256, ripemd160)
        #[arg(short, long, default_value = "sha256")]
        cipher: String,

        /// Secret preimage (text, or hex with --hex)
        #[arg(short, long)]
        preimage: Option<String>,

        /// Treat the preimage as hex
        #[arg(long)]
        hex: bool,

        /// Precomputed commitment digest (hex)
        #[arg(long)]
        preimage_hash: Option<String>,

        /// Preimage size in bytes, required with --preimage-hash
        #[arg(long)]
        preimage_size: Option<u32>,

        /// Asset to pay the fee in
        #[arg(long)]
        fee_asset: Option<AssetId>,
    },

    /// Redeem an HTLC by revealing its secret
    Redeem {
        /// HTLC id
        #[arg(long)]
        htlc_id: HtlcId,

        /// Redeeming account
        #[arg(long)]
        redeemer: AccountId,

        /// Secret preimage (text, or hex with --hex)
        #[arg(short, long)]
        preimage: String,

        /// Treat the preimage as hex
        #[arg(long)]
        hex: bool,
    },

    /// Extend an HTLC's expiry
    Extend {
        /// HTLC id
        #[arg(long)]
        htlc_id: HtlcId,

        /// Issuing account
        #[arg(long)]
        issuer: AccountId,

        /// Seconds to add
        #[arg(short, long)]
        seconds: u32,
    },
}

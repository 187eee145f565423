//! Application constants and configuration

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_TITLE: &str = "Wallet RPC Console";

/// Demo signer account used when no account is configured.
pub const DEFAULT_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

/// Simulated wallet round-trip latency.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1500;

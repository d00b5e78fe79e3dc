//! Wallet connection boundary.
//!
//! # Responsibility
//! - Normalize connection to external blockchain-wallet browser providers
//!   behind one `connect_wallet` operation.
//! - Describe the nominally supported wallets for connection choosers.
//!
//! # Invariants
//! - Declared-but-unwired wallets fail with explicit errors; they never
//!   silently no-op or hang.
//! - A failed connect leaves the caller unauthenticated and free to retry;
//!   no retry or backoff lives here.

pub mod connector;
pub mod provider;

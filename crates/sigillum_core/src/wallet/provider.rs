//! Wallet provider SPI and the static wallet catalog.
//!
//! # Responsibility
//! - Mirror the injected Freighter extension interface as an async trait.
//! - Define the wallet taxonomy and per-wallet descriptors.
//!
//! # Invariants
//! - Wallet ids are stable lowercase tokens; they appear in logs, errors
//!   and chooser UIs and must not change meaning.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Nominally supported wallet kinds.
///
/// A closed set at the type boundary; only Freighter is wired up today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletType {
    Freighter,
    Albedo,
    Xbull,
    Ledger,
    Lobstr,
    Rabet,
    Hana,
}

impl WalletType {
    /// Stable string id used in catalogs, logs and error text.
    pub fn id(self) -> &'static str {
        match self {
            Self::Freighter => "freighter",
            Self::Albedo => "albedo",
            Self::Xbull => "xbull",
            Self::Ledger => "ledger",
            Self::Lobstr => "lobstr",
            Self::Rabet => "rabet",
            Self::Hana => "hana",
        }
    }

    /// Parses a stable wallet id back into the enum.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "freighter" => Some(Self::Freighter),
            "albedo" => Some(Self::Albedo),
            "xbull" => Some(Self::Xbull),
            "ledger" => Some(Self::Ledger),
            "lobstr" => Some(Self::Lobstr),
            "rabet" => Some(Self::Rabet),
            "hana" => Some(Self::Hana),
            _ => None,
        }
    }
}

impl Display for WalletType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Static descriptor for one wallet connection choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WalletInfo {
    pub id: WalletType,
    pub name: &'static str,
    pub icon: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Wallets shown by connection choosers, in display order.
pub const SUPPORTED_WALLETS: &[WalletInfo] = &[
    WalletInfo {
        id: WalletType::Freighter,
        name: "Freighter",
        icon: "🚀",
        enabled: true,
        description: "Chrome Extension",
    },
    WalletInfo {
        id: WalletType::Albedo,
        name: "Albedo",
        icon: "⭐",
        enabled: true,
        description: "Web-based Wallet",
    },
    WalletInfo {
        id: WalletType::Xbull,
        name: "xBull",
        icon: "🐂",
        enabled: true,
        description: "Multi-platform Wallet",
    },
    WalletInfo {
        id: WalletType::Ledger,
        name: "Ledger",
        icon: "🔐",
        enabled: true,
        description: "Hardware Wallet",
    },
    WalletInfo {
        id: WalletType::Lobstr,
        name: "LOBSTR",
        icon: "🦞",
        enabled: false,
        description: "Not Available",
    },
    WalletInfo {
        id: WalletType::Rabet,
        name: "Rabet",
        icon: "🐰",
        enabled: false,
        description: "Not Available",
    },
    WalletInfo {
        id: WalletType::Hana,
        name: "Hana Wallet",
        icon: "🌸",
        enabled: false,
        description: "Not Available",
    },
];

/// Failure reported by one call into an injected wallet API.
///
/// Carries the provider method name so callers can tell a permission
/// request failure apart from a key or network read failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderCallError {
    /// Provider method that failed (for example `set_allowed`).
    pub method: &'static str,
    /// Human-readable failure detail from the provider.
    pub message: String,
}

impl ProviderCallError {
    pub fn new(method: &'static str, message: impl Into<String>) -> Self {
        Self {
            method,
            message: message.into(),
        }
    }
}

impl Display for ProviderCallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "provider call `{}` failed: {}", self.method, self.message)
    }
}

impl Error for ProviderCallError {}

/// Options forwarded to the provider's transaction signing call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignOptions {
    pub network: Option<String>,
    pub network_passphrase: Option<String>,
}

/// Injected Freighter extension interface.
///
/// Every call is deferred: the extension answers asynchronously and no
/// timeout is applied here. `is_connected` and `sign_transaction` are
/// declared for future signing work; the connect flow never invokes them.
#[async_trait]
pub trait FreighterApi: Send + Sync {
    async fn is_connected(&self) -> Result<bool, ProviderCallError>;
    async fn get_public_key(&self) -> Result<String, ProviderCallError>;
    async fn sign_transaction(
        &self,
        xdr: &str,
        opts: Option<SignOptions>,
    ) -> Result<String, ProviderCallError>;
    async fn get_network(&self) -> Result<String, ProviderCallError>;
    async fn is_allowed(&self) -> Result<bool, ProviderCallError>;
    async fn set_allowed(&self) -> Result<(), ProviderCallError>;
}

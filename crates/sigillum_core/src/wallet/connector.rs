//! Wallet connector over injected provider APIs.
//!
//! # Responsibility
//! - Dispatch `connect_wallet` to the provider-specific flow.
//! - Normalize provider results into `WalletSession` and provider failures
//!   into `WalletError`.
//!
//! # Invariants
//! - Permission-request failures propagate; they are never swallowed.
//! - Unwired wallets fail with `ComingSoon`/`Unavailable`, never hang.
//! - No timeout is enforced on provider calls; callers own cancellation.

use crate::wallet::provider::{FreighterApi, ProviderCallError, WalletInfo, WalletType, SUPPORTED_WALLETS};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Addresses shorter than this are displayed in full.
const SHORTEN_MIN_LEN: usize = 12;

/// Successful wallet connection result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSession {
    /// Account public key reported by the provider.
    pub public_key: String,
    /// Active network identifier reported by the provider.
    pub network: String,
}

/// Connection failure taxonomy for `connect_wallet`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    /// The provider's browser extension is not present.
    NotInstalled(WalletType),
    /// Declared wallet whose integration is not yet implemented.
    ComingSoon(WalletType),
    /// Declared wallet that is not available at all.
    Unavailable(WalletType),
    /// A provider call failed during the connect flow.
    Provider {
        wallet: WalletType,
        source: ProviderCallError,
    },
}

impl Display for WalletError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotInstalled(wallet) => write!(
                f,
                "{} wallet is not installed; install the {} browser extension and retry",
                wallet, wallet
            ),
            Self::ComingSoon(wallet) => {
                write!(f, "{wallet} wallet integration coming soon")
            }
            Self::Unavailable(wallet) => write!(f, "wallet {wallet} is not available"),
            Self::Provider { wallet, source } => {
                write!(f, "failed to connect to {wallet}: {source}")
            }
        }
    }
}

impl Error for WalletError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Provider { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Wallet connector for one UI session.
///
/// Constructed with the detected provider handle at startup; `None` models
/// an environment where the extension is not injected. One connector per
/// session (or per test).
#[derive(Default)]
pub struct WalletConnector {
    freighter: Option<Arc<dyn FreighterApi>>,
}

impl WalletConnector {
    /// Connector with no detected providers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Connector with a detected Freighter extension handle.
    pub fn with_freighter(api: Arc<dyn FreighterApi>) -> Self {
        Self {
            freighter: Some(api),
        }
    }

    /// Whether a Freighter extension handle was detected.
    pub fn is_freighter_installed(&self) -> bool {
        self.freighter.is_some()
    }

    /// Wallets to offer in a connection chooser.
    pub fn supported_wallets(&self) -> &'static [WalletInfo] {
        SUPPORTED_WALLETS
    }

    /// Connects to the requested wallet and returns the session identity.
    ///
    /// Only Freighter is wired up; other declared wallets fail with an
    /// explicit not-implemented error rather than no-op.
    pub async fn connect_wallet(&self, wallet: WalletType) -> Result<WalletSession, WalletError> {
        let result = match wallet {
            WalletType::Freighter => self.connect_freighter().await,
            WalletType::Albedo | WalletType::Xbull | WalletType::Ledger => {
                Err(WalletError::ComingSoon(wallet))
            }
            WalletType::Lobstr | WalletType::Rabet | WalletType::Hana => {
                Err(WalletError::Unavailable(wallet))
            }
        };

        match &result {
            Ok(session) => info!(
                "event=wallet_connect module=wallet status=ok wallet={} network={}",
                wallet, session.network
            ),
            Err(err) => warn!(
                "event=wallet_connect module=wallet status=error wallet={wallet} reason={err}"
            ),
        }
        result
    }

    async fn connect_freighter(&self) -> Result<WalletSession, WalletError> {
        let api = self
            .freighter
            .as_ref()
            .ok_or(WalletError::NotInstalled(WalletType::Freighter))?;

        let allowed = api.is_allowed().await.map_err(provider_failure)?;
        if !allowed {
            api.set_allowed().await.map_err(provider_failure)?;
        }

        let public_key = api.get_public_key().await.map_err(provider_failure)?;
        let network = api.get_network().await.map_err(provider_failure)?;

        Ok(WalletSession {
            public_key,
            network,
        })
    }
}

fn provider_failure(source: ProviderCallError) -> WalletError {
    WalletError::Provider {
        wallet: WalletType::Freighter,
        source,
    }
}

/// Shortens an account address for display.
///
/// Addresses shorter than 12 characters are returned unchanged; longer
/// ones collapse to first four, ellipsis, last four. The 12-character
/// boundary is relied on by display-consistency tests.
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < SHORTEN_MIN_LEN {
        return address.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

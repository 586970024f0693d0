//! Bitcoin network definitions and address parameters.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoding::parse_hrp;

/// Errors raised while loading or validating network parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The parameter document is not valid JSON for [`NetworkParams`].
    #[error("invalid network parameters: {0}")]
    Json(#[from] serde_json::Error),

    /// The bech32 human-readable part cannot be used for segwit addresses.
    #[error("invalid bech32 prefix {hrp:?}: {reason}")]
    InvalidHrp { hrp: String, reason: String },

    /// The network name is not one of the built-in networks.
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
}

/// Bitcoin network type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet
    #[default]
    Mainnet,
    /// Bitcoin testnet4
    Testnet4,
    /// Bitcoin signet
    Signet,
    /// Local regression test network
    Regtest,
}

impl Network {
    /// All built-in networks.
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet4,
        Network::Signet,
        Network::Regtest,
    ];

    /// Get the Bech32 human-readable part for this network.
    pub fn bech32_hrp(&self) -> &'static str {
        match self {
            Network::Mainnet => "bc",
            Network::Testnet4 | Network::Signet => "tb",
            Network::Regtest => "bcrt",
        }
    }

    /// Get the version byte for P2PKH addresses.
    pub fn p2pkh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet4 | Network::Signet | Network::Regtest => 0x6f,
        }
    }

    /// Get the version byte for P2SH addresses.
    pub fn p2sh_version(&self) -> u8 {
        match self {
            Network::Mainnet => 0x05,
            Network::Testnet4 | Network::Signet | Network::Regtest => 0xc4,
        }
    }

    /// Get network name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet4 => "testnet4",
            Network::Signet => "signet",
            Network::Regtest => "regtest",
        }
    }

    /// Address parameters for this network.
    pub fn params(&self) -> NetworkParams {
        NetworkParams {
            name: self.name().to_string(),
            pubkey_hash_version: self.p2pkh_version(),
            script_hash_version: self.p2sh_version(),
            bech32_hrp: self.bech32_hrp().to_string(),
        }
    }
}

impl FromStr for Network {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Network::Mainnet),
            "testnet4" | "testnet" | "test" => Ok(Network::Testnet4),
            "signet" => Ok(Network::Signet),
            "regtest" => Ok(Network::Regtest),
            _ => Err(ConfigError::UnknownNetwork(s.to_string())),
        }
    }
}

impl core::fmt::Display for Network {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Version bytes and prefixes used to render addresses for one network.
///
/// This is plain data: the built-in sets come from [`Network::params`], custom
/// sets can be loaded with [`NetworkParams::from_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkParams {
    /// Human-readable network name, informational only.
    pub name: String,
    /// Base58check version byte of pay-to-pubkey-hash addresses.
    pub pubkey_hash_version: u8,
    /// Base58check version byte of pay-to-script-hash addresses.
    pub script_hash_version: u8,
    /// Human-readable part of bech32/bech32m witness addresses.
    pub bech32_hrp: String,
}

impl NetworkParams {
    /// Parse and validate a parameter set from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let params: NetworkParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Check that the parameters can encode every supported address type.
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_hrp(&self.bech32_hrp)
            .map(|_| ())
            .map_err(|e| ConfigError::InvalidHrp {
                hrp: self.bech32_hrp.clone(),
                reason: e.to_string(),
            })
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Network::default().params()
    }
}

impl From<Network> for NetworkParams {
    fn from(network: Network) -> Self {
        network.params()
    }
}

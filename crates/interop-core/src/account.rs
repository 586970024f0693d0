//! Accounts: one public key and every address it represents on a network.

use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::address::AddressKind;
use crate::derive::derive_address;
use crate::error::GenerateError;
use crate::network::NetworkParams;

/// A public key together with the addresses derived from it.
///
/// Addresses start out empty and are filled in by [`Account::generate`] or
/// [`Account::generate_all`]. A populated address is never recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account<'a> {
    #[serde(serialize_with = "hex::serde::serialize")]
    pubkey: Vec<u8>,
    #[serde(rename = "network", serialize_with = "serialize_network_name")]
    params: &'a NetworkParams,
    p2pk: Option<String>,
    p2pkh: Option<String>,
    p2wpkh: Option<String>,
    p2tr: Option<String>,
    eth: Option<String>,
}

fn serialize_network_name<S: Serializer>(
    params: &&NetworkParams,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&params.name)
}

impl<'a> Account<'a> {
    /// Create an account with no addresses derived yet.
    pub fn new(pubkey: impl Into<Vec<u8>>, params: &'a NetworkParams) -> Self {
        Account {
            pubkey: pubkey.into(),
            params,
            p2pk: None,
            p2pkh: None,
            p2wpkh: None,
            p2tr: None,
            eth: None,
        }
    }

    /// The public key bytes as supplied.
    pub fn pubkey(&self) -> &[u8] {
        &self.pubkey
    }

    /// The network parameters addresses are rendered for.
    pub fn params(&self) -> &'a NetworkParams {
        self.params
    }

    /// The address of the given kind, if it has been derived.
    pub fn address(&self, kind: AddressKind) -> Option<&str> {
        match kind {
            AddressKind::P2PK => self.p2pk.as_deref(),
            AddressKind::P2PKH => self.p2pkh.as_deref(),
            AddressKind::P2WPKH => self.p2wpkh.as_deref(),
            AddressKind::P2TR => self.p2tr.as_deref(),
            AddressKind::Ethereum => self.eth.as_deref(),
        }
    }

    /// The pay-to-pubkey address, if derived.
    pub fn p2pk(&self) -> Option<&str> {
        self.p2pk.as_deref()
    }

    /// The pay-to-pubkey-hash address, if derived.
    pub fn p2pkh(&self) -> Option<&str> {
        self.p2pkh.as_deref()
    }

    /// The native segwit v0 address, if derived.
    pub fn p2wpkh(&self) -> Option<&str> {
        self.p2wpkh.as_deref()
    }

    /// The taproot key-path address, if derived.
    pub fn p2tr(&self) -> Option<&str> {
        self.p2tr.as_deref()
    }

    /// The Ethereum address, if derived.
    pub fn eth(&self) -> Option<&str> {
        self.eth.as_deref()
    }

    /// Populated addresses in generation order.
    pub fn addresses(&self) -> impl Iterator<Item = (AddressKind, &str)> + '_ {
        AddressKind::ALL
            .into_iter()
            .filter_map(move |kind| self.address(kind).map(|address| (kind, address)))
    }

    /// Whether every address kind has been derived.
    pub fn is_complete(&self) -> bool {
        AddressKind::ALL.iter().all(|kind| self.address(*kind).is_some())
    }

    /// Derive one address, unless it is already populated.
    pub fn generate(&mut self, kind: AddressKind) -> Result<&str, GenerateError> {
        let Account {
            pubkey,
            params,
            p2pk,
            p2pkh,
            p2wpkh,
            p2tr,
            eth,
        } = self;
        let slot = match kind {
            AddressKind::P2PK => p2pk,
            AddressKind::P2PKH => p2pkh,
            AddressKind::P2WPKH => p2wpkh,
            AddressKind::P2TR => p2tr,
            AddressKind::Ethereum => eth,
        };

        let address = match slot.take() {
            Some(address) => address,
            None => {
                let address =
                    derive_address(kind, pubkey, params).map_err(|e| GenerateError::new(kind, e))?;
                debug!(%kind, %address, network = %params.name, "derived account address");
                address
            }
        };
        Ok(slot.insert(address).as_str())
    }

    /// Derive every address kind in order, stopping at the first failure.
    ///
    /// Addresses derived before the failure stay populated.
    pub fn generate_all(&mut self) -> Result<(), GenerateError> {
        for kind in AddressKind::ALL {
            if let Err(err) = self.generate(kind) {
                warn!(%kind, error = %err.source, "address generation stopped");
                return Err(err);
            }
        }
        Ok(())
    }
}

//! Address derivation for accounts that live on both Bitcoin and Ethereum.
//!
//! One secp256k1 public key maps to five addresses:
//! - P2PK and P2PKH - base58check of hash160 of the key
//! - P2WPKH - native SegWit v0 (bech32)
//! - P2TR - key-path-only Taproot output (bech32m)
//! - Ethereum - keccak256 of the uncompressed point
//!
//! Bitcoin addresses are rendered for a [`NetworkParams`], either a built-in
//! [`Network`] or a custom set loaded from JSON.

pub mod account;
pub mod address;
pub mod derive;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod key;
pub mod network;
pub mod tx_type;

pub use account::Account;
pub use address::{
    decode_address, decode_eth_address, AddressError, AddressKind, AddressType, DecodedAddress,
};
pub use derive::{
    derive_address, derive_eth, derive_p2pk, derive_p2pkh, derive_p2tr, derive_p2wpkh,
    p2pk_script_pubkey,
};
pub use error::{DeriveError, EncodeError, GenerateError};
pub use hash::{hash160, keccak256};
pub use network::{ConfigError, Network, NetworkParams};

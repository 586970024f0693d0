//! Address kinds and the decoding path back to hashes and scriptPubKeys.
//!
//! Bitcoin addresses decoded here:
//! - P2PKH (Pay to Public Key Hash) - base58check with the network's pubkey-hash version
//! - P2SH (Pay to Script Hash) - base58check with the network's script-hash version
//! - P2WPKH (Pay to Witness Public Key Hash) - Native SegWit v0, 20-byte program
//! - P2WSH (Pay to Witness Script Hash) - Native SegWit v0, 32-byte program
//! - P2TR (Pay to Taproot) - SegWit v1, 32-byte x-only output key
//!
//! Ethereum addresses decode to their 20 raw bytes with [`decode_eth_address`].

use serde::Serialize;
use thiserror::Error;

use crate::encoding::{base58check_decode, decode_segwit_address, PUBKEY_HASH_LEN};
use crate::network::{Network, NetworkParams};

/// Address decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Invalid address format
    #[error("Invalid address format")]
    InvalidFormat,
    /// Invalid Base58 character
    #[error("Invalid Base58 character: {0}")]
    InvalidBase58Char(char),
    /// Invalid checksum
    #[error("Invalid checksum")]
    InvalidChecksum,
    /// Invalid Bech32 encoding
    #[error("Invalid Bech32 encoding: {0}")]
    InvalidBech32(String),
    /// Address network mismatch
    #[error("Address network mismatch: expected {expected}, got {got}")]
    NetworkMismatch { expected: String, got: String },
    /// Unsupported address type
    #[error("Unsupported address type")]
    UnsupportedType,
}

/// The five address kinds derived for an account, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AddressKind {
    /// Pay to public key
    P2PK,
    /// Pay to public key hash
    P2PKH,
    /// Native SegWit v0 pay to witness public key hash
    P2WPKH,
    /// Taproot key-path output
    P2TR,
    /// Keccak-derived Ethereum account
    Ethereum,
}

impl AddressKind {
    /// Every kind, in the order accounts generate them.
    pub const ALL: [AddressKind; 5] = [
        AddressKind::P2PK,
        AddressKind::P2PKH,
        AddressKind::P2WPKH,
        AddressKind::P2TR,
        AddressKind::Ethereum,
    ];

    /// Get the display name for this address kind.
    pub fn name(&self) -> &'static str {
        match self {
            AddressKind::P2PK => "P2PK",
            AddressKind::P2PKH => "P2PKH",
            AddressKind::P2WPKH => "P2WPKH",
            AddressKind::P2TR => "P2TR",
            AddressKind::Ethereum => "Ethereum",
        }
    }
}

impl core::fmt::Display for AddressKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Bitcoin address type recovered by decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    /// Legacy P2PKH: OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
    P2PKH,
    /// P2SH: OP_HASH160 <20-byte-hash> OP_EQUAL
    P2SH,
    /// Native SegWit v0 P2WPKH: OP_0 <20-byte-hash>
    P2WPKH,
    /// Native SegWit v0 P2WSH: OP_0 <32-byte-hash>
    P2WSH,
    /// Taproot P2TR: OP_1 <32-byte-x-only-pubkey>
    P2TR,
}

/// A decoded Bitcoin address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// The type of address.
    pub address_type: AddressType,
    /// The hash or witness program carried by the address.
    pub payload: Vec<u8>,
    /// The scriptPubKey for this address (used in transaction outputs).
    pub script_pubkey: Vec<u8>,
    /// The original address string.
    pub display: String,
}

/// Decode a Bitcoin address produced under `params`.
pub fn decode_address(address: &str, params: &NetworkParams) -> Result<DecodedAddress, AddressError> {
    let trimmed = address.trim();

    // Segwit first, then base58check. When neither decodes, report the error
    // of the format the address looks like.
    match decode_segwit_address(trimmed) {
        Ok(decoded) => decoded_segwit(trimmed, decoded, params),
        Err(err) if looks_like_segwit(trimmed, params) => Err(err),
        Err(_) => decode_base58_address(trimmed, params),
    }
}

/// Whether `address` starts with `<hrp>1` for `params` or any built-in network.
fn looks_like_segwit(address: &str, params: &NetworkParams) -> bool {
    let lower = address.to_lowercase();
    core::iter::once(params.bech32_hrp.as_str())
        .chain(Network::ALL.iter().map(|n| n.bech32_hrp()))
        .any(|hrp| {
            lower
                .strip_prefix(hrp)
                .is_some_and(|rest| rest.starts_with('1'))
        })
}

/// Decode a Base58Check encoded address (P2PKH or P2SH).
fn decode_base58_address(address: &str, params: &NetworkParams) -> Result<DecodedAddress, AddressError> {
    let (version, hash) = base58check_decode(address)?;

    if hash.len() != PUBKEY_HASH_LEN {
        return Err(AddressError::InvalidFormat);
    }

    let address_type = if version == params.pubkey_hash_version {
        AddressType::P2PKH
    } else if version == params.script_hash_version {
        AddressType::P2SH
    } else {
        // Name the built-in network the version belongs to, if any.
        let got = Network::ALL
            .iter()
            .find(|n| n.p2pkh_version() == version || n.p2sh_version() == version)
            .ok_or(AddressError::InvalidFormat)?;
        return Err(AddressError::NetworkMismatch {
            expected: params.name.clone(),
            got: got.name().into(),
        });
    };

    let script_pubkey = match address_type {
        AddressType::P2PKH => {
            // OP_DUP OP_HASH160 <20-byte-hash> OP_EQUALVERIFY OP_CHECKSIG
            let mut script = Vec::with_capacity(25);
            script.push(0x76); // OP_DUP
            script.push(0xa9); // OP_HASH160
            script.push(0x14); // Push 20 bytes
            script.extend_from_slice(&hash);
            script.push(0x88); // OP_EQUALVERIFY
            script.push(0xac); // OP_CHECKSIG
            script
        }
        _ => {
            // OP_HASH160 <20-byte-hash> OP_EQUAL
            let mut script = Vec::with_capacity(23);
            script.push(0xa9); // OP_HASH160
            script.push(0x14); // Push 20 bytes
            script.extend_from_slice(&hash);
            script.push(0x87); // OP_EQUAL
            script
        }
    };

    Ok(DecodedAddress {
        address_type,
        payload: hash,
        script_pubkey,
        display: address.to_string(),
    })
}

/// Classify a decoded segwit address (P2WPKH, P2WSH, or P2TR).
fn decoded_segwit(
    address: &str,
    (hrp, witness_version, program): (String, u8, Vec<u8>),
    params: &NetworkParams,
) -> Result<DecodedAddress, AddressError> {
    if hrp != params.bech32_hrp {
        // Name the built-in network the HRP belongs to, if any.
        let got = Network::ALL
            .iter()
            .find(|n| n.bech32_hrp() == hrp)
            .map_or(hrp, |n| n.name().to_string());
        return Err(AddressError::NetworkMismatch {
            expected: params.name.clone(),
            got,
        });
    }

    let address_type = match (witness_version, program.len()) {
        (0, 20) => AddressType::P2WPKH,
        (0, 32) => AddressType::P2WSH,
        (1, 32) => AddressType::P2TR,
        // Valid witness programs of versions nobody spends to yet
        _ => return Err(AddressError::UnsupportedType),
    };

    // Build scriptPubKey: OP_n <program>
    // OP_0 = 0x00, OP_1 = 0x51, OP_2 = 0x52, etc.
    let version_opcode = if witness_version == 0 { 0x00 } else { 0x50 + witness_version };
    let mut script_pubkey = Vec::with_capacity(2 + program.len());
    script_pubkey.push(version_opcode);
    script_pubkey.push(program.len() as u8);
    script_pubkey.extend_from_slice(&program);

    Ok(DecodedAddress {
        address_type,
        payload: program,
        script_pubkey,
        display: address.to_string(),
    })
}

/// Decode a `0x`-prefixed Ethereum address into its 20 bytes.
///
/// Any letter case is accepted; checksum casing is not verified.
pub fn decode_eth_address(address: &str) -> Result<[u8; 20], AddressError> {
    let trimmed = address.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .ok_or(AddressError::InvalidFormat)?;

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressError::InvalidFormat)?;
    Ok(bytes)
}

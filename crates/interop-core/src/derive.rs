//! Address derivation from a single secp256k1 public key.
//!
//! Each function is a pure computation over the key bytes and the network
//! parameters. None of them depend on each other, so they can run in any order.
//! P2PKH and P2WPKH only hash the bytes they are given; the other kinds parse
//! the bytes as a curve point first.

use bech32::segwit;
use tracing::trace;

use crate::address::AddressKind;
use crate::encoding::{encode_hash_address, encode_segwit_address};
use crate::error::DeriveError;
use crate::hash::{hash160, keccak256};
use crate::key::{parse_public_key, taproot_output_key, uncompressed_bytes};
use crate::network::NetworkParams;

/// OP_CHECKSIG
const OP_CHECKSIG: u8 = 0xac;

/// Derive the address of the given kind.
pub fn derive_address(
    kind: AddressKind,
    pubkey: &[u8],
    params: &NetworkParams,
) -> Result<String, DeriveError> {
    trace!(%kind, pubkey_len = pubkey.len(), "deriving address");
    match kind {
        AddressKind::P2PK => derive_p2pk(pubkey, params),
        AddressKind::P2PKH => derive_p2pkh(pubkey, params),
        AddressKind::P2WPKH => derive_p2wpkh(pubkey, params),
        AddressKind::P2TR => derive_p2tr(pubkey, params),
        AddressKind::Ethereum => derive_eth(pubkey),
    }
}

/// Pay-to-pubkey address.
///
/// The key must be a valid point. Its address text is the base58check
/// pubkey-hash encoding of the key in the form it was supplied, so a
/// compressed and an uncompressed key render different addresses.
pub fn derive_p2pk(pubkey: &[u8], params: &NetworkParams) -> Result<String, DeriveError> {
    parse_public_key(pubkey)?;
    Ok(encode_hash_address(params.pubkey_hash_version, &hash160(pubkey))?)
}

/// The P2PK locking script: `<pubkey> OP_CHECKSIG`.
pub fn p2pk_script_pubkey(pubkey: &[u8]) -> Result<Vec<u8>, DeriveError> {
    parse_public_key(pubkey)?;
    let mut script = Vec::with_capacity(pubkey.len() + 2);
    // 33 and 65 are both direct pushes
    script.push(pubkey.len() as u8);
    script.extend_from_slice(pubkey);
    script.push(OP_CHECKSIG);
    Ok(script)
}

/// Pay-to-pubkey-hash address: base58check of hash160(pubkey).
pub fn derive_p2pkh(pubkey: &[u8], params: &NetworkParams) -> Result<String, DeriveError> {
    Ok(encode_hash_address(params.pubkey_hash_version, &hash160(pubkey))?)
}

/// Native segwit v0 address: bech32 of hash160(pubkey).
pub fn derive_p2wpkh(pubkey: &[u8], params: &NetworkParams) -> Result<String, DeriveError> {
    let program = hash160(pubkey);
    Ok(encode_segwit_address(&params.bech32_hrp, segwit::VERSION_0, &program)?)
}

/// Taproot key-path address: bech32m of the tweaked x-only output key.
pub fn derive_p2tr(pubkey: &[u8], params: &NetworkParams) -> Result<String, DeriveError> {
    let internal_key = parse_public_key(pubkey)?;
    let output_key = taproot_output_key(&internal_key)?;
    Ok(encode_segwit_address(
        &params.bech32_hrp,
        segwit::VERSION_1,
        &output_key.serialize(),
    )?)
}

/// Ethereum address: the last 20 bytes of keccak256 over the uncompressed
/// point, as lowercase hex with a `0x` prefix.
///
/// The point is always re-serialized uncompressed, so both encodings of the
/// same key give the same address. No EIP-55 checksum casing is applied.
pub fn derive_eth(pubkey: &[u8]) -> Result<String, DeriveError> {
    let key = parse_public_key(pubkey)?;
    let digest = keccak256(&uncompressed_bytes(&key));
    Ok(format!("0x{}", hex::encode(&digest[12..])))
}

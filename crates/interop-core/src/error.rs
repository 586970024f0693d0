//! Error types for address derivation.

use thiserror::Error;

use crate::address::AddressKind;

/// Failure of a single derivation step.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// The bytes are not a valid secp256k1 public key encoding.
    #[error("invalid public key encoding: {0}")]
    InvalidPublicKeyEncoding(#[from] secp256k1::Error),

    /// The address encoder rejected the computed hash or key.
    #[error("address encoding failed: {0}")]
    AddressEncodingFailed(#[from] EncodeError),
}

/// Reasons an address encoder can reject its input.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// A pubkey hash was not 20 bytes long.
    #[error("invalid hash length: expected 20 bytes, got {0}")]
    InvalidHashLength(usize),

    /// The network's bech32 prefix is unusable.
    #[error("invalid bech32 prefix: {0}")]
    InvalidHrp(#[from] bech32::primitives::hrp::Error),

    /// The bech32 prefix is valid but not lowercase.
    #[error("bech32 prefix {0:?} is not lowercase")]
    MixedCaseHrp(String),

    /// The segwit encoder rejected the witness program.
    #[error("segwit encoding failed: {0}")]
    Segwit(#[from] bech32::segwit::EncodeError),

    /// The taproot tweak hash is not a valid scalar, or the tweaked key is infinity.
    #[error("taproot tweak failed")]
    TaprootTweak,
}

/// A derivation failure tagged with the address kind that was being generated.
#[derive(Debug, Error)]
#[error("failed to generate {kind} address: {source}")]
pub struct GenerateError {
    /// The address kind whose derivation failed.
    pub kind: AddressKind,
    /// The underlying derivation error.
    #[source]
    pub source: DeriveError,
}

impl GenerateError {
    pub(crate) fn new(kind: AddressKind, source: DeriveError) -> Self {
        GenerateError { kind, source }
    }
}

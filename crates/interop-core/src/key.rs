//! SECP256K1 key handling: parsing, serialization and the taproot tweak.

use secp256k1::{PublicKey, Scalar, XOnlyPublicKey, SECP256K1};

use crate::error::{DeriveError, EncodeError};
use crate::hash::tagged_hash;

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_PUBKEY_LEN: usize = 33;

/// Length of an uncompressed SEC1 public key.
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Tag of the BIP-341 output key tweak hash.
const TAP_TWEAK_TAG: &str = "TapTweak";

/// Parse SEC1 bytes into a curve point.
///
/// Accepts 33-byte compressed and 65-byte uncompressed encodings. Anything
/// else, or bytes that are not on the curve, is an
/// [`DeriveError::InvalidPublicKeyEncoding`].
pub fn parse_public_key(bytes: &[u8]) -> Result<PublicKey, DeriveError> {
    Ok(PublicKey::from_slice(bytes)?)
}

/// Compute the BIP-341 output key for a key-path-only spend.
///
/// The tweak commits to the x-only internal key and no script tree:
/// `Q = lift_x(P) + int(hash_TapTweak(x(P)))·G`.
pub fn taproot_output_key(internal_key: &PublicKey) -> Result<XOnlyPublicKey, DeriveError> {
    let (internal_xonly, _parity) = internal_key.x_only_public_key();
    let tweak_hash = tagged_hash(TAP_TWEAK_TAG, &internal_xonly.serialize());
    let tweak = Scalar::from_be_bytes(tweak_hash).map_err(|_| EncodeError::TaprootTweak)?;
    let (output_key, _parity) = internal_xonly
        .add_tweak(SECP256K1, &tweak)
        .map_err(|_| EncodeError::TaprootTweak)?;
    Ok(output_key)
}

/// Serialize a point as 65 uncompressed bytes, whatever encoding it was parsed from.
#[inline]
pub fn uncompressed_bytes(key: &PublicKey) -> [u8; UNCOMPRESSED_PUBKEY_LEN] {
    key.serialize_uncompressed()
}

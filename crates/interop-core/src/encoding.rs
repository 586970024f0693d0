//! Base58check and segwit (bech32/bech32m) text encodings.

use bech32::{segwit, Fe32, Hrp};

use crate::address::AddressError;
use crate::error::EncodeError;

/// Length of a hash160 payload.
pub const PUBKEY_HASH_LEN: usize = 20;

/// Encode `payload` prefixed by `version` as base58check.
pub fn base58check_encode(version: u8, payload: &[u8]) -> String {
    bs58::encode(payload).with_check_version(version).into_string()
}

/// Encode a 20-byte pubkey or script hash as a base58check address.
pub fn encode_hash_address(version: u8, hash: &[u8]) -> Result<String, EncodeError> {
    if hash.len() != PUBKEY_HASH_LEN {
        return Err(EncodeError::InvalidHashLength(hash.len()));
    }
    Ok(base58check_encode(version, hash))
}

/// Decode a base58check string into its version byte and payload.
pub fn base58check_decode(input: &str) -> Result<(u8, Vec<u8>), AddressError> {
    let decoded = bs58::decode(input)
        .with_check(None)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidChecksum { .. } => AddressError::InvalidChecksum,
            bs58::decode::Error::InvalidCharacter { character, .. } => {
                AddressError::InvalidBase58Char(character)
            }
            _ => AddressError::InvalidFormat,
        })?;

    match decoded.split_first() {
        Some((version, payload)) => Ok((*version, payload.to_vec())),
        None => Err(AddressError::InvalidFormat),
    }
}

/// Parse a lowercase bech32 human-readable part.
pub fn parse_hrp(hrp: &str) -> Result<Hrp, EncodeError> {
    let parsed = Hrp::parse(hrp)?;
    if parsed.to_lowercase() != hrp {
        return Err(EncodeError::MixedCaseHrp(hrp.to_string()));
    }
    Ok(parsed)
}

/// Encode a witness program as a segwit address.
///
/// Version 0 programs use bech32, version 1 and above use bech32m.
pub fn encode_segwit_address(
    hrp: &str,
    version: Fe32,
    program: &[u8],
) -> Result<String, EncodeError> {
    let hrp = parse_hrp(hrp)?;
    Ok(segwit::encode(hrp, version, program)?)
}

/// Decode a segwit address into its prefix, witness version, and program.
///
/// The checksum variant is checked against the witness version.
pub fn decode_segwit_address(input: &str) -> Result<(String, u8, Vec<u8>), AddressError> {
    let (hrp, version, program) =
        segwit::decode(input).map_err(|e| AddressError::InvalidBech32(e.to_string()))?;
    Ok((hrp.to_lowercase(), version.to_u8(), program))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base58check_known_vector() {
        let hash = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(
            base58check_encode(0x00, &hash),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_hash_address_rejects_wrong_length() {
        let result = encode_hash_address(0x00, &[0u8; 19]);
        assert!(matches!(result, Err(EncodeError::InvalidHashLength(19))));
    }

    #[test]
    fn test_base58check_decode_checksum() {
        // Last character changed
        let result = base58check_decode("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ");
        assert!(matches!(result, Err(AddressError::InvalidChecksum)));

        let result = base58check_decode("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAM0");
        assert!(matches!(result, Err(AddressError::InvalidBase58Char('0'))));
    }

    #[test]
    fn test_segwit_v0_uses_bech32() {
        let program = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        let address = encode_segwit_address("bc", segwit::VERSION_0, &program).unwrap();
        assert_eq!(address, "bc1qw508d6qejxtdg4y5r3zarvary0c5xw7kv8f3t4");

        let (hrp, version, decoded) = decode_segwit_address(&address).unwrap();
        assert_eq!(hrp, "bc");
        assert_eq!(version, 0);
        assert_eq!(decoded, program);
    }

    #[test]
    fn test_segwit_rejects_bad_program_length() {
        let result = encode_segwit_address("bc", segwit::VERSION_0, &[0u8; 21]);
        assert!(matches!(result, Err(EncodeError::Segwit(_))));
    }

    #[test]
    fn test_parse_hrp_rejects_uppercase() {
        assert!(matches!(parse_hrp("TB"), Err(EncodeError::MixedCaseHrp(_))));
        assert!(matches!(parse_hrp(""), Err(EncodeError::InvalidHrp(_))));
        assert!(parse_hrp("bcrt").is_ok());
    }
}

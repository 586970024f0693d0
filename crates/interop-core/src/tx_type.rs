//! Transaction type identifiers shared with the Ethereum side.
//!
//! These are identifiers only; no transaction conversion lives in this crate.

/// Legacy (pre-EIP-2718) transaction.
pub const LEGACY: u8 = 0x00;

/// EIP-2930 access list transaction.
pub const ACCESS_LIST: u8 = 0x01;

/// EIP-1559 dynamic fee transaction.
pub const DYNAMIC_FEE: u8 = 0x02;

/// EIP-4844 blob transaction.
pub const BLOB: u8 = 0x03;

/// Reserved for transactions that originate on Bitcoin.
pub const BTC: u8 = 0x04;

use interop_core::{Account, AddressKind, DeriveError, Network, NetworkParams};

const GENERATOR_COMPRESSED: &str =
    "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";

#[test]
fn test_generator_point_mainnet_account() {
    let params = Network::Mainnet.params();
    let mut account = Account::new(hex::decode(GENERATOR_COMPRESSED).unwrap(), &params);

    account.generate_all().unwrap();

    let addresses: Vec<_> = account.addresses().collect();
    assert_eq!(addresses.len(), 5);
    assert_eq!(
        addresses[1],
        (AddressKind::P2PKH, "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH")
    );
    assert_eq!(
        addresses[4],
        (AddressKind::Ethereum, "0x7e5f4552091a69125d5dfcb7b8c2659029395bdf")
    );
}

#[test]
fn test_malformed_key_fails_at_p2pk() {
    let params = Network::Mainnet.params();
    let mut account = Account::new(vec![0u8; 10], &params);

    let err = account.generate_all().unwrap_err();

    assert!(err.to_string().starts_with("failed to generate P2PK address:"));
    assert_eq!(err.kind, AddressKind::P2PK);
    assert!(matches!(err.source, DeriveError::InvalidPublicKeyEncoding(_)));
    for kind in AddressKind::ALL {
        assert_eq!(account.address(kind), None);
    }
}

#[test]
fn test_bad_params_fail_at_p2wpkh() {
    let params = NetworkParams {
        name: "broken".to_string(),
        pubkey_hash_version: 0x00,
        script_hash_version: 0x05,
        bech32_hrp: String::new(),
    };
    let mut account = Account::new(hex::decode(GENERATOR_COMPRESSED).unwrap(), &params);

    let err = account.generate_all().unwrap_err();

    assert_eq!(err.kind, AddressKind::P2WPKH);
    assert!(matches!(err.source, DeriveError::AddressEncodingFailed(_)));
    assert!(err.to_string().starts_with("failed to generate P2WPKH address:"));
    assert!(account.p2pk().is_some());
    assert!(account.p2pkh().is_some());
    assert!(account.p2wpkh().is_none());
    assert!(account.p2tr().is_none());
    assert!(account.eth().is_none());
}

#[test]
fn test_custom_params_from_json() {
    let params = NetworkParams::from_json(
        r#"{"name":"regtest-custom","pubkey_hash_version":111,"script_hash_version":196,"bech32_hrp":"bcrt"}"#,
    )
    .unwrap();
    let mut account = Account::new(hex::decode(GENERATOR_COMPRESSED).unwrap(), &params);

    account.generate_all().unwrap();

    assert!(account.p2wpkh().unwrap().starts_with("bcrt1q"));
    assert!(account.p2tr().unwrap().starts_with("bcrt1p"));

    let regtest = Network::Regtest.params();
    let mut builtin = Account::new(hex::decode(GENERATOR_COMPRESSED).unwrap(), &regtest);
    builtin.generate_all().unwrap();
    assert_eq!(account.p2wpkh(), builtin.p2wpkh());
    assert_eq!(account.p2tr(), builtin.p2tr());
}

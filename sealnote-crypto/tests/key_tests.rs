use sealnote_crypto::{derive_key, hash_password, CryptoError, KEY_SIZE};

#[test]
fn derivation_is_deterministic() {
    let a = derive_key("Ab3xQ9", "secret").unwrap();
    let b = derive_key("Ab3xQ9", "secret").unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn derived_key_is_256_bit() {
    let key = derive_key("Ab3xQ9", "secret").unwrap();
    assert_eq!(key.as_bytes().len(), KEY_SIZE);
}

#[test]
fn identifier_changes_key() {
    let a = derive_key("Ab3xQ9", "secret").unwrap();
    let b = derive_key("Ab3xQ8", "secret").unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn password_changes_key() {
    let a = derive_key("Ab3xQ9", "secret").unwrap();
    let b = derive_key("Ab3xQ9", "secreT").unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn same_password_different_identifiers_never_collide() {
    // The identifier is the per-note salt; an identical password across two
    // notes must still produce two distinct keys.
    let a = derive_key("aaaaaa", "shared-password").unwrap();
    let b = derive_key("bbbbbb", "shared-password").unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn empty_password_does_not_error() {
    assert!(derive_key("Ab3xQ9", "").is_ok());
}

#[test]
fn empty_identifier_is_rejected() {
    assert!(matches!(
        derive_key("", "secret"),
        Err(CryptoError::EmptyIdentifier)
    ));
}

#[test]
fn hash_password_is_deterministic() {
    assert_eq!(hash_password("secret"), hash_password("secret"));
}

#[test]
fn hash_password_is_hex_sha256() {
    let digest = hash_password("secret");
    assert_eq!(digest.len(), 64);
    assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
    assert_eq!(digest, digest.to_lowercase());
    // Known vector for SHA-256("secret")
    assert_eq!(
        digest,
        "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
    );
}

#[test]
fn hash_password_distinguishes_inputs() {
    assert_ne!(hash_password("secret"), hash_password("secrets"));
}

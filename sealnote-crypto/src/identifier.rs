//! Short note identifier generation.
//!
//! Identifiers are shared alongside the note link, so they are not secret on
//! their own, but they feed key derivation and therefore must come from a
//! cryptographically secure source. Six characters over a 62-symbol alphabet
//! give 62^6 ≈ 5.7×10^10 combinations (~35.7 bits).

use rand::rngs::OsRng;
use rand::Rng;

/// Identifier length in characters.
pub const IDENTIFIER_LEN: usize = 6;

/// Alphabet for identifiers: lower and upper Latin letters plus digits.
pub const IDENTIFIER_ALPHABET: &[u8; 62] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generates a fresh random note identifier from the OS CSPRNG.
pub fn generate_identifier() -> String {
    let mut rng = OsRng;
    (0..IDENTIFIER_LEN)
        .map(|_| IDENTIFIER_ALPHABET[rng.gen_range(0..IDENTIFIER_ALPHABET.len())] as char)
        .collect()
}

//! Password digest helpers.
//!
//! Stored credentials are lowercase SHA-256 hex digests, kept for
//! compatibility with the data this backend migrates. The comparison is
//! case-insensitive because legacy rows mix digest casings.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of `contrasena`.
#[must_use]
pub fn digest(contrasena: &str) -> String {
    let hash = Sha256::digest(contrasena.as_bytes());
    hex::encode(hash)
}

/// Compares a plaintext password against a stored hex digest.
#[must_use]
pub fn verify(contrasena: &str, almacenada: &str) -> bool {
    digest(contrasena).eq_ignore_ascii_case(almacenada.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_lowercase_hex() {
        let d = digest("secreta");
        assert_eq!(d.len(), 64);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(d, d.to_lowercase());
    }

    #[test]
    fn verify_ignores_stored_casing() {
        let d = digest("secreta").to_uppercase();
        assert!(verify("secreta", &d));
        assert!(!verify("otra", &d));
    }
}

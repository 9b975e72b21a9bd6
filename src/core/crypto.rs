//! Credential encryption with XChaCha20-Poly1305.
//!
//! Each credential is sealed independently under the master key with a
//! fresh random 24-byte nonce, so one corrupted entry never blocks
//! decrypting the rest. The AEAD tag makes truncation or tampering a
//! detected decryption failure instead of silent garbage.
//!
//! Wire format: `base64(nonce || ciphertext || tag)`.

use base64::Engine;
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    XChaCha20Poly1305, XNonce,
};
use rand::RngCore;

use crate::core::master_key::MasterKey;
use crate::error::{Result, VaultError};

const NONCE_LEN: usize = 24;

/// Encrypt a credential, returning the base64-encoded sealed form.
pub fn seal(key: &MasterKey, plaintext: &str) -> Result<String> {
    let cipher = XChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(e.to_string()))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = XNonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(nonce, plaintext.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(e.to_string()))?;

    let mut sealed = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    sealed.extend_from_slice(&nonce_bytes);
    sealed.extend_from_slice(&ciphertext);

    Ok(base64::engine::general_purpose::STANDARD.encode(sealed))
}

/// Decrypt a base64-encoded sealed credential.
///
/// Any defect (bad base64, truncation, wrong key, flipped bits) comes
/// back as [`VaultError::DecryptionFailed`].
pub fn open(key: &MasterKey, sealed: &str) -> Result<String> {
    let sealed = base64::engine::general_purpose::STANDARD
        .decode(sealed)
        .map_err(|e| VaultError::DecryptionFailed(format!("base64 decode failed: {e}")))?;

    if sealed.len() < NONCE_LEN {
        return Err(VaultError::DecryptionFailed("ciphertext too short".to_string()).into());
    }
    let (nonce_bytes, ciphertext) = sealed.split_at(NONCE_LEN);

    let cipher = XChaCha20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::DecryptionFailed(e.to_string()))?;

    let plaintext = cipher
        .decrypt(XNonce::from_slice(nonce_bytes), ciphertext)
        .map_err(|e| VaultError::DecryptionFailed(e.to_string()))?;

    String::from_utf8(plaintext)
        .map_err(|e| VaultError::DecryptionFailed(format!("invalid UTF-8: {e}")).into())
}

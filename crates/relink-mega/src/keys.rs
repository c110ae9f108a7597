//! Key derivation from the URL-safe key blob.
//!
//! The shared-key segment of a share link is URL-safe base64 without
//! guaranteed padding. Decoding it yields at least 32 bytes: the first 16
//! are the AES key, the next 16 the IV. The attribute-decryption primitive
//! built on top of them is a standalone capability; nothing in the
//! conversion pipeline invokes it.

use aes::cipher::{BlockDecryptMut, KeyIvInit, block_padding::Pkcs7};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use crate::error::{MegaError, MegaResult};

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Minimum decoded length: a 16-byte AES key plus a 16-byte IV.
const MIN_KEY_BYTES: usize = 32;

/// Symmetric key material derived from an encoded shared key.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    /// AES-128 key, bytes 0..16 of the decoded blob.
    pub aes_key: [u8; 16],
    /// CBC initialization vector, bytes 16..32 of the decoded blob.
    pub iv: [u8; 16],
    /// The full decoded buffer, kept for downstream attribute decryption.
    pub raw_shared_key: Vec<u8>,
}

impl std::fmt::Debug for KeyMaterial {
    // Key bytes stay out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("raw_len", &self.raw_shared_key.len())
            .finish_non_exhaustive()
    }
}

/// Decode an encoded key segment into [`KeyMaterial`].
///
/// Tolerates 0-2 missing trailing `=` characters. Fails if the string is
/// not valid URL-safe base64 or decodes to fewer than 32 bytes.
pub fn decode_key(encoded: &str) -> MegaResult<KeyMaterial> {
    // Stripping any padding and decoding unpadded normalizes the 0/1/2
    // missing-`=` cases to the same byte string.
    let trimmed = encoded.trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(trimmed)
        .map_err(|e| MegaError::malformed_key(format!("not valid URL-safe base64: {e}")))?;

    if decoded.len() < MIN_KEY_BYTES {
        return Err(MegaError::malformed_key(format!(
            "decoded to {} bytes, need at least {MIN_KEY_BYTES}",
            decoded.len()
        )));
    }

    let mut aes_key = [0u8; 16];
    let mut iv = [0u8; 16];
    aes_key.copy_from_slice(&decoded[..16]);
    iv.copy_from_slice(&decoded[16..32]);

    Ok(KeyMaterial {
        aes_key,
        iv,
        raw_shared_key: decoded,
    })
}

/// Decrypt attribute ciphertext with the derived key material.
///
/// AES-128-CBC with PKCS7 unpadding, IV taken from the key material.
/// Standalone capability: the pipeline never calls this, but downstream
/// consumers (filename recovery, integrity checks) can.
pub fn decrypt_attributes(ciphertext: &[u8], key: &KeyMaterial) -> MegaResult<Vec<u8>> {
    let cipher = Aes128CbcDec::new(&key.aes_key.into(), &key.iv.into());
    cipher
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| MegaError::AttributeDecrypt {
            message: format!("bad block length or padding: {e}"),
        })
}

//! Core types for RPC key resolution and script construction

use crate::constants::{COMPRESSED_PUBKEY_SIZE, UNCOMPRESSED_PUBKEY_SIZE};
use crate::error::{Result, RpcError};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Byte string type
pub type ByteString = Vec<u8>;

/// 160-bit hash of a public key (HASH160)
pub type KeyHash = [u8; 20];

/// 160-bit hash of a script (HASH160)
pub type ScriptHash = [u8; 20];

/// Identifier a keystore uses to look up key material
pub type KeyId = KeyHash;

/// Network context an address codec decodes against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Testnet,
    Regtest,
}

/// A fully validated secp256k1 public key in its original serialized form.
///
/// Construction goes through [`PublicKey::from_bytes`], which rejects any
/// byte sequence that is not a well-formed compressed or uncompressed key
/// on the curve. The supplied encoding is preserved byte-for-byte, so a
/// script built from this key pushes exactly what the caller provided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: ByteString,
}

impl PublicKey {
    /// Validate `bytes` as a full public key and take ownership of them.
    ///
    /// Fails with [`RpcError::InvalidKey`] when the bytes do not encode a
    /// point on the curve with a recognized length and prefix.
    pub fn from_bytes(bytes: ByteString) -> Result<Self> {
        secp256k1::PublicKey::from_slice(&bytes)
            .map_err(|_| RpcError::InvalidKey(hex::encode(&bytes)))?;
        Ok(Self { bytes })
    }

    /// Validate a borrowed slice, copying it on success
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes.to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialized length in bytes (33 compressed, 65 uncompressed)
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_compressed(&self) -> bool {
        self.bytes.len() == COMPRESSED_PUBKEY_SIZE
    }

    /// HASH160 of the serialized key: RIPEMD160(SHA256(bytes))
    pub fn key_hash(&self) -> KeyHash {
        let sha = Sha256::digest(&self.bytes);
        let rip = Ripemd160::digest(sha);
        let mut hash = [0u8; 20];
        hash.copy_from_slice(&rip);
        hash
    }
}

/// A spend target decoded from an address.
///
/// Exactly one case is active; every consumer matches exhaustively so a new
/// destination kind is a compile-time visible gap, not a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Destination {
    /// No recognizable destination
    None,
    /// References a public key by its HASH160
    KeyHash(KeyHash),
    /// References a script by its HASH160
    ScriptHash(ScriptHash),
}

impl Destination {
    /// Key-hash destination for a validated public key
    pub fn from_pubkey(key: &PublicKey) -> Self {
        Destination::KeyHash(key.key_hash())
    }
}

/// An M-of-N multisig redemption script, immutable after construction.
///
/// Only [`crate::script::multisig_redeem_script`] produces instances, so a
/// `RedeemScript` is always a well-formed template within the element size
/// limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedeemScript {
    bytes: ByteString,
}

impl RedeemScript {
    pub(crate) fn from_bytes(bytes: ByteString) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Serialized length in bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> ByteString {
        self.bytes
    }
}

/// Length check helper shared by key validation call sites
pub fn is_pubkey_size(len: usize) -> bool {
    len == COMPRESSED_PUBKEY_SIZE || len == UNCOMPRESSED_PUBKEY_SIZE
}

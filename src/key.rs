//! Conversion of externally supplied strings into validated public keys

use crate::error::{Result, RpcError};
use crate::keystore::RpcContext;
use crate::types::{Destination, PublicKey};

/// Convert a hex string to a public key.
///
/// Fails with [`RpcError::InvalidKeyEncoding`] when the text is not
/// well-formed hex and [`RpcError::InvalidKey`] when the decoded bytes do
/// not form a fully valid key.
pub fn pubkey_from_hex(hex_in: &str) -> Result<PublicKey> {
    let bytes =
        hex::decode(hex_in).map_err(|_| RpcError::InvalidKeyEncoding(hex_in.to_string()))?;
    PublicKey::from_bytes(bytes).map_err(|_| RpcError::InvalidKey(hex_in.to_string()))
}

/// Retrieve the public key an address refers to from the context's keystore.
///
/// The address is decoded against the context's network, resolved to a key
/// id, and the full key is fetched and validated. A stored key that fails
/// validation is reported as [`RpcError::CorruptedKeyStore`]: that is store
/// corruption, not bad caller input.
pub fn pubkey_from_address(ctx: &RpcContext<'_>, addr: &str) -> Result<PublicKey> {
    let dest = match ctx.codec.decode(addr, ctx.network) {
        Some(Destination::None) | None => {
            return Err(RpcError::InvalidAddress(addr.to_string()));
        }
        Some(dest) => dest,
    };
    let key_id = ctx
        .keystore
        .key_id_for_destination(&dest)
        .ok_or_else(|| RpcError::NoKeyForDestination(addr.to_string()))?;
    let bytes = ctx
        .keystore
        .full_pubkey(&key_id)
        .ok_or_else(|| RpcError::NoFullKeyAvailable(addr.to_string()))?;
    PublicKey::from_bytes(bytes).map_err(|_| RpcError::CorruptedKeyStore)
}

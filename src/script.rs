//! Multisig redeem script construction and template decoding

use crate::constants::{
    decode_op_n, op_n, MAX_MULTISIG_PUBKEYS, MAX_SCRIPT_ELEMENT_SIZE, OP_CHECKMULTISIG,
};
use crate::error::{Result, RpcError};
use crate::types::{is_pubkey_size, ByteString, PublicKey, RedeemScript};

/// Create an M-of-N multisig redeem script from validated public keys.
///
/// Encodes the standard template `OP_m <key>... OP_n OP_CHECKMULTISIG` with
/// the keys in exactly the order given: no sorting, no deduplication. A
/// pure function of its inputs; identical inputs yield byte-identical
/// scripts.
///
/// Validation is fail-fast in this order: threshold at least one, enough
/// keys for the threshold, at most [`MAX_MULTISIG_PUBKEYS`] keys, and the
/// finished script within [`MAX_SCRIPT_ELEMENT_SIZE`] bytes.
pub fn multisig_redeem_script(required: usize, keys: &[PublicKey]) -> Result<RedeemScript> {
    if required < 1 {
        return Err(RpcError::InvalidThreshold);
    }
    if keys.len() < required {
        return Err(RpcError::InsufficientKeys {
            got: keys.len(),
            need: required,
        });
    }
    if keys.len() > MAX_MULTISIG_PUBKEYS {
        return Err(RpcError::TooManyKeys {
            got: keys.len(),
            max: MAX_MULTISIG_PUBKEYS,
        });
    }

    let mut bytes = Vec::with_capacity(3 + keys.len() * 66);
    bytes.push(op_n(required));
    for key in keys {
        // Key payloads are 33 or 65 bytes, so a single direct-push length
        // byte always suffices
        bytes.push(key.len() as u8);
        bytes.extend_from_slice(key.as_bytes());
    }
    bytes.push(op_n(keys.len()));
    bytes.push(OP_CHECKMULTISIG);

    if bytes.len() > MAX_SCRIPT_ELEMENT_SIZE {
        return Err(RpcError::ScriptTooLarge {
            size: bytes.len(),
            limit: MAX_SCRIPT_ELEMENT_SIZE,
        });
    }

    Ok(RedeemScript::from_bytes(bytes))
}

/// Decode a multisig template back into its threshold and key bytes.
///
/// Returns `None` for anything that is not exactly the template produced by
/// [`multisig_redeem_script`].
pub fn parse_multisig(script: &RedeemScript) -> Option<(usize, Vec<ByteString>)> {
    let bytes = script.as_bytes();
    if bytes.len() < 3 || *bytes.last()? != OP_CHECKMULTISIG {
        return None;
    }
    let required = decode_op_n(bytes[0])?;
    let count = decode_op_n(bytes[bytes.len() - 2])?;

    let mut keys = Vec::with_capacity(count);
    let mut pos = 1;
    let end = bytes.len() - 2;
    while pos < end {
        let push_len = bytes[pos] as usize;
        if !is_pubkey_size(push_len) || pos + 1 + push_len > end {
            return None;
        }
        keys.push(bytes[pos + 1..pos + 1 + push_len].to_vec());
        pos += 1 + push_len;
    }

    if keys.len() != count || required > count {
        return None;
    }
    Some((required, keys))
}

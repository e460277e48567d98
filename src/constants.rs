//! Script limits and opcode constants used by redeem script construction

/// Maximum size of a single pushed script element, in bytes
pub const MAX_SCRIPT_ELEMENT_SIZE: usize = 520;

/// Maximum number of public keys in a multisig script
pub const MAX_MULTISIG_PUBKEYS: usize = 16;

/// Serialized size of a compressed public key
pub const COMPRESSED_PUBKEY_SIZE: usize = 33;

/// Serialized size of an uncompressed public key
pub const UNCOMPRESSED_PUBKEY_SIZE: usize = 65;

/// OP_1: pushes the number 1; OP_1 through OP_16 are consecutive
pub const OP_1: u8 = 0x51;

/// OP_16: pushes the number 16
pub const OP_16: u8 = 0x60;

/// OP_CHECKMULTISIG: M-of-N signature check
pub const OP_CHECKMULTISIG: u8 = 0xae;

/// Opcode pushing the small integer `n`, valid for 1 through 16
pub fn op_n(n: usize) -> u8 {
    debug_assert!((1..=16).contains(&n));
    OP_1 + (n as u8 - 1)
}

/// Small integer encoded by an OP_1..OP_16 opcode, if it is one
pub fn decode_op_n(opcode: u8) -> Option<usize> {
    if (OP_1..=OP_16).contains(&opcode) {
        Some((opcode - OP_1) as usize + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_n_range() {
        assert_eq!(op_n(1), OP_1);
        assert_eq!(op_n(2), 0x52);
        assert_eq!(op_n(16), OP_16);
    }

    #[test]
    fn test_decode_op_n() {
        assert_eq!(decode_op_n(OP_1), Some(1));
        assert_eq!(decode_op_n(OP_16), Some(16));
        assert_eq!(decode_op_n(0x50), None);
        assert_eq!(decode_op_n(OP_CHECKMULTISIG), None);
    }
}

//! Error types for RPC input validation and help rendering

use thiserror::Error;

/// Who is at fault for an error, deciding how it is surfaced to RPC callers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed or unusable caller input; reported as a client error
    ClientInput,
    /// Internal inconsistency or a defect in a command's own declaration;
    /// reported as a server error, never blamed on the caller
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("Invalid public key: {0}")]
    InvalidKeyEncoding(String),

    #[error("Invalid public key: {0}")]
    InvalidKey(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("{0} does not refer to a key")]
    NoKeyForDestination(String),

    #[error("no full public key for address {0}")]
    NoFullKeyAvailable(String),

    #[error("Keystore contains an invalid public key")]
    CorruptedKeyStore,

    #[error("a multisignature address must require at least one key to redeem")]
    InvalidThreshold,

    #[error("not enough keys supplied (got {got} keys, but need at least {need} to redeem)")]
    InsufficientKeys { got: usize, need: usize },

    #[error("Number of keys involved in the multisignature address creation > {max}\nReduce the number")]
    TooManyKeys { got: usize, max: usize },

    #[error("redeemScript exceeds size limit: {size} > {limit}")]
    ScriptTooLarge { size: usize, limit: usize },

    #[error("required argument {arg} declared after an optional argument in {command}")]
    SchemaInvariantViolation { command: String, arg: String },

    #[error("object argument {0} cannot be rendered inside another object")]
    UnsupportedSchemaShape(String),
}

impl RpcError {
    /// Classify the error for RPC surfacing
    pub fn category(&self) -> ErrorCategory {
        match self {
            RpcError::InvalidKeyEncoding(_)
            | RpcError::InvalidKey(_)
            | RpcError::InvalidAddress(_)
            | RpcError::NoKeyForDestination(_)
            | RpcError::NoFullKeyAvailable(_)
            | RpcError::InvalidThreshold
            | RpcError::InsufficientKeys { .. }
            | RpcError::TooManyKeys { .. }
            | RpcError::ScriptTooLarge { .. } => ErrorCategory::ClientInput,
            RpcError::CorruptedKeyStore
            | RpcError::SchemaInvariantViolation { .. }
            | RpcError::UnsupportedSchemaShape(_) => ErrorCategory::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;

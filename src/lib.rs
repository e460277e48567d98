//! # RPC-Util
//!
//! Validated-input and help-text core for a node's RPC surface.
//!
//! This crate covers the boundary where untrusted, free-form external input
//! becomes strongly-typed internal values:
//!
//! - hex strings and addresses resolve to fully validated public keys
//!   ([`pubkey_from_hex`], [`pubkey_from_address`]);
//! - validated key lists become M-of-N multisig redeem scripts under
//!   threshold and size invariants ([`multisig_redeem_script`]);
//! - decoded destinations are summarized for RPC output
//!   ([`describe_destination`]);
//! - declared argument schemas render into the exact help-signature text
//!   contract ([`render_signature`]).
//!
//! External subsystems (address codec, keystore) are reached only through
//! the traits in [`keystore`], bundled into an explicit [`RpcContext`]; the
//! crate holds no global state and performs no writes.
//!
//! ## Usage
//!
//! ```rust
//! use rpc_util::{render_signature, ArgSpec, ArgType};
//!
//! let args = vec![
//!     ArgSpec::required("nrequired", ArgType::Num),
//!     ArgSpec::required("keys", ArgType::Arr)
//!         .with_inner(vec![ArgSpec::required("key", ArgType::Str)]),
//! ];
//! let line = render_signature("createmultisig", &args).unwrap();
//! assert_eq!(line, "createmultisig nrequired [\"key\",...]\n");
//! ```
//!
//! ```rust
//! use rpc_util::{multisig_redeem_script, pubkey_from_hex};
//!
//! let key = pubkey_from_hex(
//!     "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
//! ).unwrap();
//! let script = multisig_redeem_script(1, &[key]).unwrap();
//! assert!(script.len() <= rpc_util::MAX_SCRIPT_ELEMENT_SIZE);
//! ```

pub mod constants;
pub mod describe;
pub mod error;
pub mod help;
pub mod key;
pub mod keystore;
pub mod script;
pub mod types;

// Re-export the crate surface
pub use constants::*;
pub use describe::describe_destination;
pub use error::{ErrorCategory, Result, RpcError};
pub use help::{render_signature, render_structure, render_token, ArgSpec, ArgType};
pub use key::{pubkey_from_address, pubkey_from_hex};
pub use keystore::{AddressCodec, KeyStore, MemoryKeyStore, RpcContext};
pub use script::{multisig_redeem_script, parse_multisig};
pub use types::*;

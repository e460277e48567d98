//! Collaborator interfaces for address decoding and key storage.
//!
//! The address encoding scheme and the keystore's internal indexing live
//! outside this crate; both are reached through the narrow traits below.
//! [`RpcContext`] bundles them with the network context and is passed
//! explicitly into every entry point that needs them, so this crate holds
//! no process-wide state.

use std::collections::HashMap;

use crate::types::{ByteString, Destination, KeyId, Network, PublicKey};

/// Decodes address text into a [`Destination`] for a given network.
///
/// Returns `None` when the text is not parseable at all; returning
/// `Some(Destination::None)` is equivalent as far as key resolution is
/// concerned.
pub trait AddressCodec {
    fn decode(&self, addr: &str, network: Network) -> Option<Destination>;
}

/// Read access to stored key material.
///
/// Implementations provide their own concurrency safety for concurrent
/// readers; this crate issues at most one lookup and one fetch per
/// resolution call and never writes.
pub trait KeyStore {
    /// Key id a destination refers to, if it refers to one at all
    fn key_id_for_destination(&self, dest: &Destination) -> Option<KeyId>;

    /// Full serialized public key for a key id.
    ///
    /// `None` when the store holds only a partial or derived reference.
    fn full_pubkey(&self, id: &KeyId) -> Option<ByteString>;
}

/// Explicit context handed to RPC entry points that reach external
/// subsystems
pub struct RpcContext<'a> {
    pub network: Network,
    pub codec: &'a dyn AddressCodec,
    pub keystore: &'a dyn KeyStore,
}

impl<'a> RpcContext<'a> {
    pub fn new(
        network: Network,
        codec: &'a dyn AddressCodec,
        keystore: &'a dyn KeyStore,
    ) -> Self {
        Self {
            network,
            codec,
            keystore,
        }
    }
}

/// In-memory [`KeyStore`] keyed by HASH160 of the stored keys.
///
/// Covers the key-hash destination case only: script-hash destinations do
/// not refer to a key and resolve to no key id.
#[derive(Debug, Default)]
pub struct MemoryKeyStore {
    keys: HashMap<KeyId, PublicKey>,
}

impl MemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a key under its HASH160, returning the id it was stored under
    pub fn insert(&mut self, key: PublicKey) -> KeyId {
        let id = key.key_hash();
        self.keys.insert(id, key);
        id
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeyStore for MemoryKeyStore {
    fn key_id_for_destination(&self, dest: &Destination) -> Option<KeyId> {
        match dest {
            Destination::KeyHash(hash) => Some(*hash),
            Destination::ScriptHash(_) | Destination::None => None,
        }
    }

    fn full_pubkey(&self, id: &KeyId) -> Option<ByteString> {
        self.keys.get(id).map(|key| key.as_bytes().to_vec())
    }
}

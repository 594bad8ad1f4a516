use alloy::primitives::{Bytes, B256};
use metis_relay_bindings::{ChainBatchHeader, ChainInclusionProof, L2MessageInclusionProof};

/// Evidence that an L2 to L1 message was committed on L2 under a state root
/// that the L1 state commitment chain has accepted.
///
/// The proof binds a message to:
/// - the state root of the L2 block that sent it,
/// - the state batch header that commits to that root,
/// - the merkle path of the root within the batch,
/// - the account and storage trie witnesses of the message passer slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InclusionProof {
    state_root: B256,
    batch_header: ChainBatchHeader,
    merkle_path: ChainInclusionProof,
    state_trie_witness: Bytes,
    storage_trie_witness: Bytes,
}

impl InclusionProof {
    /// Create a new proof.
    pub const fn new(
        state_root: B256,
        batch_header: ChainBatchHeader,
        merkle_path: ChainInclusionProof,
        state_trie_witness: Bytes,
        storage_trie_witness: Bytes,
    ) -> Self {
        Self { state_root, batch_header, merkle_path, state_trie_witness, storage_trie_witness }
    }

    /// Get the state root.
    pub const fn state_root(&self) -> B256 {
        self.state_root
    }

    /// Get the state batch header.
    pub const fn batch_header(&self) -> &ChainBatchHeader {
        &self.batch_header
    }

    /// Get the merkle path of the state root within its batch.
    pub const fn merkle_path(&self) -> &ChainInclusionProof {
        &self.merkle_path
    }

    /// Get the RLP-encoded account proof of the message passer.
    pub const fn state_trie_witness(&self) -> &Bytes {
        &self.state_trie_witness
    }

    /// Get the RLP-encoded storage proof of the message slot.
    pub const fn storage_trie_witness(&self) -> &Bytes {
        &self.storage_trie_witness
    }

    /// Convert to the struct accepted by `relayMessageViaChainId`.
    pub fn to_sol(&self) -> L2MessageInclusionProof {
        self.clone().into()
    }
}

impl From<InclusionProof> for L2MessageInclusionProof {
    fn from(proof: InclusionProof) -> Self {
        Self {
            stateRoot: proof.state_root,
            stateRootBatchHeader: proof.batch_header,
            stateRootProof: proof.merkle_path,
            stateTrieWitness: proof.state_trie_witness,
            storageTrieWitness: proof.storage_trie_witness,
        }
    }
}

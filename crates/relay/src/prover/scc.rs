use crate::{
    merkle::{merkle_proof, merkle_root},
    InclusionProver, ProverError,
};
use alloy::{
    consensus::Transaction as _,
    primitives::{keccak256, Address, Bytes, B256, U256},
    providers::Provider,
    rpc::types::{Filter, Log, TransactionReceipt},
    sol_types::{SolCall, SolEvent},
};
use metis_relay_bindings::{
    ChainBatchHeader, ChainInclusionProof,
    StateCommitmentChain::{self, appendStateBatchByChainIdCall, StateBatchAppended},
};
use metis_relay_constants::L2_TO_L1_MESSAGE_PASSER;
use metis_relay_types::{CrossDomainMessage, InclusionProof};
use tracing::{debug, instrument};

/// The storage slot of the L2 message passer that records `message`.
///
/// The passer stores `sentMessages[keccak256(calldata ++ messenger)] = true`
/// in its first mapping, where `calldata` is the `relayMessage` encoding of
/// the message and `messenger` is the L2 messenger that passed it.
pub fn message_slot(message: &CrossDomainMessage, l2_messenger: Address) -> B256 {
    let mut preimage = message.encode_relay_calldata();
    preimage.extend_from_slice(l2_messenger.as_slice());

    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(keccak256(preimage).as_slice());
    keccak256(buf)
}

/// Builds inclusion proofs from the L1 state commitment chain and the L2
/// state.
///
/// The transaction with L2 block number `n` is transaction index `n - 1` in
/// the state commitment chain. The prover finds the batch covering it by
/// binary search over `StateBatchAppended` events, reads the batch's state
/// roots from the calldata that appended it, and asks the L2 node for the
/// account and storage proofs of the message passer slot.
#[derive(Debug, Clone)]
pub struct SccProver<P1, P2> {
    l1: P1,
    l2: P2,
    state_commitment_chain: Address,
    l2_chain_id: u64,
    l2_messenger: Address,
    message_passer: Address,
}

impl<P1, P2> SccProver<P1, P2> {
    /// Create a new prover.
    pub const fn new(
        l1: P1,
        l2: P2,
        state_commitment_chain: Address,
        l2_chain_id: u64,
        l2_messenger: Address,
    ) -> Self {
        Self {
            l1,
            l2,
            state_commitment_chain,
            l2_chain_id,
            l2_messenger,
            message_passer: L2_TO_L1_MESSAGE_PASSER,
        }
    }

    /// Use a message passer other than the predeploy.
    pub const fn with_message_passer(mut self, message_passer: Address) -> Self {
        self.message_passer = message_passer;
        self
    }

    /// Get the state commitment chain address.
    pub const fn state_commitment_chain(&self) -> Address {
        self.state_commitment_chain
    }

    /// Get the L2 chain id.
    pub const fn l2_chain_id(&self) -> u64 {
        self.l2_chain_id
    }
}

impl<P1, P2> SccProver<P1, P2>
where
    P1: Provider,
    P2: Provider,
{
    async fn batch_event(
        &self,
        batch_index: u64,
    ) -> Result<Option<(StateBatchAppended, Log)>, ProverError> {
        let filter = Filter::new()
            .address(self.state_commitment_chain)
            .event_signature(StateBatchAppended::SIGNATURE_HASH)
            .topic1(B256::from(U256::from(self.l2_chain_id)))
            .topic2(B256::from(U256::from(batch_index)))
            .from_block(0);

        let Some(log) = self.l1.get_logs(&filter).await?.into_iter().next() else {
            return Ok(None);
        };
        let event = log.log_decode::<StateBatchAppended>()?.inner.data;
        Ok(Some((event, log)))
    }

    /// Find the `StateBatchAppended` event of the batch covering `tx_index`.
    #[instrument(skip(self))]
    async fn find_batch(&self, tx_index: u64) -> Result<(StateBatchAppended, Log), ProverError> {
        let missing = ProverError::NoStateRootBatch { tx_index };

        let scc = StateCommitmentChain::new(self.state_commitment_chain, &self.l1);
        let total: u64 =
            scc.getTotalBatchesByChainId(U256::from(self.l2_chain_id)).call().await?.saturating_to();
        debug!(total, "total state batches");
        if total == 0 {
            return Err(missing);
        }

        let mut upper = total - 1;
        let Some(last) = self.batch_event(upper).await? else { return Err(missing) };
        let header = last.0.to_header();
        if header.contains(tx_index) {
            return Ok(last);
        }
        if tx_index >= header.prev_total_elements() {
            return Err(missing);
        }

        let mut lower = 0;
        while lower < upper {
            let mid = lower + (upper - lower) / 2;
            let Some(found) = self.batch_event(mid).await? else { return Err(missing) };
            let header = found.0.to_header();
            if header.contains(tx_index) {
                return Ok(found);
            }
            if tx_index < header.prev_total_elements() {
                upper = mid;
            } else {
                lower = mid + 1;
            }
        }
        Err(missing)
    }

    /// Read the state roots of a batch from the calldata that appended it.
    async fn batch_roots(&self, batch_index: u64, log: &Log) -> Result<Vec<B256>, ProverError> {
        let hash =
            log.transaction_hash.ok_or(ProverError::MissingBatchTransaction { batch_index })?;
        let tx = self
            .l1
            .get_transaction_by_hash(hash)
            .await?
            .ok_or(ProverError::MissingTransaction(hash))?;
        Ok(appendStateBatchByChainIdCall::abi_decode(tx.input())?.batch)
    }

    async fn build(
        &self,
        receipt: &TransactionReceipt,
        message: &CrossDomainMessage,
    ) -> Result<InclusionProof, ProverError> {
        let block =
            receipt.block_number.ok_or(ProverError::Unmined(receipt.transaction_hash))?;
        let tx_index = block.saturating_sub(1);

        let (event, log) = self.find_batch(tx_index).await?;
        let header: ChainBatchHeader = event.to_header();
        let batch_index = header.batch_index();

        let slot = message_slot(message, self.l2_messenger);
        let storage_proof = async {
            let request = self.l2.get_proof(self.message_passer, vec![slot]).number(block);
            Ok::<_, ProverError>(request.await?)
        };
        let (roots, proof) =
            futures_util::try_join!(self.batch_roots(batch_index, &log), storage_proof)?;
        if merkle_root(&roots) != Some(header.batch_root()) {
            return Err(ProverError::BatchRootMismatch { batch_index });
        }

        let index = tx_index - header.prev_total_elements();
        let out_of_range = ProverError::StateRootOutOfRange { batch_index, index };
        let state_root = *roots.get(index as usize).ok_or(out_of_range)?;
        let siblings = merkle_proof(&roots, index as usize)
            .ok_or(ProverError::StateRootOutOfRange { batch_index, index })?;

        let storage = proof.storage_proof.first().ok_or(ProverError::MissingStorageProof)?;

        debug!(batch_index, index, %state_root, "built inclusion proof");
        Ok(InclusionProof::new(
            state_root,
            header,
            ChainInclusionProof { index: U256::from(index), siblings },
            Bytes::from(alloy_rlp::encode(&proof.account_proof)),
            Bytes::from(alloy_rlp::encode(&storage.proof)),
        ))
    }
}

impl<P1, P2> InclusionProver for SccProver<P1, P2>
where
    P1: Provider,
    P2: Provider,
{
    async fn prove(
        &self,
        receipt: &TransactionReceipt,
        message: &CrossDomainMessage,
    ) -> Result<InclusionProof, ProverError> {
        self.build(receipt, message).await
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::{address, bytes};

    #[test]
    fn slot_hashes_calldata_and_messenger() {
        let message = CrossDomainMessage::new(
            address!("0x00000000000000000000000000000000000000aa"),
            address!("0x00000000000000000000000000000000000000bb"),
            bytes!("01"),
            U256::from(1),
        );
        let messenger = address!("0x4200000000000000000000000000000000000007");

        let mut inner = message.encode_relay_calldata();
        inner.extend_from_slice(messenger.as_slice());
        let key = keccak256(&inner);
        let expected = keccak256([key.as_slice(), &[0u8; 32]].concat());

        assert_eq!(message_slot(&message, messenger), expected);
        assert_ne!(message_slot(&message, Address::ZERO), expected);
    }
}

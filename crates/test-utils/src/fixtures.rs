//! Builders for RPC-shaped transactions, receipts, logs and messages.

use alloy::{
    primitives::{Address, Bloom, Bytes, LogData, TxHash, B256, U256, U64},
    rpc::types::{Log, Transaction, TransactionReceipt},
    sol_types::{SolCall, SolEvent},
};
use metis_relay_bindings::{
    ChainBatchHeader, ChainInclusionProof,
    CrossDomainMessenger::{FailedRelayedMessage, RelayedMessage, SentMessage},
    L2StandardBridge::finalizeDepositCall,
};
use metis_relay_types::{CrossDomainMessage, InclusionProof, MessageIdentifier};
use serde_json::json;

/// Where a transaction landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxLocation {
    /// The transaction hash.
    pub hash: TxHash,
    /// The block number.
    pub block_number: u64,
    /// The block hash.
    pub block_hash: B256,
}

/// Attach RPC metadata to log data emitted by `address`.
pub fn rpc_log(address: Address, data: LogData, at: &TxLocation, log_index: u64) -> Log {
    Log {
        inner: alloy::primitives::Log { address, data },
        block_hash: Some(at.block_hash),
        block_number: Some(at.block_number),
        block_timestamp: None,
        transaction_hash: Some(at.hash),
        transaction_index: Some(0),
        log_index: Some(log_index),
        removed: false,
    }
}

/// Build a legacy RPC transaction.
pub fn transaction(at: &TxLocation, from: Address, to: Address, input: &Bytes) -> Transaction {
    serde_json::from_value(json!({
        "hash": at.hash,
        "blockHash": at.block_hash,
        "blockNumber": U64::from(at.block_number),
        "transactionIndex": "0x0",
        "from": from,
        "to": to,
        "nonce": "0x0",
        "value": "0x0",
        "gas": "0x1e8480",
        "gasPrice": "0x1",
        "input": input,
        "type": "0x0",
        "v": "0x1b",
        "r": "0x1",
        "s": "0x1",
    }))
    .expect("valid transaction json")
}

/// Build a legacy RPC receipt.
pub fn receipt(
    at: &TxLocation,
    from: Address,
    to: Address,
    logs: &[Log],
    status: bool,
) -> TransactionReceipt {
    serde_json::from_value(json!({
        "transactionHash": at.hash,
        "transactionIndex": "0x0",
        "blockHash": at.block_hash,
        "blockNumber": U64::from(at.block_number),
        "from": from,
        "to": to,
        "cumulativeGasUsed": "0x5208",
        "gasUsed": "0x5208",
        "effectiveGasPrice": "0x1",
        "contractAddress": null,
        "logs": logs,
        "logsBloom": Bloom::ZERO,
        "type": "0x0",
        "status": if status { "0x1" } else { "0x0" },
    }))
    .expect("valid receipt json")
}

/// A message with distinct sender and target.
pub fn message(nonce: u64, payload: Bytes) -> CrossDomainMessage {
    CrossDomainMessage::new(
        Address::repeat_byte(0xaa),
        Address::repeat_byte(0xbb),
        payload,
        U256::from(nonce),
    )
}

/// The `SentMessage` event carrying `message` to chain `chain_id`.
pub fn sent_message(message: &CrossDomainMessage, chain_id: u64) -> LogData {
    SentMessage {
        target: message.target(),
        sender: message.sender(),
        message: message.payload().clone(),
        messageNonce: message.nonce(),
        gasLimit: U256::from(1_000_000),
        chainId: U256::from(chain_id),
    }
    .encode_log_data()
}

/// The `RelayedMessage` event for `id`.
pub fn relayed_message(id: MessageIdentifier) -> LogData {
    RelayedMessage { msgHash: id.hash() }.encode_log_data()
}

/// The `FailedRelayedMessage` event for `id`.
pub fn failed_relayed_message(id: MessageIdentifier) -> LogData {
    FailedRelayedMessage { msgHash: id.hash() }.encode_log_data()
}

/// The L2 bridge call that credits a deposit of `amount` to `to`.
pub fn finalize_deposit(l1_token: Address, l2_token: Address, to: Address, amount: U256) -> Bytes {
    finalizeDepositCall {
        l1Token: l1_token,
        l2Token: l2_token,
        from: to,
        to,
        amount,
        data: Bytes::new(),
    }
    .abi_encode()
    .into()
}

/// A well-formed proof for a single-root batch.
pub fn test_proof(batch_index: u64) -> InclusionProof {
    let root = B256::repeat_byte(0x5a);
    InclusionProof::new(
        root,
        ChainBatchHeader {
            batchIndex: U256::from(batch_index),
            batchRoot: root,
            batchSize: U256::from(1),
            prevTotalElements: U256::from(batch_index),
            extraData: Bytes::new(),
        },
        ChainInclusionProof { index: U256::ZERO, siblings: vec![] },
        Bytes::from_static(&[0xc0]),
        Bytes::from_static(&[0xc0]),
    )
}

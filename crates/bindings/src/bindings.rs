#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]
use alloy::primitives::{Address, Bytes, FixedBytes, U256};

mod ovm {
    use super::*;

    alloy::sol! {
        #[derive(Debug, PartialEq, Eq)]
        struct ChainBatchHeader {
            uint256 batchIndex;
            bytes32 batchRoot;
            uint256 batchSize;
            uint256 prevTotalElements;
            bytes extraData;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct ChainInclusionProof {
            uint256 index;
            bytes32[] siblings;
        }

        #[derive(Debug, PartialEq, Eq)]
        struct L2MessageInclusionProof {
            bytes32 stateRoot;
            ChainBatchHeader stateRootBatchHeader;
            ChainInclusionProof stateRootProof;
            bytes stateTrieWitness;
            bytes storageTrieWitness;
        }

        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface CrossDomainMessenger {
            event SentMessage(
                address indexed target,
                address sender,
                bytes message,
                uint256 messageNonce,
                uint256 gasLimit,
                uint256 chainId
            );
            event RelayedMessage(bytes32 indexed msgHash);
            event FailedRelayedMessage(bytes32 indexed msgHash);

            function relayMessage(
                address target,
                address sender,
                bytes memory message,
                uint256 messageNonce
            ) external;

            function relayMessageViaChainId(
                uint256 chainId,
                address target,
                address sender,
                bytes memory message,
                uint256 messageNonce,
                L2MessageInclusionProof memory proof
            ) external;

            function sendMessageViaChainId(
                uint256 chainId,
                address target,
                bytes memory message,
                uint32 gasLimit
            ) external payable;

            function successfulMessages(bytes32 msgHash) external view returns (bool);
        }

        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface StateCommitmentChain {
            event StateBatchAppended(
                uint256 indexed chainId,
                uint256 indexed batchIndex,
                bytes32 batchRoot,
                uint256 batchSize,
                uint256 prevTotalElements,
                bytes extraData
            );

            function getTotalBatchesByChainId(uint256 chainId) external view returns (uint256);

            function insideFraudProofWindow(ChainBatchHeader memory batchHeader)
                external
                view
                returns (bool);

            function appendStateBatchByChainId(
                uint256 chainId,
                bytes32[] calldata batch,
                uint256 shouldStartAtElement,
                string calldata proposer
            ) external;
        }
    }

    impl ChainBatchHeader {
        /// Get the index of the batch (discarding high bytes).
        pub const fn batch_index(&self) -> u64 {
            self.batchIndex.as_limbs()[0]
        }

        /// Get the merkle root over the state roots in the batch.
        pub const fn batch_root(&self) -> FixedBytes<32> {
            self.batchRoot
        }

        /// Get the number of state roots in the batch (discarding high bytes).
        pub const fn batch_size(&self) -> u64 {
            self.batchSize.as_limbs()[0]
        }

        /// Get the number of state roots committed before this batch
        /// (discarding high bytes).
        pub const fn prev_total_elements(&self) -> u64 {
            self.prevTotalElements.as_limbs()[0]
        }

        /// True if the L2 transaction with the given index is covered by this
        /// batch.
        pub const fn contains(&self, tx_index: u64) -> bool {
            let start = self.prev_total_elements();
            tx_index >= start && tx_index < start + self.batch_size()
        }
    }

    impl CrossDomainMessenger::SentMessage {
        /// Get the chain id the message was sent via (discarding high bytes).
        pub const fn chain_id(&self) -> u64 {
            self.chainId.as_limbs()[0]
        }

        /// Get the target of the message.
        pub const fn target(&self) -> Address {
            self.target
        }

        /// Get the sender of the message.
        pub const fn sender(&self) -> Address {
            self.sender
        }

        /// Get the message nonce.
        pub const fn nonce(&self) -> U256 {
            self.messageNonce
        }

        /// Get the calldata the message carries.
        pub const fn message(&self) -> &Bytes {
            &self.message
        }
    }

    impl Copy for CrossDomainMessenger::RelayedMessage {}
    impl Copy for CrossDomainMessenger::FailedRelayedMessage {}

    impl StateCommitmentChain::StateBatchAppended {
        /// Get the L2 chain id of the batch (discarding high bytes).
        pub const fn chain_id(&self) -> u64 {
            self.chainId.as_limbs()[0]
        }

        /// Get the batch index (discarding high bytes).
        pub const fn batch_index(&self) -> u64 {
            self.batchIndex.as_limbs()[0]
        }

        /// Convert the event into the batch header it committed.
        pub fn to_header(&self) -> ChainBatchHeader {
            ChainBatchHeader {
                batchIndex: self.batchIndex,
                batchRoot: self.batchRoot,
                batchSize: self.batchSize,
                prevTotalElements: self.prevTotalElements,
                extraData: self.extraData.clone(),
            }
        }
    }
}
pub use ovm::{
    ChainBatchHeader, ChainInclusionProof, CrossDomainMessenger, L2MessageInclusionProof,
    StateCommitmentChain,
};

mod address_manager {
    alloy::sol! {
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface AddressManager {
            event AddressSet(string indexed name, address newAddress, address oldAddress);

            function getAddress(string memory name) external view returns (address);
        }
    }
}
pub use address_manager::AddressManager;

mod bridges {
    alloy::sol! {
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface L1StandardBridge {
            function depositERC20ToByChainId(
                uint256 chainId,
                address l1Token,
                address l2Token,
                address to,
                uint256 amount,
                uint32 l2Gas,
                bytes calldata data
            ) external payable;
        }

        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface L2StandardBridge {
            event DepositFinalized(
                address indexed l1Token,
                address indexed l2Token,
                address indexed from,
                address to,
                uint256 amount,
                bytes data
            );

            function finalizeDeposit(
                address l1Token,
                address l2Token,
                address from,
                address to,
                uint256 amount,
                bytes calldata data
            ) external;

            function withdrawTo(
                address l2Token,
                address to,
                uint256 amount,
                uint32 l1Gas,
                bytes calldata data
            ) external payable;
        }
    }
}
pub use bridges::{L1StandardBridge, L2StandardBridge};

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::{primitives::B256, sol_types::SolEvent};

    fn header(prev: u64, size: u64) -> ChainBatchHeader {
        ChainBatchHeader {
            batchIndex: U256::from(3),
            batchRoot: B256::repeat_byte(0xaa),
            batchSize: U256::from(size),
            prevTotalElements: U256::from(prev),
            extraData: Bytes::new(),
        }
    }

    #[test]
    fn batch_header_covers_its_range() {
        let h = header(100, 10);
        assert!(!h.contains(99));
        assert!(h.contains(100));
        assert!(h.contains(109));
        assert!(!h.contains(110));
    }

    #[test]
    fn batch_appended_to_header() {
        let event = StateCommitmentChain::StateBatchAppended {
            chainId: U256::from(1088),
            batchIndex: U256::from(3),
            batchRoot: B256::repeat_byte(0xaa),
            batchSize: U256::from(10),
            prevTotalElements: U256::from(100),
            extraData: Bytes::new(),
        };
        assert_eq!(event.chain_id(), 1088);
        assert_eq!(event.to_header(), header(100, 10));
    }

    #[test]
    fn relay_events_index_the_hash() {
        let event = CrossDomainMessenger::RelayedMessage { msgHash: B256::repeat_byte(1) };
        let log = event.encode_log_data();
        assert_eq!(log.topics()[0], CrossDomainMessenger::RelayedMessage::SIGNATURE_HASH);
        assert_eq!(log.topics()[1], B256::repeat_byte(1));
    }
}

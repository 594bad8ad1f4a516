use alloy::{
    primitives::{Address, Bytes, U256},
    rpc::types::TransactionRequest,
    sol_types::SolCall,
};
use metis_relay_bindings::CrossDomainMessenger::sendMessageViaChainIdCall;
use metis_relay_constants::MetisConstants;

/// Gas limit for the L2 execution of a message when none is given.
pub const DEFAULT_L2_GAS_LIMIT: u32 = 1_000_000;

/// Value attached to `sendMessageViaChainId` to pay for L2 execution:
/// 0.01 ether.
pub const DEPOSIT_CALL_VALUE: U256 = U256::from_limbs([10_000_000_000_000_000, 0, 0, 0]);

/// An L1 call that sends a message to L2 through the L1 messenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMessage {
    /// The L1 messenger.
    pub to: Address,
    /// The `sendMessageViaChainId` calldata.
    pub calldata: Bytes,
    /// The value to attach.
    pub value: U256,
}

impl PreparedMessage {
    /// Convert into a transaction request.
    pub fn into_request(self) -> TransactionRequest {
        TransactionRequest::default().to(self.to).input(self.calldata.into()).value(self.value)
    }
}

impl From<PreparedMessage> for TransactionRequest {
    fn from(message: PreparedMessage) -> Self {
        message.into_request()
    }
}

/// Prepare an L1 call sending `calldata` to `recipient` on L2.
pub fn prepare_l2_message(
    constants: &MetisConstants,
    recipient: Address,
    calldata: Bytes,
    gas_limit: Option<u32>,
) -> PreparedMessage {
    let call = sendMessageViaChainIdCall {
        chainId: constants.l2_chain_id_u256(),
        target: recipient,
        message: calldata,
        gasLimit: gas_limit.unwrap_or(DEFAULT_L2_GAS_LIMIT),
    };
    PreparedMessage {
        to: constants.l1_messenger(),
        calldata: call.abi_encode().into(),
        value: DEPOSIT_CALL_VALUE,
    }
}

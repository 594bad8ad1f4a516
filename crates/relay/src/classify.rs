use alloy::primitives::TxHash;

/// The closed set of outcomes a failed relay submission maps to.
///
/// Every submission failure is classified before the retry loop sees it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FailureClass {
    /// The chain state may change. Wait and submit again.
    Transient,
    /// The destination messenger has already received the message. The relay
    /// is complete.
    AlreadyDelivered,
    /// Anything unrecognised. Stop and surface the error.
    Fatal,
}

/// Revert text of the destination messenger for a message it already
/// executed.
const ALREADY_RECEIVED: &str = "message has already been received";

/// Texts of failures that clear up on their own.
const TRANSIENT: &[&str] = &["execution failed due to an exception", "nonce too low"];

/// Classify a failure by its error text. Matching is case-insensitive.
pub fn classify_failure(reason: &str) -> FailureClass {
    let reason = reason.to_lowercase();
    if reason.contains(ALREADY_RECEIVED) {
        FailureClass::AlreadyDelivered
    } else if TRANSIENT.iter().any(|t| reason.contains(t)) {
        FailureClass::Transient
    } else {
        FailureClass::Fatal
    }
}

/// A classified relay submission failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{class:?} relay failure: {reason}")]
pub struct SubmitFailure {
    /// The class of the failure.
    pub class: FailureClass,
    /// The error text reported by the chain or the RPC client.
    pub reason: String,
    /// The relaying transaction, if it was mined and reverted.
    pub reverted: Option<TxHash>,
}

impl SubmitFailure {
    /// Create a failure with an explicit class.
    pub fn new(class: FailureClass, reason: impl Into<String>) -> Self {
        Self { class, reason: reason.into(), reverted: None }
    }

    /// Create a failure, classifying it by its text.
    pub fn classify(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self::new(classify_failure(&reason), reason)
    }

    /// A relaying transaction that was mined with status 0. Always fatal.
    pub fn reverted(tx_hash: TxHash) -> Self {
        Self {
            class: FailureClass::Fatal,
            reason: format!("relay transaction {tx_hash} reverted"),
            reverted: Some(tx_hash),
        }
    }

    /// Classify any error by its display text.
    pub fn from_error(err: impl core::fmt::Display) -> Self {
        Self::classify(err.to_string())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn already_received() {
        assert_eq!(
            classify_failure("execution reverted: Provided message has already been received."),
            FailureClass::AlreadyDelivered
        );
    }

    #[test]
    fn transient() {
        assert_eq!(
            classify_failure("VM Exception: execution failed due to an exception"),
            FailureClass::Transient
        );
        assert_eq!(classify_failure("Nonce too low"), FailureClass::Transient);
        assert_eq!(classify_failure("nonce too low: next nonce 5"), FailureClass::Transient);
    }

    #[test]
    fn fatal() {
        assert_eq!(classify_failure("custom revert: foo"), FailureClass::Fatal);
        assert_eq!(classify_failure(""), FailureClass::Fatal);
    }

    #[test]
    fn already_received_takes_precedence() {
        assert_eq!(
            classify_failure(
                "execution failed due to an exception: message has already been received"
            ),
            FailureClass::AlreadyDelivered
        );
    }

    #[test]
    fn submit_failure_classifies() {
        let f = SubmitFailure::classify("nonce too low");
        assert_eq!(f.class, FailureClass::Transient);
        assert_eq!(f.reason, "nonce too low");
        assert_eq!(f.reverted, None);
    }

    #[test]
    fn reverted_is_fatal() {
        let hash = TxHash::repeat_byte(3);
        let f = SubmitFailure::reverted(hash);
        assert_eq!(f.class, FailureClass::Fatal);
        assert_eq!(f.reverted, Some(hash));
    }
}

//! Integration tests for the proof builder, fraud window gate and relayer.
use alloy::primitives::{Bytes, TxHash};
use metis_relay::{
    FailureClass, FraudWindowGate, ProofBuilder, ProverError, RelayError, RelayOutcome, Relayer,
    SubmitFailure,
};
use metis_relay_test_utils::{
    fixtures::{message, test_proof},
    harness::Bridge,
    mocks::{ScriptedFraudWindow, ScriptedProver},
};
use std::time::Duration;

#[tokio::test]
async fn relaying_twice_is_idempotent() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    let relayer = Relayer::from_timings(&messenger, bridge.sleeper.clone(), &bridge.timings);
    let msg = message(1, Bytes::from_static(b"hello"));
    let proof = test_proof(0);

    let first = relayer.relay(&msg, &proof).await.unwrap();
    let second = relayer.relay(&msg, &proof).await.unwrap();

    assert_eq!(first, RelayOutcome::Submitted(messenger.delivered()[0]));
    assert_eq!(second, RelayOutcome::AlreadyDelivered);
    assert_eq!(messenger.attempts(), 2);
    assert_eq!(messenger.delivered().len(), 1);
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn fatal_failure_halts_after_one_attempt() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    messenger.push_failure("execution reverted: custom revert: foo");
    let relayer = Relayer::from_timings(&messenger, bridge.sleeper.clone(), &bridge.timings);

    let err = relayer.relay(&message(1, Bytes::new()), &test_proof(0)).await.unwrap_err();

    assert!(matches!(err, RelayError::Fatal(reason) if reason.contains("custom revert: foo")));
    assert_eq!(messenger.attempts(), 1);
    assert!(messenger.delivered().is_empty());
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn reverted_relay_transaction_is_reported() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    let hash = TxHash::repeat_byte(0x42);
    messenger.push(SubmitFailure::reverted(hash));
    let relayer = Relayer::from_timings(&messenger, bridge.sleeper.clone(), &bridge.timings);

    let err = relayer.relay(&message(1, Bytes::new()), &test_proof(0)).await.unwrap_err();

    assert_eq!(err, RelayError::Reverted(hash));
    assert_eq!(messenger.attempts(), 1);
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn transient_failures_are_retried() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    messenger
        .push_failure("Execution failed due to an exception")
        .push_failure("nonce too low: next nonce 4, tx nonce 3");
    let relayer = Relayer::from_timings(&messenger, bridge.sleeper.clone(), &bridge.timings);

    let outcome = relayer.relay(&message(1, Bytes::new()), &test_proof(0)).await.unwrap();

    assert!(outcome.tx_hash().is_some());
    assert_eq!(messenger.attempts(), 3);
    assert_eq!(bridge.sleeper.sleeps(), vec![Duration::from_secs(5); 2]);
}

#[tokio::test]
async fn already_delivered_ends_the_retry_loop() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    messenger
        .push_failure("nonce too low")
        .push_classified(FailureClass::AlreadyDelivered, "already received");
    let relayer = Relayer::from_timings(&messenger, bridge.sleeper.clone(), &bridge.timings);

    let outcome = relayer.relay(&message(1, Bytes::new()), &test_proof(0)).await.unwrap();

    assert_eq!(outcome, RelayOutcome::AlreadyDelivered);
    assert_eq!(messenger.attempts(), 2);
    assert!(messenger.delivered().is_empty());
}

#[tokio::test]
async fn proof_waits_for_state_root_batch() {
    let bridge = Bridge::new();
    let proof = test_proof(3);
    let prover = ScriptedProver::pending(proof.clone());
    let hook = prover.clone();
    bridge.sleeper.on_sleep(3, move || hook.commit());

    let receipt = bridge.send_from_l2(&message(1, Bytes::new()));
    let builder = ProofBuilder::from_timings(&prover, bridge.sleeper.clone(), &bridge.timings);
    let built = builder.build_proof(&receipt, &message(1, Bytes::new())).await.unwrap();

    assert_eq!(built, proof);
    assert_eq!(prover.calls(), 4);
    assert_eq!(bridge.sleeper.sleeps(), vec![Duration::from_secs(50); 3]);
}

#[tokio::test]
async fn proof_failure_is_not_retried() {
    let bridge = Bridge::new();
    let prover = ScriptedProver::fatal();

    let receipt = bridge.send_from_l2(&message(1, Bytes::new()));
    let builder = ProofBuilder::from_timings(&prover, bridge.sleeper.clone(), &bridge.timings);
    let err = builder.build_proof(&receipt, &message(1, Bytes::new())).await.unwrap_err();

    assert!(matches!(err, ProverError::MissingStorageProof));
    assert_eq!(prover.calls(), 1);
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn gate_waits_until_window_closes() {
    let bridge = Bridge::new();
    let window = ScriptedFraudWindow::closing_after(2);
    let gate = FraudWindowGate::from_timings(&window, bridge.sleeper.clone(), &bridge.timings);

    gate.await_outside_fraud_window(&test_proof(0)).await.unwrap();

    assert_eq!(window.polls(), 3);
    assert_eq!(bridge.sleeper.sleeps(), vec![Duration::from_secs(5); 2]);
}

#[tokio::test]
async fn gate_passes_closed_window() {
    let bridge = Bridge::new();
    let window = ScriptedFraudWindow::closed();
    let gate = FraudWindowGate::from_timings(&window, bridge.sleeper.clone(), &bridge.timings);

    gate.await_outside_fraud_window(&test_proof(0)).await.unwrap();

    assert_eq!(window.polls(), 1);
    assert_eq!(bridge.sleeper.count(), 0);
}

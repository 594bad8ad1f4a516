//! End-to-end deposit and withdrawal flows over in-memory chains.
use alloy::{
    network::TransactionResponse,
    primitives::{Address, Bytes, U256},
};
use metis_relay::{OrchestratorError, RelayError, RelayOrchestrator};
use metis_relay_extract::ExtractError;
use metis_relay_test_utils::{
    fixtures::{self, message, test_proof},
    harness::Bridge,
    mocks::{ScriptedFraudWindow, ScriptedProver},
    test_constants::TEST,
};
use metis_relay_types::{DeliveryOutcome, Direction};
use std::time::Duration;

const RECIPIENT: Address = Address::repeat_byte(0xcc);

#[tokio::test]
async fn deposit_credits_recipient_once_delivered() {
    metis_relay_test_utils::init_tracing();
    let bridge = Bridge::new();
    let sequencer = bridge.sequencer();
    let payload = fixtures::finalize_deposit(
        Address::repeat_byte(0x01),
        Address::repeat_byte(0x02),
        RECIPIENT,
        U256::from(1000),
    );
    let receipt = bridge.send_from_l1(&message(1, payload));

    let hook = sequencer.clone();
    bridge.sleeper.on_sleep(2, move || {
        assert_eq!(hook.l2_balance(RECIPIENT), U256::ZERO);
        hook.sync();
    });

    let orchestrator = RelayOrchestrator::deposits(bridge.watcher());
    let pairs = orchestrator.confirm_deposit(receipt.transaction_hash).await.unwrap();

    assert_eq!(pairs.len(), 1);
    assert!(pairs[0].remote_status());
    assert_eq!(pairs[0].receipt.transaction_hash, receipt.transaction_hash);
    assert_eq!(sequencer.l2_balance(RECIPIENT), U256::from(1000));
    assert_eq!(bridge.sleeper.sleeps(), vec![Duration::from_secs(5); 2]);
}

#[tokio::test]
async fn deposit_with_reverted_delivery_is_final() {
    let bridge = Bridge::new();
    let msg = message(1, Bytes::new());
    let receipt = bridge.send_from_l1(&msg);
    let delivery = bridge.l2.include(
        TEST.l2_messenger(),
        msg.target(),
        Bytes::new(),
        vec![(TEST.l2_messenger(), fixtures::relayed_message(msg.identifier()))],
        false,
    );

    let orchestrator = RelayOrchestrator::deposits(bridge.watcher());
    let err = orchestrator.confirm_deposit(receipt.transaction_hash).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::DeliveryReverted { tx_hash }
        if tx_hash == delivery.transaction_hash));
}

#[tokio::test]
async fn withdrawal_runs_stages_in_order() {
    metis_relay_test_utils::init_tracing();
    let bridge = Bridge::new();
    let prover = ScriptedProver::pending(test_proof(2));
    let window = ScriptedFraudWindow::closing_after(1);
    let messenger = bridge.l1_messenger();
    messenger
        .push_failure("Execution failed due to an exception")
        .push_failure("nonce too low");

    let hook = prover.clone();
    let polls = window.clone();
    bridge.sleeper.on_sleep(2, move || {
        assert_eq!(polls.polls(), 0);
        hook.commit();
    });

    let msg = message(7, Bytes::from_static(b"withdraw"));
    let receipt = bridge.send_from_l2(&msg);
    let orchestrator = bridge.orchestrator(&prover, &window, &messenger);
    let pairs = orchestrator.finalize_withdrawal(receipt.transaction_hash).await.unwrap();

    let secs = |s| Duration::from_secs(s);
    assert_eq!(bridge.sleeper.sleeps(), vec![secs(50), secs(50), secs(5), secs(5), secs(5)]);
    assert_eq!(prover.calls(), 3);
    assert_eq!(window.polls(), 2);
    assert_eq!(messenger.attempts(), 3);

    let [pair] = pairs.as_slice() else { panic!("expected one pair") };
    assert_eq!(pair.message_id, msg.identifier());
    assert_eq!(pair.outcome, DeliveryOutcome::Relayed);
    assert!(pair.is_delivered());
    assert_eq!(pair.remote_tx.tx_hash(), messenger.delivered()[0]);
}

#[tokio::test]
async fn racing_relayers_deliver_once() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    let receipt = bridge.send_from_l2(&message(1, Bytes::new()));

    // each run yields once at its gate so the two interleave
    let first = bridge.orchestrator(
        ScriptedProver::committed(test_proof(0)),
        ScriptedFraudWindow::closing_after(1),
        messenger.clone(),
    );
    let second = bridge.orchestrator(
        ScriptedProver::committed(test_proof(0)),
        ScriptedFraudWindow::closing_after(1),
        messenger.clone(),
    );

    let (a, b) = tokio::join!(
        first.finalize_withdrawal(receipt.transaction_hash),
        second.finalize_withdrawal(receipt.transaction_hash),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(messenger.attempts(), 2);
    assert_eq!(messenger.delivered().len(), 1);
    assert_eq!(a[0].remote_receipt.transaction_hash, messenger.delivered()[0]);
    assert_eq!(a[0].remote_receipt.transaction_hash, b[0].remote_receipt.transaction_hash);
}

#[tokio::test]
async fn withdrawal_with_reverted_delivery_is_final() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    messenger.revert_deliveries();
    let receipt = bridge.send_from_l2(&message(1, Bytes::new()));

    let orchestrator = bridge.orchestrator(
        ScriptedProver::committed(test_proof(0)),
        ScriptedFraudWindow::closed(),
        &messenger,
    );
    let err = orchestrator.finalize_withdrawal(receipt.transaction_hash).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::DeliveryReverted { tx_hash }
        if tx_hash == messenger.delivered()[0]));
}

#[tokio::test]
async fn withdrawal_finalizes_every_message() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    let messages = [message(1, Bytes::new()), message(2, Bytes::from_static(b"second"))];
    let receipt = bridge.send_many_from_l2(&messages);

    let orchestrator = bridge.orchestrator(
        ScriptedProver::committed(test_proof(0)),
        ScriptedFraudWindow::closed(),
        &messenger,
    );
    let pairs = orchestrator.finalize_withdrawal(receipt.transaction_hash).await.unwrap();

    let ids: Vec<_> = pairs.iter().map(|pair| pair.message_id).collect();
    assert_eq!(ids, messages.iter().map(|m| m.identifier()).collect::<Vec<_>>());
    assert_eq!(messenger.delivered().len(), 2);
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn fatal_relay_failure_stops_withdrawal() {
    let bridge = Bridge::new();
    let messenger = bridge.l1_messenger();
    messenger.push_failure("execution reverted: custom revert: foo");
    let receipt = bridge.send_from_l2(&message(1, Bytes::new()));

    let orchestrator = bridge.orchestrator(
        ScriptedProver::committed(test_proof(0)),
        ScriptedFraudWindow::closed(),
        &messenger,
    );
    let err = orchestrator.finalize_withdrawal(receipt.transaction_hash).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::Relay(RelayError::Fatal(_))));
    assert_eq!(messenger.attempts(), 1);
    assert!(bridge.l1.all_logs().is_empty());
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn withdrawal_without_message_is_rejected() {
    let bridge = Bridge::new();
    let receipt = bridge.send_many_from_l2(&[]);

    let orchestrator = bridge.orchestrator(
        ScriptedProver::committed(test_proof(0)),
        ScriptedFraudWindow::closed(),
        bridge.l1_messenger(),
    );
    let err = orchestrator.finalize_withdrawal(receipt.transaction_hash).await.unwrap_err();

    assert!(matches!(err, OrchestratorError::Extract(ExtractError::NoMessageFound { .. })));
}

#[tokio::test]
async fn deposit_flow_matches_watcher() {
    let bridge = Bridge::new();
    let receipt = bridge.send_from_l1(&message(1, Bytes::new()));
    bridge.sequencer().sync();

    let pair = bridge
        .watcher()
        .wait_for_x_domain_transaction(receipt.transaction_hash, Direction::L1ToL2)
        .await
        .unwrap();
    let pairs = RelayOrchestrator::deposits(bridge.watcher())
        .confirm_deposit(receipt.transaction_hash)
        .await
        .unwrap();

    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].message_id, pair.message_id);
    assert_eq!(pairs[0].remote_receipt.transaction_hash, pair.remote_receipt.transaction_hash);
}

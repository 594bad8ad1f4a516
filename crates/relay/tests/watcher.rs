//! Integration tests for [`Watcher`].
use alloy::{
    network::TransactionResponse,
    primitives::{Address, Bytes},
};
use metis_relay::WatcherError;
use metis_relay_extract::ExtractError;
use metis_relay_test_utils::{
    fixtures::{self, message},
    harness::Bridge,
    test_constants::TEST,
};
use metis_relay_types::{DeliveryOutcome, Direction};
use std::time::Duration;

#[tokio::test]
async fn waits_until_deposit_is_delivered() {
    let bridge = Bridge::new();
    let sequencer = bridge.sequencer();
    let receipt = bridge.send_from_l1(&message(1, Bytes::new()));

    // nothing is delivered until the third poll
    let hook = sequencer.clone();
    bridge.sleeper.on_sleep(3, move || {
        hook.sync();
    });

    let pair = bridge
        .watcher()
        .wait_for_x_domain_transaction(receipt.transaction_hash, Direction::L1ToL2)
        .await
        .unwrap();

    assert_eq!(bridge.sleeper.sleeps(), vec![Duration::from_secs(5); 3]);
    assert!(pair.remote_status());
    assert_eq!(pair.outcome, DeliveryOutcome::Relayed);
    assert_eq!(pair.tx.tx_hash(), receipt.transaction_hash);
    assert_eq!(pair.remote_tx.tx_hash(), pair.remote_receipt.transaction_hash);
    assert_eq!(pair.message_id, message(1, Bytes::new()).identifier());
}

#[tokio::test]
async fn not_found_is_not_an_error() {
    let bridge = Bridge::new();
    let id = message(1, Bytes::new()).identifier();

    let found = bridge.watcher().find_remote_receipt(Direction::L2ToL1, id).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn ignores_deliveries_outside_lookback() {
    let mut bridge = Bridge::new();
    bridge.timings = bridge.timings.with_lookback_blocks(10);
    let id = message(1, Bytes::new()).identifier();

    bridge.l1.include(
        Address::ZERO,
        TEST.l1_messenger(),
        Bytes::new(),
        vec![(TEST.l1_messenger(), fixtures::relayed_message(id))],
        true,
    );
    let watcher = bridge.watcher();
    assert!(watcher.find_remote_receipt(Direction::L2ToL1, id).await.unwrap().is_some());

    bridge.l1.mine(20);
    assert!(watcher.find_remote_receipt(Direction::L2ToL1, id).await.unwrap().is_none());
}

#[tokio::test]
async fn ignores_deliveries_from_other_contracts() {
    let bridge = Bridge::new();
    let id = message(1, Bytes::new()).identifier();

    bridge.l1.include(
        Address::ZERO,
        Address::repeat_byte(0x99),
        Bytes::new(),
        vec![(Address::repeat_byte(0x99), fixtures::relayed_message(id))],
        true,
    );
    assert!(bridge.watcher().find_remote_receipt(Direction::L2ToL1, id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_successful_deliveries_are_an_error() {
    let bridge = Bridge::new();
    let id = message(1, Bytes::new()).identifier();

    for _ in 0..2 {
        bridge.l2.include(
            TEST.l2_messenger(),
            Address::ZERO,
            Bytes::new(),
            vec![(TEST.l2_messenger(), fixtures::relayed_message(id))],
            true,
        );
    }

    let err = bridge.watcher().find_remote_receipt(Direction::L1ToL2, id).await.unwrap_err();
    assert!(matches!(err, WatcherError::DuplicateDelivery { count: 2, .. }));
}

#[tokio::test]
async fn successful_relay_supersedes_failed_attempt() {
    let bridge = Bridge::new();
    let id = message(1, Bytes::new()).identifier();
    let messenger = TEST.l1_messenger();

    let failed = bridge.l1.include(
        Address::ZERO,
        messenger,
        Bytes::new(),
        vec![(messenger, fixtures::failed_relayed_message(id))],
        true,
    );
    let watcher = bridge.watcher();
    let found = watcher.find_remote_receipt(Direction::L2ToL1, id).await.unwrap().unwrap();
    assert_eq!(found.outcome, DeliveryOutcome::Failed);
    assert_eq!(found.receipt.transaction_hash, failed.transaction_hash);

    let relayed = bridge.l1.include(
        Address::ZERO,
        messenger,
        Bytes::new(),
        vec![(messenger, fixtures::relayed_message(id))],
        true,
    );
    let found = watcher.find_remote_receipt(Direction::L2ToL1, id).await.unwrap().unwrap();
    assert_eq!(found.outcome, DeliveryOutcome::Relayed);
    assert_eq!(found.receipt.transaction_hash, relayed.transaction_hash);
}

#[tokio::test]
async fn transaction_without_message_is_a_caller_error() {
    let bridge = Bridge::new();
    let receipt = bridge.l1.include(Address::ZERO, Address::ZERO, Bytes::new(), vec![], true);

    let err = bridge
        .watcher()
        .wait_for_x_domain_transaction(receipt.transaction_hash, Direction::L1ToL2)
        .await
        .unwrap_err();
    assert!(matches!(err, WatcherError::Extract(ExtractError::NoMessageFound { tx_hash })
        if tx_hash == receipt.transaction_hash));
    assert_eq!(bridge.sleeper.count(), 0);
}

#[tokio::test]
async fn deposit_to_another_chain_is_ignored() {
    let bridge = Bridge::new();
    let msg = message(1, Bytes::new());
    let receipt = bridge.l1.include(
        msg.sender(),
        TEST.l1_messenger(),
        Bytes::new(),
        vec![(TEST.l1_messenger(), fixtures::sent_message(&msg, 1088))],
        true,
    );

    let err = bridge
        .watcher()
        .wait_for_x_domain_transaction(receipt.transaction_hash, Direction::L1ToL2)
        .await
        .unwrap_err();
    assert!(matches!(err, WatcherError::Extract(_)));
}

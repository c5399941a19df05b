/*!
 * Blocking Queue Tests
 * Single-threaded behaviour, blocking points and teardown
 */

use alarm_queue::{AlarmQueue, MessageKind, QueueConfig, Received, SlotState, SyncConfig};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_create_empty() {
    let queue = AlarmQueue::<u32>::try_with_config(QueueConfig::default()).unwrap();
    assert_eq!(queue.size(), 0);
    assert_eq!(queue.alarms_pending(), 0);
    assert_eq!(queue.slot_state(), SlotState::Empty);
    assert!(queue.is_empty());
    assert_eq!(queue.config(), QueueConfig::default());
}

#[test]
fn test_normal_fifo_order() {
    let queue = AlarmQueue::new();
    for i in 0..10 {
        queue.send(i, MessageKind::Normal).unwrap();
    }
    assert_eq!(queue.size(), 10);
    assert_eq!(queue.alarms_pending(), 0);

    let received: Vec<_> = (0..10).map(|_| queue.recv()).collect();
    let expected: Vec<_> = (0..10).map(Received::normal).collect();
    assert_eq!(received, expected);
}

#[test]
fn test_alarm_delivered_before_older_normals() {
    let queue = AlarmQueue::new();
    queue.send("n1", MessageKind::Normal).unwrap();
    queue.send("n2", MessageKind::Normal).unwrap();
    queue.send("a1", MessageKind::Alarm).unwrap();

    assert_eq!(queue.size(), 3);
    assert_eq!(queue.alarms_pending(), 1);
    assert_eq!(queue.slot_state(), SlotState::Occupied);

    assert_eq!(queue.recv(), Received::alarm("a1"));
    assert_eq!(queue.slot_state(), SlotState::Empty);
    assert_eq!(queue.recv(), Received::normal("n1"));
    assert_eq!(queue.recv(), Received::normal("n2"));
}

#[test]
fn test_size_counts_both_classes() {
    let queue = AlarmQueue::new();
    queue.send(1u8, MessageKind::Alarm).unwrap();
    queue.send(2u8, MessageKind::Normal).unwrap();
    queue.send(3u8, MessageKind::Normal).unwrap();

    assert_eq!(queue.size(), queue.alarms_pending() + 2);

    queue.recv();
    assert_eq!(queue.size(), 2);
    assert_eq!(queue.alarms_pending(), 0);
}

#[test]
fn test_try_recv_never_blocks() {
    let queue = AlarmQueue::new();
    assert_eq!(queue.try_recv(), None);

    queue.send(5, MessageKind::Normal).unwrap();
    queue.send(6, MessageKind::Alarm).unwrap();
    assert_eq!(queue.try_recv(), Some(Received::alarm(6)));
    assert_eq!(queue.try_recv(), Some(Received::normal(5)));
    assert_eq!(queue.try_recv(), None);
}

#[test]
fn test_recv_blocks_until_send() {
    let queue = Arc::new(AlarmQueue::new());
    let received = Arc::new(AtomicBool::new(false));

    let consumer = {
        let queue = queue.clone();
        let received = received.clone();
        thread::spawn(move || {
            let message = queue.recv();
            received.store(true, Ordering::SeqCst);
            message
        })
    };

    // Give consumer time to park
    thread::sleep(Duration::from_millis(50));
    assert!(!received.load(Ordering::SeqCst));
    assert_eq!(queue.waiters().receivers, 1);

    queue.send(42, MessageKind::Normal).unwrap();
    assert_eq!(consumer.join().unwrap(), Received::normal(42));
    assert_eq!(queue.waiters().receivers, 0);
}

#[test]
fn test_second_alarm_blocks_until_first_received() {
    let queue = Arc::new(AlarmQueue::new());
    queue.send(1, MessageKind::Alarm).unwrap();

    let sent = Arc::new(AtomicBool::new(false));
    let producer = {
        let queue = queue.clone();
        let sent = sent.clone();
        thread::spawn(move || {
            let result = queue.send(2, MessageKind::Alarm);
            sent.store(true, Ordering::SeqCst);
            result
        })
    };

    thread::sleep(Duration::from_millis(50));
    assert!(!sent.load(Ordering::SeqCst), "second alarm must block");
    assert_eq!(queue.waiters().alarm_senders, 1);
    assert_eq!(queue.alarms_pending(), 1);

    assert_eq!(queue.recv(), Received::alarm(1));
    assert_eq!(producer.join().unwrap(), Ok(()));
    assert!(sent.load(Ordering::SeqCst));

    assert_eq!(queue.alarms_pending(), 1);
    assert_eq!(queue.recv(), Received::alarm(2));
}

#[test]
fn test_normal_send_does_not_block_on_occupied_slot() {
    let queue = AlarmQueue::new();
    queue.send(1, MessageKind::Alarm).unwrap();
    for i in 2..50 {
        queue.send(i, MessageKind::Normal).unwrap();
    }
    assert_eq!(queue.size(), 49);
}

#[test]
fn test_destroy_releases_pending_payloads() {
    let payload = Arc::new(());
    let queue = AlarmQueue::new();
    queue.send(payload.clone(), MessageKind::Alarm).unwrap();
    queue.send(payload.clone(), MessageKind::Normal).unwrap();
    queue.send(payload.clone(), MessageKind::Normal).unwrap();
    assert_eq!(Arc::strong_count(&payload), 4);

    let report = queue.destroy();
    assert!(report.alarm_released);
    assert_eq!(report.normals_released, 2);
    assert_eq!(report.total(), 3);
    assert_eq!(Arc::strong_count(&payload), 1);
}

#[test]
fn test_destroy_empty_queue() {
    let queue = AlarmQueue::<String>::new();
    let report = queue.destroy();
    assert_eq!(report.total(), 0);
}

#[test]
fn test_single_producer_config_still_delivers() {
    let config = QueueConfig {
        sync: SyncConfig::single_producer(),
        normal_reserve: 0,
    };
    let queue = Arc::new(AlarmQueue::try_with_config(config).unwrap());
    queue.send(1, MessageKind::Alarm).unwrap();

    let producer = {
        let queue = queue.clone();
        thread::spawn(move || queue.send(2, MessageKind::Alarm))
    };

    thread::sleep(Duration::from_millis(50));
    assert_eq!(queue.recv().payload, 1);
    producer.join().unwrap().unwrap();
    assert_eq!(queue.recv().payload, 2);
}

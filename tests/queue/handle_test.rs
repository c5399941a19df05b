/*!
 * Handle Surface Tests
 * Caller-error detection and teardown through queue handles
 */

use alarm_queue::core::limits::{KIND_ALARM, KIND_NORMAL, STATUS_NULL_MESSAGE, STATUS_UNINIT};
use alarm_queue::queue::handle::{alarms, create, create_with, destroy, recv, send, size};
use alarm_queue::{MessageKind, QueueConfig, QueueError, QueueHandle};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::thread;

#[test]
fn test_uninitialized_handle() {
    let handle: QueueHandle<String> = QueueHandle::uninit();
    assert!(!handle.is_initialized());
    assert_eq!(handle.holders(), 0);

    let err = send(&handle, Some("x".to_string()), KIND_NORMAL).unwrap_err();
    assert_eq!(err, QueueError::UninitializedQueue);
    assert_eq!(err.code(), STATUS_UNINIT);

    let mut out = None;
    assert_eq!(recv(&handle, Some(&mut out)), Err(QueueError::UninitializedQueue));
    assert_eq!(recv(&handle, None), Err(QueueError::UninitializedQueue));
}

#[test]
fn test_null_message_leaves_state_unchanged() {
    let handle = create::<u32>().unwrap();
    send(&handle, Some(1), KIND_ALARM).unwrap();

    let err = send(&handle, None, KIND_NORMAL).unwrap_err();
    assert_eq!(err.code(), STATUS_NULL_MESSAGE);
    // A null alarm must not block even though the slot is occupied
    assert_eq!(send(&handle, None, KIND_ALARM), Err(QueueError::NullMessage));

    assert_eq!(size(&handle), Ok(1));
    assert_eq!(alarms(&handle), Ok(1));
}

#[test]
fn test_null_output_location_does_not_consume() {
    let handle = create::<u32>().unwrap();
    send(&handle, Some(9), KIND_NORMAL).unwrap();

    assert_eq!(recv(&handle, None), Err(QueueError::NullMessage));
    assert_eq!(size(&handle), Ok(1));

    let mut out = None;
    assert_eq!(recv(&handle, Some(&mut out)), Ok(MessageKind::Normal));
    assert_eq!(out, Some(9));
}

#[test]
fn test_unknown_kind_not_implemented() {
    let handle = create::<u32>().unwrap();
    for code in [-1, 2, 42] {
        assert_eq!(
            send(&handle, Some(1), code),
            Err(QueueError::NotImplemented { code })
        );
    }
    assert_eq!(size(&handle), Ok(0));
}

#[test]
fn test_create_with_impossible_reserve() {
    let config = QueueConfig {
        normal_reserve: usize::MAX,
        ..QueueConfig::default()
    };
    let result = create_with::<u64>(config);
    assert_eq!(result.unwrap_err(), QueueError::AllocationFailed);
}

#[test]
fn test_handles_shared_across_threads() {
    let handle = create::<usize>().unwrap();

    let producers: Vec<_> = (0..4)
        .map(|i| {
            let handle = handle.clone();
            thread::spawn(move || send(&handle, Some(i), KIND_NORMAL))
        })
        .collect();
    for producer in producers {
        producer.join().unwrap().unwrap();
    }

    assert_eq!(size(&handle), Ok(4));
    let report = destroy(handle).unwrap();
    assert_eq!(report.normals_released, 4);
}

#[test]
fn test_last_holder_drop_releases_payloads() {
    let payload = Arc::new(());
    let handle = create::<Arc<()>>().unwrap();
    let other = handle.clone();

    send(&handle, Some(payload.clone()), KIND_ALARM).unwrap();
    send(&handle, Some(payload.clone()), KIND_NORMAL).unwrap();
    assert_eq!(Arc::strong_count(&payload), 3);

    assert_eq!(destroy(handle), None);
    assert_eq!(Arc::strong_count(&payload), 3);

    drop(other);
    assert_eq!(Arc::strong_count(&payload), 1);
}

/*!
 * Queue Handle
 *
 * Handle-based surface over [`AlarmQueue`]. A handle may be uninitialized,
 * payloads and output locations may be missing, and kinds arrive as raw
 * codes. All of these are rejected before the queue is touched:
 * handle first, then payload/output, then kind.
 */

use super::blocking::{AlarmQueue, QueueConfig};
use crate::core::{MessageKind, QueueError, QueueResult, Received, TeardownReport};
use std::sync::Arc;
use tracing::debug;

/// Shared reference to one queue, or the uninitialized handle
///
/// Cloning is cheap; every clone refers to the same queue.
pub struct QueueHandle<T> {
    inner: Option<Arc<AlarmQueue<T>>>,
}

impl<T> QueueHandle<T> {
    /// A handle that refers to no queue
    pub const fn uninit() -> Self {
        Self { inner: None }
    }

    pub fn from_queue(queue: AlarmQueue<T>) -> Self {
        Self {
            inner: Some(Arc::new(queue)),
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Borrow the queue behind the handle
    #[inline]
    pub fn queue(&self) -> QueueResult<&AlarmQueue<T>> {
        self.inner.as_deref().ok_or(QueueError::UninitializedQueue)
    }

    /// Number of live handles to this queue (0 when uninitialized)
    pub fn holders(&self) -> usize {
        self.inner.as_ref().map_or(0, Arc::strong_count)
    }
}

impl<T> Clone for QueueHandle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for QueueHandle<T> {
    fn default() -> Self {
        Self::uninit()
    }
}

impl<T> std::fmt::Debug for QueueHandle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(queue) => f.debug_tuple("QueueHandle").field(queue).finish(),
            None => f.write_str("QueueHandle(uninit)"),
        }
    }
}

/// Create a queue configured from the environment
pub fn create<T>() -> QueueResult<QueueHandle<T>> {
    create_with(QueueConfig::from_env())
}

/// Create a queue with an explicit configuration
pub fn create_with<T>(config: QueueConfig) -> QueueResult<QueueHandle<T>> {
    AlarmQueue::try_with_config(config).map(QueueHandle::from_queue)
}

/// Send `payload` with raw kind code `kind`
pub fn send<T>(handle: &QueueHandle<T>, payload: Option<T>, kind: i32) -> QueueResult<()> {
    let queue = handle.queue()?;
    let payload = payload.ok_or(QueueError::NullMessage)?;
    let kind = MessageKind::from_code(kind)?;
    queue.send(payload, kind)
}

/// Receive into `out`, blocking while the queue is empty
pub fn recv<T>(handle: &QueueHandle<T>, out: Option<&mut Option<T>>) -> QueueResult<MessageKind> {
    let queue = handle.queue()?;
    let out = out.ok_or(QueueError::NullMessage)?;

    let Received { kind, payload } = queue.recv();
    *out = Some(payload);
    Ok(kind)
}

/// Pending messages of both classes
pub fn size<T>(handle: &QueueHandle<T>) -> QueueResult<usize> {
    Ok(handle.queue()?.size())
}

/// 1 if an alarm is pending, else 0
pub fn alarms<T>(handle: &QueueHandle<T>) -> QueueResult<usize> {
    Ok(handle.queue()?.alarms_pending())
}

/// Release `handle`, tearing the queue down if it was the last one
///
/// Returns `None` for an uninitialized handle or when other handles are still
/// alive; the queue then drops its pending payloads with the last holder.
pub fn destroy<T>(handle: QueueHandle<T>) -> Option<TeardownReport> {
    let queue = handle.inner?;
    match Arc::try_unwrap(queue) {
        Ok(queue) => Some(queue.destroy()),
        Err(shared) => {
            debug!(
                remaining = Arc::strong_count(&shared) - 1,
                "Handle released, teardown deferred to last holder"
            );
            None
        }
    }
}

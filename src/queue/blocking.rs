/*!
 * Blocking Alarm Queue
 *
 * Thread-safe two-class queue. Alarm sends block while the alarm slot is
 * occupied; receives block while nothing is pending. A pending alarm is
 * always delivered before any normal message.
 */

use super::fifo::NormalFifo;
use super::slot::{AlarmSlot, SlotState};
use crate::core::limits::DEFAULT_NORMAL_RESERVE;
use crate::core::sync::{Controller, SyncConfig, Waiters};
use crate::core::{MessageKind, QueueError, QueueResult, Received, TeardownReport};
use tracing::{debug, trace, warn};

/// Queue construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueConfig {
    pub sync: SyncConfig,
    /// Initial normal backlog reservation (not a capacity limit)
    pub normal_reserve: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            sync: SyncConfig::default(),
            normal_reserve: DEFAULT_NORMAL_RESERVE,
        }
    }
}

impl QueueConfig {
    /// Default config with the wake policy taken from the environment
    pub fn from_env() -> Self {
        Self {
            sync: SyncConfig::from_env(),
            ..Self::default()
        }
    }
}

/// State guarded by the controller's lock
#[derive(Debug)]
struct QueueState<T> {
    alarm: AlarmSlot<T>,
    normal: NormalFifo<T>,
}

impl<T> QueueState<T> {
    #[inline]
    fn len(&self) -> usize {
        self.alarm.pending() + self.normal.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        !self.alarm.is_occupied() && self.normal.is_empty()
    }

    /// Priority rule: the alarm slot wins over any backlog
    fn take_next(&mut self) -> Option<Received<T>> {
        if let Some(payload) = self.alarm.take() {
            return Some(Received::alarm(payload));
        }
        self.normal.pop().map(Received::normal)
    }
}

/// Thread-safe alarm queue
///
/// Share it between threads with `Arc`, or use [`super::QueueHandle`].
///
/// # Examples
///
/// ```
/// use alarm_queue::{AlarmQueue, MessageKind};
///
/// let queue = AlarmQueue::new();
/// queue.send(1, MessageKind::Normal).unwrap();
/// queue.send(2, MessageKind::Alarm).unwrap();
///
/// let first = queue.recv();
/// assert_eq!(first.kind, MessageKind::Alarm);
/// assert_eq!(first.payload, 2);
/// assert_eq!(queue.recv().payload, 1);
/// ```
pub struct AlarmQueue<T> {
    controller: Controller<QueueState<T>>,
    config: QueueConfig,
}

impl<T> AlarmQueue<T> {
    /// Create an empty queue with default configuration
    pub fn new() -> Self {
        let config = QueueConfig {
            normal_reserve: 0,
            ..QueueConfig::default()
        };
        Self::from_parts(NormalFifo::new(), config)
    }

    /// Create an empty queue, reserving the initial normal backlog up front
    pub fn try_with_config(config: QueueConfig) -> QueueResult<Self> {
        let normal = NormalFifo::try_with_reserve(config.normal_reserve).map_err(|e| {
            warn!(reserve = config.normal_reserve, "Queue creation failed");
            e
        })?;
        Ok(Self::from_parts(normal, config))
    }

    fn from_parts(normal: NormalFifo<T>, config: QueueConfig) -> Self {
        let state = QueueState {
            alarm: AlarmSlot::new(),
            normal,
        };
        Self {
            controller: Controller::new(state, config.sync),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> QueueConfig {
        self.config
    }

    /// Send a payload
    ///
    /// An alarm send blocks until the alarm slot is free and cannot fail.
    /// A normal send never blocks; it fails with `NoRoom` only if the backlog
    /// cannot grow, in which case the payload is dropped and the queue is
    /// unchanged.
    pub fn send(&self, payload: T, kind: MessageKind) -> QueueResult<()> {
        let mut state = self.controller.lock();

        match kind {
            MessageKind::Alarm => {
                self.controller
                    .wait_slot_free(&mut state, |s| s.alarm.is_occupied());
                state.alarm.fill(payload);
            }
            MessageKind::Normal => {
                if state.normal.push(payload).is_err() {
                    warn!(backlog = state.normal.len(), "Normal backlog cannot grow");
                    return Err(QueueError::NoRoom);
                }
            }
        }

        let woken = self.controller.notify_available();
        trace!(%kind, size = state.len(), woken = woken.count(), "Message sent");
        Ok(())
    }

    /// Receive the next message, blocking while the queue is empty
    pub fn recv(&self) -> Received<T> {
        let mut state = self.controller.lock();
        loop {
            if let Some((message, handoff)) = self.deliver(&mut state) {
                self.controller.release(state, handoff);
                return message;
            }
            self.controller.wait_available(&mut state, QueueState::is_empty);
        }
    }

    /// Receive the next message if one is pending
    pub fn try_recv(&self) -> Option<Received<T>> {
        let mut state = self.controller.lock();
        let (message, handoff) = self.deliver(&mut state)?;
        self.controller.release(state, handoff);
        Some(message)
    }

    /// Take the next message under the lock
    ///
    /// The flag is set when an alarm sender was woken; the caller then hands
    /// the lock to it so the next alarm is installed before anyone else runs.
    fn deliver(&self, state: &mut QueueState<T>) -> Option<(Received<T>, bool)> {
        let message = state.take_next()?;
        let mut handoff = false;
        if message.kind.is_alarm() {
            let woken = self.controller.notify_slot_free();
            trace!(woken = woken.count(), "Alarm slot vacated");
            handoff = woken.is_woken();
        }
        trace!(kind = %message.kind, size = state.len(), "Message received");
        Some((message, handoff))
    }

    /// Pending messages of both classes (snapshot)
    pub fn size(&self) -> usize {
        self.controller.lock().len()
    }

    /// 1 if an alarm is pending, else 0 (snapshot)
    pub fn alarms_pending(&self) -> usize {
        self.controller.lock().alarm.pending()
    }

    pub fn is_empty(&self) -> bool {
        self.controller.lock().is_empty()
    }

    /// Alarm slot state (snapshot)
    pub fn slot_state(&self) -> SlotState {
        self.controller.lock().alarm.state()
    }

    /// Threads currently parked in `send`/`recv`
    pub fn waiters(&self) -> Waiters {
        self.controller.waiters()
    }

    /// Tear the queue down, dropping every pending payload
    pub fn destroy(self) -> TeardownReport {
        let mut state = self.controller.into_inner();

        let report = TeardownReport {
            alarm_released: state.alarm.take().is_some(),
            normals_released: state.normal.drain().count(),
        };

        debug!(
            alarm_released = report.alarm_released,
            normals_released = report.normals_released,
            "Queue destroyed"
        );
        report
    }
}

impl<T> Default for AlarmQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for AlarmQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.controller.lock();
        f.debug_struct("AlarmQueue")
            .field("alarms_pending", &state.alarm.pending())
            .field("normal_len", &state.normal.len())
            .field("config", &self.config)
            .finish()
    }
}

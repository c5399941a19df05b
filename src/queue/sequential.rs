/*!
 * Sequential Alarm Queue
 *
 * Single-threaded reference variant. Never blocks: a second pending alarm is
 * rejected with `NoRoom` and an empty receive yields `NoMessage`. Otherwise it
 * behaves exactly like the blocking queue.
 */

use super::fifo::NormalFifo;
use super::slot::AlarmSlot;
use crate::core::{MessageKind, QueueError, QueueResult, Received};

/// Non-blocking alarm queue for single-threaded use
#[derive(Debug)]
pub struct SeqAlarmQueue<T> {
    alarm: AlarmSlot<T>,
    normal: NormalFifo<T>,
}

impl<T> SeqAlarmQueue<T> {
    pub fn new() -> Self {
        Self {
            alarm: AlarmSlot::new(),
            normal: NormalFifo::new(),
        }
    }

    pub fn send(&mut self, payload: T, kind: MessageKind) -> QueueResult<()> {
        let rejected = match kind {
            MessageKind::Alarm => self.alarm.install(payload),
            MessageKind::Normal => self.normal.push(payload),
        };
        rejected.map_err(|_| QueueError::NoRoom)
    }

    pub fn recv(&mut self) -> QueueResult<Received<T>> {
        if let Some(payload) = self.alarm.take() {
            return Ok(Received::alarm(payload));
        }
        self.normal
            .pop()
            .map(Received::normal)
            .ok_or(QueueError::NoMessage)
    }

    pub fn size(&self) -> usize {
        self.alarm.pending() + self.normal.len()
    }

    pub fn alarms_pending(&self) -> usize {
        self.alarm.pending()
    }
}

impl<T> Default for SeqAlarmQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

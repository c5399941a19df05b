/*!
 * Core Types
 * Message kinds and the values returned by queue operations
 */

use super::errors::{QueueError, QueueResult};
use super::limits::{KIND_ALARM, KIND_NORMAL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Traffic class of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    /// Routine message, unbounded FIFO backlog
    Normal,
    /// Urgent message, at most one pending, always delivered first
    Alarm,
}

impl MessageKind {
    /// Decode a raw kind code
    pub const fn from_code(code: i32) -> QueueResult<Self> {
        match code {
            KIND_NORMAL => Ok(Self::Normal),
            KIND_ALARM => Ok(Self::Alarm),
            other => Err(QueueError::NotImplemented { code: other }),
        }
    }

    /// Raw kind code
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Self::Normal => KIND_NORMAL,
            Self::Alarm => KIND_ALARM,
        }
    }

    #[inline]
    pub const fn is_alarm(self) -> bool {
        matches!(self, Self::Alarm)
    }
}

impl TryFrom<i32> for MessageKind {
    type Error = QueueError;

    fn try_from(code: i32) -> QueueResult<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => f.write_str("normal"),
            Self::Alarm => f.write_str("alarm"),
        }
    }
}

/// A delivered message: the payload and the class it was taken from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Received<T> {
    pub kind: MessageKind,
    pub payload: T,
}

impl<T> Received<T> {
    #[inline]
    pub fn alarm(payload: T) -> Self {
        Self {
            kind: MessageKind::Alarm,
            payload,
        }
    }

    #[inline]
    pub fn normal(payload: T) -> Self {
        Self {
            kind: MessageKind::Normal,
            payload,
        }
    }

    /// Drop the kind tag
    #[inline]
    pub fn into_payload(self) -> T {
        self.payload
    }
}

/// What teardown released
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeardownReport {
    pub alarm_released: bool,
    pub normals_released: usize,
}

impl TeardownReport {
    /// Total payloads released
    pub fn total(&self) -> usize {
        usize::from(self.alarm_released) + self.normals_released
    }
}

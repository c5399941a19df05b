/*!
 * Error Types
 * Queue error taxonomy with thiserror, miette and serde support
 */

use super::limits::{
    STATUS_ALLOCATION_FAILED, STATUS_NOT_IMPLEMENTED, STATUS_NO_MESSAGE, STATUS_NO_ROOM,
    STATUS_NULL_MESSAGE, STATUS_UNINIT,
};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Queue operation result
///
/// # Must Use
/// A failed send leaves the payload with the caller; dropping the error loses it
pub type QueueResult<T> = Result<T, QueueError>;

/// Unified queue error type with miette diagnostics
///
/// Caller errors (`UninitializedQueue`, `NullMessage`, `NotImplemented`) are
/// detected before any state is touched. Resource errors (`NoRoom`,
/// `AllocationFailed`) leave the queue exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Diagnostic)]
#[serde(rename_all = "snake_case", tag = "error", content = "details")]
pub enum QueueError {
    #[error("Queue has not been initialized")]
    #[diagnostic(
        code(queue::uninitialized),
        help("Create the queue with `create()` before sending or receiving on the handle.")
    )]
    UninitializedQueue,

    #[error("Null message")]
    #[diagnostic(
        code(queue::null_message),
        help("Pass a payload to send, or an output location to receive into.")
    )]
    NullMessage,

    #[error("No room for message")]
    #[diagnostic(
        code(queue::no_room),
        help("The normal backlog could not grow. Drain the queue or free memory before retrying.")
    )]
    NoRoom,

    #[error("Message kind {code} not implemented")]
    #[diagnostic(
        code(queue::not_implemented),
        help("Only the normal (0) and alarm (1) kinds are supported.")
    )]
    NotImplemented { code: i32 },

    #[error("No message available")]
    #[diagnostic(
        code(queue::no_message),
        help("The sequential queue never blocks. Retry later or use the blocking queue.")
    )]
    NoMessage,

    #[error("Queue storage could not be allocated")]
    #[diagnostic(
        code(queue::allocation_failed),
        help("Lower `normal_reserve` in the queue config or free memory.")
    )]
    AllocationFailed,
}

impl QueueError {
    /// Negative status code for this error
    pub const fn code(&self) -> i32 {
        match self {
            Self::UninitializedQueue => STATUS_UNINIT,
            Self::NullMessage => STATUS_NULL_MESSAGE,
            Self::NoRoom => STATUS_NO_ROOM,
            Self::NotImplemented { .. } => STATUS_NOT_IMPLEMENTED,
            Self::NoMessage => STATUS_NO_MESSAGE,
            Self::AllocationFailed => STATUS_ALLOCATION_FAILED,
        }
    }

    /// Whether the caller misused the API (as opposed to running out of resources)
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UninitializedQueue | Self::NullMessage | Self::NotImplemented { .. }
        )
    }
}

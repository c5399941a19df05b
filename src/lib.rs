/*!
 * Alarm Queue Library
 * Blocking two-class message queue: one pending alarm that always
 * preempts an unbounded FIFO of normal messages
 */

pub mod core;
pub mod monitoring;
pub mod payload;
pub mod queue;

// Re-exports
pub use crate::core::sync::{SyncConfig, WakePolicy, WakeResult, Waiters};
pub use crate::core::{MessageKind, QueueError, QueueResult, Received, TeardownReport};
pub use monitoring::init_tracing;
pub use queue::{AlarmQueue, QueueConfig, QueueHandle, SeqAlarmQueue, SlotState};

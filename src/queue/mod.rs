/*!
 * Queue Module
 * Two-class alarm queues: the blocking thread-safe core and the
 * sequential reference variant
 */

pub mod blocking;
pub mod fifo;
pub mod handle;
pub mod sequential;
pub mod slot;

// Re-export public API
pub use blocking::{AlarmQueue, QueueConfig};
pub use handle::QueueHandle;
pub use sequential::SeqAlarmQueue;
pub use slot::SlotState;

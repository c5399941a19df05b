/*!
 * Payload Helpers
 * Integer convenience wrappers over the handle surface
 */

use crate::core::limits::{KIND_ALARM, KIND_NORMAL};
use crate::core::QueueResult;
use crate::queue::handle::{self, QueueHandle};

/// Send `value` as an alarm (blocks while another alarm is pending)
pub fn put_alarm(queue: &QueueHandle<i32>, value: i32) -> QueueResult<()> {
    handle::send(queue, Some(value), KIND_ALARM)
}

/// Send `value` as a normal message
pub fn put_normal(queue: &QueueHandle<i32>, value: i32) -> QueueResult<()> {
    handle::send(queue, Some(value), KIND_NORMAL)
}

/// Receive the next value, whatever its kind
pub fn get(queue: &QueueHandle<i32>) -> QueueResult<i32> {
    let mut out = None;
    handle::recv(queue, Some(&mut out))?;
    Ok(out.unwrap_or_default())
}

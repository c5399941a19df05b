/*!
 * Queue Limits and Constants
 *
 * Status codes and sizing defaults shared by the queue variants.
 */

// =============================================================================
// STATUS CODES
// =============================================================================

/// Queue handle was never created
pub const STATUS_UNINIT: i32 = -1;

/// Payload or output location missing
pub const STATUS_NULL_MESSAGE: i32 = -2;

/// Normal backlog could not grow (or sequential alarm slot occupied)
pub const STATUS_NO_ROOM: i32 = -3;

/// Unknown message kind code
pub const STATUS_NOT_IMPLEMENTED: i32 = -4;

/// Sequential receive found nothing pending
pub const STATUS_NO_MESSAGE: i32 = -5;

/// Queue storage could not be reserved at creation
pub const STATUS_ALLOCATION_FAILED: i32 = -6;

// =============================================================================
// KIND CODES
// =============================================================================

/// Raw code for a normal message
pub const KIND_NORMAL: i32 = 0;

/// Raw code for an alarm message
pub const KIND_ALARM: i32 = 1;

// =============================================================================
// SIZING
// =============================================================================

/// Initial reservation for the normal backlog
/// Pre-allocation only; the backlog is unbounded
pub const DEFAULT_NORMAL_RESERVE: usize = 16;

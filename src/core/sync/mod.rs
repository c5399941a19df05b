/*!
 * Synchronization Primitives
 *
 * The queue's synchronization controller: a single lock over all queue state
 * and the two conditions threads park on.
 *
 * # Wake-up policy
 *
 * Each condition is signalled with a configurable [`WakePolicy`]. Signal-one
 * on *slot-free* is only correct while at most one alarm sender can be parked;
 * the default broadcasts there so any number of alarm producers is safe.
 */

mod config;
mod controller;
mod traits;

pub use config::{SyncConfig, WakePolicy, WAKE_POLICY_ENV};
pub use controller::Controller;
pub use traits::{WakeResult, Waiters};

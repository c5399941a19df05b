/*!
 * Synchronization Controller
 *
 * One parking_lot mutex guarding all queue state, plus two condition
 * variables:
 * - *available*: a message became deliverable (receivers wait here)
 * - *slot-free*: the alarm slot went from occupied to empty (alarm senders wait here)
 *
 * Waits are predicate-checked in a loop, so spurious or stolen wake-ups only
 * cost a re-check. Notifications are issued with the lock held, which makes
 * parking_lot requeue the woken threads onto the mutex; [`Controller::release`]
 * can then hand the lock straight to one of them.
 */

use super::config::{SyncConfig, WakePolicy};
use super::traits::{WakeResult, Waiters};
use parking_lot::{Condvar, Mutex, MutexGuard};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Condition a thread can park on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Condition {
    Available,
    SlotFree,
}

impl Condition {
    const fn name(self) -> &'static str {
        match self {
            Condition::Available => "available",
            Condition::SlotFree => "alarm_slot_free",
        }
    }
}

/// Lock plus the two wait conditions of a queue
pub struct Controller<S> {
    state: Mutex<S>,
    available: Condvar,
    slot_free: Condvar,
    parked_receivers: AtomicUsize,
    parked_alarm_senders: AtomicUsize,
    config: SyncConfig,
}

impl<S> Controller<S> {
    pub fn new(state: S, config: SyncConfig) -> Self {
        Self {
            state: Mutex::new(state),
            available: Condvar::new(),
            slot_free: Condvar::new(),
            parked_receivers: AtomicUsize::new(0),
            parked_alarm_senders: AtomicUsize::new(0),
            config,
        }
    }

    /// Acquire the state lock
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, S> {
        self.state.lock()
    }

    /// Park on *available* while `blocked` holds
    ///
    /// Returns with the lock held and `blocked` false.
    pub fn wait_available<F>(&self, guard: &mut MutexGuard<'_, S>, blocked: F)
    where
        F: FnMut(&S) -> bool,
    {
        self.park(Condition::Available, guard, blocked);
    }

    /// Park on *slot-free* while `blocked` holds
    pub fn wait_slot_free<F>(&self, guard: &mut MutexGuard<'_, S>, blocked: F)
    where
        F: FnMut(&S) -> bool,
    {
        self.park(Condition::SlotFree, guard, blocked);
    }

    /// Signal *available*; call with the lock held
    #[inline]
    pub fn notify_available(&self) -> WakeResult {
        Self::notify(&self.available, self.config.available_wake)
    }

    /// Signal *slot-free*; call with the lock held
    #[inline]
    pub fn notify_slot_free(&self) -> WakeResult {
        Self::notify(&self.slot_free, self.config.slot_free_wake)
    }

    /// Release the lock, handing it directly to a parked thread if `handoff`
    ///
    /// Used after waking an alarm sender so it installs its alarm before the
    /// releasing thread (or any newcomer) can take the lock again.
    #[inline]
    pub fn release(&self, guard: MutexGuard<'_, S>, handoff: bool) {
        if handoff {
            MutexGuard::unlock_fair(guard);
        } else {
            drop(guard);
        }
    }

    pub fn waiters(&self) -> Waiters {
        Waiters {
            receivers: self.parked_receivers.load(Ordering::Relaxed),
            alarm_senders: self.parked_alarm_senders.load(Ordering::Relaxed),
        }
    }

    /// Consume the controller and hand back the guarded state
    pub fn into_inner(self) -> S {
        self.state.into_inner()
    }

    fn park<F>(&self, condition: Condition, guard: &mut MutexGuard<'_, S>, mut blocked: F)
    where
        F: FnMut(&S) -> bool,
    {
        if !blocked(&**guard) {
            return;
        }

        let (condvar, parked) = match condition {
            Condition::Available => (&self.available, &self.parked_receivers),
            Condition::SlotFree => (&self.slot_free, &self.parked_alarm_senders),
        };

        parked.fetch_add(1, Ordering::Relaxed);
        debug!(condition = condition.name(), "Parking");

        let mut wakeups = 0usize;
        while blocked(&**guard) {
            condvar.wait(guard);
            wakeups += 1;
        }

        parked.fetch_sub(1, Ordering::Relaxed);
        debug!(condition = condition.name(), wakeups, "Resumed");
    }

    fn notify(condvar: &Condvar, policy: WakePolicy) -> WakeResult {
        match policy {
            WakePolicy::One => {
                if condvar.notify_one() {
                    WakeResult::Woken(1)
                } else {
                    WakeResult::NoWaiters
                }
            }
            WakePolicy::All => match condvar.notify_all() {
                0 => WakeResult::NoWaiters,
                n => WakeResult::Woken(n),
            },
        }
    }
}

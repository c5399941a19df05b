/*!
 * Synchronization Configuration
 *
 * Runtime configuration for wake-up policy selection
 */

use std::str::FromStr;
use tracing::warn;

/// Environment variable read by [`SyncConfig::from_env`]
pub const WAKE_POLICY_ENV: &str = "ALARM_QUEUE_WAKE";

/// How many parked threads a notification wakes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakePolicy {
    /// Signal a single waiter
    One,
    /// Broadcast to every waiter; each re-checks its predicate
    All,
}

impl FromStr for WakePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one" | "signal" => Ok(Self::One),
            "all" | "broadcast" => Ok(Self::All),
            other => Err(format!("unknown wake policy '{}'", other)),
        }
    }
}

/// Synchronization configuration
///
/// `available_wake` applies when a message becomes deliverable,
/// `slot_free_wake` when the alarm slot is vacated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncConfig {
    pub available_wake: WakePolicy,
    pub slot_free_wake: WakePolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            available_wake: WakePolicy::One,
            slot_free_wake: WakePolicy::All,
        }
    }
}

impl SyncConfig {
    /// Signal-one on both conditions
    ///
    /// Only valid while at most one thread can be blocked in an alarm send.
    pub const fn single_producer() -> Self {
        Self {
            available_wake: WakePolicy::One,
            slot_free_wake: WakePolicy::One,
        }
    }

    /// Broadcast on both conditions
    pub const fn broadcast() -> Self {
        Self {
            available_wake: WakePolicy::All,
            slot_free_wake: WakePolicy::All,
        }
    }

    /// Read the configuration from `ALARM_QUEUE_WAKE`
    ///
    /// `one` selects [`SyncConfig::single_producer`], `all` selects
    /// [`SyncConfig::broadcast`]. Anything else falls back to the default.
    pub fn from_env() -> Self {
        match std::env::var(WAKE_POLICY_ENV) {
            Ok(value) => Self::parse(&value),
            Err(_) => Self::default(),
        }
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("default") {
            return Self::default();
        }
        match value.parse::<WakePolicy>() {
            Ok(WakePolicy::One) => Self::single_producer(),
            Ok(WakePolicy::All) => Self::broadcast(),
            Err(e) => {
                warn!(env = WAKE_POLICY_ENV, error = %e, "Falling back to default sync config");
                Self::default()
            }
        }
    }
}

//! config.rs
//! Runtime parameters for the control loop. No config file and no
//! environment variables; callers build the struct directly and tests
//! inject zero durations to run cycles at full speed.

use std::time::Duration;

/// Tunable timing for the controller loop and the simulated actuators.
#[derive(Debug, Clone, Copy)]
pub struct SentryConfig {
    /// Inter-cycle delay. The effective cycle period is this cadence plus
    /// whatever the invoked actuator routine takes.
    pub cycle_period: Duration,
    /// Base latency of one simulated actuator step. Movement primitives
    /// take 1x, spraying 2x, mine removal 3x.
    pub actuator_latency: Duration,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            cycle_period: Duration::from_secs(1),
            actuator_latency: Duration::from_secs(1),
        }
    }
}

impl SentryConfig {
    /// Zero-delay profile: cycles and actions complete immediately.
    pub fn instant() -> Self {
        Self {
            cycle_period: Duration::ZERO,
            actuator_latency: Duration::ZERO,
        }
    }
}

//! # Sentry Unit Supervisory Control Simulation
//!
//! Simulates the supervisory loop of an autonomous sentry unit:
//! synthetic sensors → mode state machine → simulated actuators,
//! with a concurrent operator command loop (reset/exit).
//!
//! ## Key Architecture
//! - **Sensors:** one accessor per physical sensor behind [`SensorProvider`];
//!   the simulated implementation draws bounded random readings.
//! - **Mode Controller:** owns the active [`Mode`], consumes one
//!   [`SensorSnapshot`] per cycle, logs it, evaluates the transition table,
//!   and invokes exactly one actuator routine.
//! - **Telemetry:** one timestamped line per cycle appended to a durable
//!   log file, plus a bordered status block on the operator console.
//! - **Command Supervisor:** blocking stdin loop on the main thread; raises
//!   Reset/Terminate intents over a single-slot channel.
//!
//! ## Concurrency
//! - Controller loop runs on its own thread; the only cross-thread state is
//!   the control-signal channel and an atomic running flag.
//! - A termination intent takes effect at the next cycle boundary at the
//!   latest; an in-flight actuator call is never preempted.

pub mod actuators;
pub mod config;
pub mod controller;
pub mod sensors;
pub mod supervisor;
pub mod telemetry;

pub use actuators::{ActuatorDriver, MoveCommand, SimulatedActuators};
pub use config::SentryConfig;
pub use controller::{ActionTaken, ControlSignal, Mode, ModeController};
pub use sensors::{ObstacleDirection, SensorProvider, SensorSnapshot, SimulatedSensors};
pub use telemetry::{ConsoleTelemetry, TelemetrySink};

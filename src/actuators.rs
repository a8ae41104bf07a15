//! actuators.rs
//! Blocking action primitives. The controller treats every call as
//! atomic-and-always-successful; the simulated driver stands in for real
//! motor/pump hardware with fixed scaled delays and operator console lines.

use log::debug;
use std::{thread, time::Duration};

/// Movement primitive selected by the patrol obstacle logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Stop,
}

/// The seven blocking action primitives the controller can invoke.
/// Each call completes before the controller's next decision step.
pub trait ActuatorDriver {
    fn move_forward(&self);
    fn move_backward(&self);
    fn turn_left(&self);
    fn turn_right(&self);
    fn stop(&self);
    /// Defense response: spray.
    fn spray(&self);
    /// Mine-detection response: removal sequence.
    fn remove_mine(&self);
}

/// Fixed-delay stub driver. Movement takes one latency unit, spraying two,
/// mine removal three, mirroring the relative cost of the real routines.
pub struct SimulatedActuators {
    latency_unit: Duration,
}

impl SimulatedActuators {
    pub fn new(latency_unit: Duration) -> Self {
        Self { latency_unit }
    }

    fn pause(&self, units: u32) {
        if !self.latency_unit.is_zero() {
            thread::sleep(self.latency_unit * units);
        }
    }
}

impl ActuatorDriver for SimulatedActuators {
    fn move_forward(&self) {
        println!("[MOVEMENT] Moving forward...");
        self.pause(1);
    }

    fn move_backward(&self) {
        println!("[MOVEMENT] Moving backward...");
        self.pause(1);
    }

    fn turn_left(&self) {
        println!("[MOVEMENT] Turning left...");
        self.pause(1);
    }

    fn turn_right(&self) {
        println!("[MOVEMENT] Turning right...");
        self.pause(1);
    }

    fn stop(&self) {
        println!("[MOVEMENT] Stopping...");
        self.pause(1);
    }

    fn spray(&self) {
        println!("[DEFENSE] Triggering defense actions!");
        self.pause(2);
        println!("[DEFENSE] Water sprayed.");
        debug!("spray complete");
    }

    fn remove_mine(&self) {
        println!("[MINE DETECTION] Mine detected, attempting to remove it.");
        self.pause(3);
        println!("[MINE DETECTION] Mine removed successfully.");
        debug!("mine removal complete");
    }
}

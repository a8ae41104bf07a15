//! controller.rs
//! Mode state machine and action dispatch: the decision core that turns a
//! sensor snapshot into a mode transition plus exactly one actuator routine.
//!
//! Cycle ordering is fixed: sample → log/display → evaluate transition →
//! invoke action → inter-cycle sleep. Control signals from the operator
//! thread are consumed only at cycle boundaries; an in-flight actuator call
//! is never preempted.

use crossbeam::channel::{Receiver, TryRecvError};
use log::{debug, info, warn};
use spin_sleep::{SpinSleeper, SpinStrategy};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::{
    actuators::{ActuatorDriver, MoveCommand},
    config::SentryConfig,
    sensors::{ObstacleDirection, SensorProvider, SensorSnapshot},
    telemetry::TelemetrySink,
};

/// Operating mode of the sentry. Exactly one is active at any instant;
/// transitions happen only at cycle boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Patrol,
    Defense,
    MineDetection,
    /// Reserved fault-handling state. No transition rule currently enters
    /// it; kept for future fault-detection hooks rather than removed.
    Alert,
}

/// Asynchronous operator intent, raised by the command supervisor and
/// consumed at most once per cycle boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSignal {
    Reset,
    Terminate,
}

/// What a single cycle did. Mode switches take no actuator call on the
/// cycle that records them; every other outcome maps to exactly one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTaken {
    EngagedDefense,
    EngagedMineDetection,
    Moved(MoveCommand),
    Sprayed,
    MineCleared,
    AlertHandled,
}

/// Owns the active [`Mode`] and drives the autonomous loop.
pub struct ModeController<A: ActuatorDriver, T: TelemetrySink> {
    mode: Mode,
    actuators: A,
    telemetry: T,
    signals: Receiver<ControlSignal>,
    running: Arc<AtomicBool>,
    config: SentryConfig,
}

impl<A: ActuatorDriver, T: TelemetrySink> ModeController<A, T> {
    pub fn new(
        actuators: A,
        telemetry: T,
        signals: Receiver<ControlSignal>,
        running: Arc<AtomicBool>,
        config: SentryConfig,
    ) -> Self {
        Self {
            mode: Mode::Patrol,
            actuators,
            telemetry,
            signals,
            running,
            config,
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Run one supervisory cycle against a snapshot: forward it to telemetry,
    /// then evaluate the transition table (first match wins) and invoke the
    /// bound action. Log-then-act: the log line exists even if the action
    /// stalls.
    pub fn run_cycle(&mut self, snapshot: &SensorSnapshot) -> ActionTaken {
        self.telemetry.record(snapshot);

        match self.mode {
            Mode::Patrol => {
                if snapshot.enemy_detected {
                    println!("[PATROL] Enemy detected, switching to defense mode.");
                    self.mode = Mode::Defense;
                    ActionTaken::EngagedDefense
                } else if snapshot.mine_detected {
                    println!("[PATROL] Mine detected, switching to mine detection mode.");
                    self.mode = Mode::MineDetection;
                    ActionTaken::EngagedMineDetection
                } else {
                    ActionTaken::Moved(self.avoid_obstacle(snapshot.obstacle))
                }
            }
            Mode::Defense => {
                // Unconditional: the spray is assumed to succeed, no retry.
                self.actuators.spray();
                self.mode = Mode::Patrol;
                ActionTaken::Sprayed
            }
            Mode::MineDetection => {
                self.actuators.remove_mine();
                self.mode = Mode::Patrol;
                ActionTaken::MineCleared
            }
            Mode::Alert => {
                println!("[ALERT] System in alert mode. Please check!");
                warn!("alert mode handled, returning to patrol");
                self.mode = Mode::Patrol;
                ActionTaken::AlertHandled
            }
        }
    }

    /// Patrol movement: steer away from the reported obstacle side, or
    /// continue forward on a clear path.
    fn avoid_obstacle(&self, obstacle: ObstacleDirection) -> MoveCommand {
        match obstacle {
            ObstacleDirection::Left => {
                println!("[OBSTACLE] Obstacle detected on left, turning right.");
                self.actuators.turn_right();
                MoveCommand::TurnRight
            }
            ObstacleDirection::Right => {
                println!("[OBSTACLE] Obstacle detected on right, turning left.");
                self.actuators.turn_left();
                MoveCommand::TurnLeft
            }
            ObstacleDirection::Clear => {
                println!("[OBSTACLE] No obstacle, continuing forward.");
                self.actuators.move_forward();
                MoveCommand::Forward
            }
        }
    }

    /// Autonomous loop: one cycle per cadence tick until a terminate signal
    /// or a cleared running flag. Signals are polled at the boundary, so a
    /// terminate takes effect before the next cycle begins at the latest.
    pub fn run<P: SensorProvider>(&mut self, sensors: &P) {
        let sleeper = SpinSleeper::new(100_000).with_spin_strategy(SpinStrategy::YieldThread);
        info!(
            "controller loop started: mode={:?}, cadence={:?}",
            self.mode, self.config.cycle_period
        );

        while self.running.load(Ordering::Acquire) {
            match self.signals.try_recv() {
                Ok(ControlSignal::Terminate) => {
                    info!("terminate signal received, stopping loop");
                    break;
                }
                Ok(ControlSignal::Reset) => {
                    // Cosmetic reset: the operator-visible sequence runs on
                    // the supervisor thread; controller state is untouched.
                    info!("reset signal acknowledged, mode unchanged ({:?})", self.mode);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    info!("supervisor channel closed, stopping loop");
                    break;
                }
            }

            let snapshot = sensors.sample();
            let action = self.run_cycle(&snapshot);
            debug!("cycle complete: action={:?}, next mode={:?}", action, self.mode);

            if !self.config.cycle_period.is_zero() {
                sleeper.sleep(self.config.cycle_period);
            }
        }

        debug!("controller loop stopped.");
    }
}

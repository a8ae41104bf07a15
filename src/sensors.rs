//! sensors.rs
//! Sensor acquisition boundary. The controller only sees [`SensorProvider`];
//! the simulated implementation draws bounded random readings, and a real
//! deployment swaps in hardware drivers behind the same accessors.

use chrono::{DateTime, Local};
use rand::random_range;
use std::fmt;

/// Raw mine-sensor readings above this level count as a detected mine.
pub const MINE_THRESHOLD: u16 = 500;

/// Which side the infrared pair reports an obstacle on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleDirection {
    Left,
    Right,
    Clear,
}

impl fmt::Display for ObstacleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObstacleDirection::Left => "LEFT",
            ObstacleDirection::Right => "RIGHT",
            ObstacleDirection::Clear => "CLEAR",
        };
        f.write_str(s)
    }
}

/// One immutable reading of every sensor, taken at a cycle boundary.
/// Consumed by the controller and discarded; carries no identity beyond
/// its creation timestamp.
#[derive(Debug, Clone)]
pub struct SensorSnapshot {
    pub taken_at: DateTime<Local>,
    /// PIR motion sensor: treated as enemy presence.
    pub enemy_detected: bool,
    /// Raw buried-mine proxy level (simulated 400..=800 of a 0..=1023 scale).
    pub mine_level: u16,
    /// Derived: `mine_level > MINE_THRESHOLD`.
    pub mine_detected: bool,
    pub obstacle: ObstacleDirection,
    /// Ultrasonic range, 5..=100 cm in simulation.
    pub distance_cm: u32,
    pub temperature_c: f64,
    pub battery_voltage: f64,
}

/// One accessor per physical sensor. Each is stateless and called once per
/// controller cycle.
pub trait SensorProvider {
    fn motion_detected(&self) -> bool;
    fn mine_level(&self) -> u16;
    fn obstacle_direction(&self) -> ObstacleDirection;
    fn distance_cm(&self) -> u32;
    fn temperature_c(&self) -> f64;
    fn battery_voltage(&self) -> f64;

    /// Read every sensor once and derive the detection booleans.
    fn sample(&self) -> SensorSnapshot {
        let mine_level = self.mine_level();
        SensorSnapshot {
            taken_at: Local::now(),
            enemy_detected: self.motion_detected(),
            mine_level,
            mine_detected: mine_level > MINE_THRESHOLD,
            obstacle: self.obstacle_direction(),
            distance_cm: self.distance_cm(),
            temperature_c: self.temperature_c(),
            battery_voltage: self.battery_voltage(),
        }
    }
}

/// Random stand-in sensors for bench simulation. Ranges match the
/// sentry's nominal operating envelope (lead-acid battery, indoor temp).
pub struct SimulatedSensors;

impl SensorProvider for SimulatedSensors {
    fn motion_detected(&self) -> bool {
        rand::random()
    }

    fn mine_level(&self) -> u16 {
        random_range(400..=800)
    }

    fn obstacle_direction(&self) -> ObstacleDirection {
        match random_range(0..3) {
            0 => ObstacleDirection::Left,
            1 => ObstacleDirection::Right,
            _ => ObstacleDirection::Clear,
        }
    }

    fn distance_cm(&self) -> u32 {
        random_range(5..=100)
    }

    fn temperature_c(&self) -> f64 {
        random_range(20.0..35.0)
    }

    fn battery_voltage(&self) -> f64 {
        random_range(11.0..14.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSensors {
        mine_level: u16,
    }

    impl SensorProvider for FixedSensors {
        fn motion_detected(&self) -> bool {
            false
        }
        fn mine_level(&self) -> u16 {
            self.mine_level
        }
        fn obstacle_direction(&self) -> ObstacleDirection {
            ObstacleDirection::Clear
        }
        fn distance_cm(&self) -> u32 {
            50
        }
        fn temperature_c(&self) -> f64 {
            25.0
        }
        fn battery_voltage(&self) -> f64 {
            13.0
        }
    }

    #[test]
    fn mine_detection_uses_strict_threshold() {
        assert!(!FixedSensors { mine_level: 500 }.sample().mine_detected);
        assert!(FixedSensors { mine_level: 501 }.sample().mine_detected);
        assert!(!FixedSensors { mine_level: 400 }.sample().mine_detected);
    }

    #[test]
    fn simulated_readings_stay_in_bounds() {
        let sensors = SimulatedSensors;
        for _ in 0..200 {
            let snap = sensors.sample();
            assert!((400..=800).contains(&snap.mine_level));
            assert!((5..=100).contains(&snap.distance_cm));
            assert!((20.0..35.0).contains(&snap.temperature_c));
            assert!((11.0..14.8).contains(&snap.battery_voltage));
        }
    }
}

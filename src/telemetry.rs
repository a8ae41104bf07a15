//! telemetry.rs
//! Per-cycle telemetry: one timestamped line appended to a durable log
//! file plus a bordered status block on the operator console.
//! The writer flushes after every line so a process exit mid-mission
//! never leaves a torn record.

use log::error;
use parking_lot::Mutex;
use std::{
    fs::{File, OpenOptions},
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::sensors::SensorSnapshot;

/// Default location of the append-only mission log.
pub const LOG_PATH: &str = "sentry_logs.txt";

/// Receives one snapshot per cycle, before the mode logic runs.
/// Must not block the controller beyond the write itself.
pub trait TelemetrySink {
    fn record(&self, snapshot: &SensorSnapshot);
}

/// Production sink: operator display on stdout + append-only file log.
pub struct ConsoleTelemetry {
    log: Mutex<BufWriter<File>>,
}

impl ConsoleTelemetry {
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            log: Mutex::new(BufWriter::new(file)),
        })
    }

    fn append_line(&self, snapshot: &SensorSnapshot) -> io::Result<()> {
        let mut writer = self.log.lock();
        writeln!(writer, "{}", format_log_line(snapshot))?;
        // Flush per line: a terminate between cycles must not tear the tail.
        writer.flush()
    }
}

impl TelemetrySink for ConsoleTelemetry {
    fn record(&self, snapshot: &SensorSnapshot) {
        if let Err(e) = self.append_line(snapshot) {
            error!("telemetry append failed: {}", e);
        }
        display_status(snapshot);
    }
}

/// Render one mission-log line.
pub fn format_log_line(snapshot: &SensorSnapshot) -> String {
    format!(
        "{} - Enemy: {} | Mine: {} | IR: {} | Distance: {}cm | Temp: {:.2}C | Battery: {:.2}V",
        snapshot.taken_at.format("%Y-%m-%d %H:%M:%S"),
        if snapshot.enemy_detected { "Y" } else { "N" },
        if snapshot.mine_detected { "Y" } else { "N" },
        snapshot.obstacle,
        snapshot.distance_cm,
        snapshot.temperature_c,
        snapshot.battery_voltage,
    )
}

/// Operator-facing status block, printed every cycle.
pub fn display_status(snapshot: &SensorSnapshot) {
    println!("\n================ SYSTEM STATUS ================");
    println!("Time: {}", snapshot.taken_at.format("%Y-%m-%d %H:%M:%S"));
    println!(
        "Enemy Detected: {}",
        if snapshot.enemy_detected { "YES" } else { "NO" }
    );
    println!(
        "Mine Detected: {}",
        if snapshot.mine_detected { "YES" } else { "NO" }
    );
    println!("Obstacle Direction: {}", snapshot.obstacle);
    println!("Ultrasonic Distance: {} cm", snapshot.distance_cm);
    println!("Temperature: {:.2} C", snapshot.temperature_c);
    println!("Battery Voltage: {:.2} V", snapshot.battery_voltage);
    println!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sensors::ObstacleDirection;
    use chrono::{Local, TimeZone};

    #[test]
    fn log_line_matches_mission_format() {
        let taken_at = Local.with_ymd_and_hms(2026, 8, 23, 14, 30, 5).unwrap();
        let snapshot = SensorSnapshot {
            taken_at,
            enemy_detected: true,
            mine_level: 420,
            mine_detected: false,
            obstacle: ObstacleDirection::Left,
            distance_cm: 50,
            temperature_c: 25.0,
            battery_voltage: 13.0,
        };

        assert_eq!(
            format_log_line(&snapshot),
            "2026-08-23 14:30:05 - Enemy: Y | Mine: N | IR: LEFT | Distance: 50cm | Temp: 25.00C | Battery: 13.00V"
        );
    }

    #[test]
    fn booleans_render_as_single_letters() {
        let taken_at = Local.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let snapshot = SensorSnapshot {
            taken_at,
            enemy_detected: false,
            mine_level: 700,
            mine_detected: true,
            obstacle: ObstacleDirection::Clear,
            distance_cm: 5,
            temperature_c: 20.5,
            battery_voltage: 11.25,
        };

        let line = format_log_line(&snapshot);
        assert!(line.contains("Enemy: N | Mine: Y | IR: CLEAR"));
        assert!(line.ends_with("Temp: 20.50C | Battery: 11.25V"));
    }
}

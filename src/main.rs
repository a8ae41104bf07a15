//! Sentry simulation entry point.
//!
//! Spawns the autonomous controller loop on its own thread and runs the
//! operator command loop on the main thread. The two share exactly one
//! piece of state: the control-signal channel plus an atomic running flag.
//!
//! An operator `exit` (or Ctrl-C) terminates the whole process immediately;
//! an in-flight actuator routine is never drained. The telemetry sink
//! flushes per line, so the mission log never ends in a torn record.

use crossbeam::channel::bounded;
use log::{error, info};
use std::{
    process,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use sentry_sim::{
    ConsoleTelemetry, ModeController, SentryConfig, SimulatedActuators, SimulatedSensors,
    supervisor::run_command_loop,
    telemetry::LOG_PATH,
};

fn main() {
    env_logger::init();
    info!("=== SENTRY CONTROL START ===");
    println!("[MONITORING] Military Sentry Gun system started...");

    let config = SentryConfig::default();
    let running = Arc::new(AtomicBool::new(true));
    let (signal_tx, signal_rx) = bounded(1);

    {
        let running = running.clone();
        if let Err(e) = ctrlc::set_handler(move || {
            println!("\n[ERROR] Program interrupted by user.");
            println!("[EXIT] Exiting system...");
            running.store(false, Ordering::Release);
            process::exit(0);
        }) {
            error!("failed to install interrupt handler: {}", e);
        }
    }

    let telemetry = match ConsoleTelemetry::new(LOG_PATH) {
        Ok(sink) => sink,
        Err(e) => {
            error!("cannot open mission log {}: {}", LOG_PATH, e);
            process::exit(1);
        }
    };

    let controller_handle = {
        let running = running.clone();
        thread::spawn(move || {
            let actuators = SimulatedActuators::new(config.actuator_latency);
            let mut controller =
                ModeController::new(actuators, telemetry, signal_rx, running, config);
            controller.run(&SimulatedSensors);
        })
    };

    let reason = run_command_loop(&signal_tx, &running);
    info!("command loop finished: {:?}", reason);

    // No graceful drain: the controller may be mid-action, the process ends
    // now. The handle is intentionally not joined.
    drop(controller_handle);
    info!("=== SENTRY CONTROL FINISHED ===");
    process::exit(0);
}

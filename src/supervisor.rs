//! supervisor.rs
//! Operator command loop. Runs on the main thread, blocking on stdin,
//! and raises Reset/Terminate intents over the single-slot signal channel
//! without ever touching the controller's internal state.

use crossbeam::channel::Sender;
use log::{info, warn};
use std::{
    io::{self, Write},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
    time::Duration,
};

use crate::controller::ControlSignal;

const RESET_PAUSE: Duration = Duration::from_secs(3);

/// Outcome of the command loop; the process exits with code 0 either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    OperatorExit,
    InputClosed,
}

/// Prompt for operator commands until `exit`. `reset` raises the Reset
/// signal and runs the console-visible reset sequence; unknown input
/// re-prompts. Returns when the system should terminate.
pub fn run_command_loop(
    signals: &Sender<ControlSignal>,
    running: &Arc<AtomicBool>,
) -> ExitReason {
    let stdin = io::stdin();

    loop {
        print!("\nEnter command (reset/exit): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) => {
                // stdin closed: nothing more can arrive, shut down.
                warn!("operator input closed, terminating");
                running.store(false, Ordering::Release);
                let _ = signals.try_send(ControlSignal::Terminate);
                return ExitReason::InputClosed;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("failed to read operator input: {}", e);
                continue;
            }
        }

        match line.trim().to_lowercase().as_str() {
            "reset" => {
                // Single-slot channel: a still-pending signal means the
                // controller has not reached a cycle boundary yet; the
                // intent is consumed at most once either way.
                let _ = signals.try_send(ControlSignal::Reset);
                reset_sequence();
            }
            "exit" => {
                println!("[EXIT] Exiting system...");
                info!("operator requested exit");
                running.store(false, Ordering::Release);
                let _ = signals.try_send(ControlSignal::Terminate);
                return ExitReason::OperatorExit;
            }
            _ => {
                println!("Invalid command.");
            }
        }
    }
}

/// Console-visible reset sequence. Symbolic only: it pauses and reports,
/// it does not reinitialize the controller (the controller logs receipt of
/// the Reset signal and keeps its mode).
pub fn reset_sequence() {
    println!("[RESET] System is being reset...");
    thread::sleep(RESET_PAUSE);
    println!("[RESET] System has been reset.");
}

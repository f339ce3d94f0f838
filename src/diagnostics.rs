//! Best-effort diagnostic logging.
//!
//! Both engines emit `tracing` events for every interaction of interest
//! (pickups, deposits, drops, combination attempts, rewards, resets).
//! The events are fire-and-forget: nothing in the simulation reads them
//! back, and a missing or failing subscriber never affects correctness.
//!
//! `init_file_log` installs a line-oriented append-only file subscriber
//! for drivers that want the traditional log file. Installation is
//! best-effort too: if a subscriber is already set or the file cannot
//! be opened, the function reports failure and the engines simply run
//! unlogged.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

/// Install an append-only file subscriber for all `tracing` events.
///
/// Returns `false` (rather than an error) when the file cannot be
/// opened or a global subscriber is already installed.
pub fn init_file_log(path: impl AsRef<Path>) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}

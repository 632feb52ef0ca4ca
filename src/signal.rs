//! SIGINT/SIGTERM handling for the TUI loop.
//!
//! In raw mode Ctrl+C arrives as a key event, so these handlers mainly
//! cover `kill` and terminal hang-ups.

use signal_hook::consts::TERM_SIGNALS;
use signal_hook::flag;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set once a termination signal arrives.
#[derive(Debug, Clone)]
pub struct ShutdownFlag(Arc<AtomicBool>);

impl ShutdownFlag {
    /// Register the handlers for every termination signal.
    ///
    /// The first signal only sets the flag so the loop can restore the
    /// terminal; a second one exits the process with code 1.
    pub fn install() -> std::io::Result<Self> {
        let requested = Arc::new(AtomicBool::new(false));
        for sig in TERM_SIGNALS {
            // Order matters: the conditional exit must see the flag before it is set
            flag::register_conditional_shutdown(*sig, 1, Arc::clone(&requested))?;
            flag::register(*sig, Arc::clone(&requested))?;
        }
        Ok(Self(requested))
    }

    /// A flag that no signal will ever set.
    pub fn inert() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

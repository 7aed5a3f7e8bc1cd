//! Forwarding interrupts delivered to the tracer on to its target.
//!
//! The handler is process-wide, and follows whichever target was registered last. It
//! stops the target with `SIGSTOP` and raises a flag the trace loop checks before each
//! resume. If the target is already running when the interrupt lands, the loop only
//! notices at its next stop.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Once;

use nix::sys::signal::{kill, Signal};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ptracer::Pid;

static INSTALL: Once = Once::new();
static TARGET: AtomicI32 = AtomicI32::new(0);
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Install the handler for `SIGINT`, `SIGTERM`, and `SIGHUP`, if not yet installed.
pub(crate) fn install() -> Result<()> {
    let mut result = Ok(());

    INSTALL.call_once(|| {
        result = ctrlc::set_handler(forward)
            .map_err(|err| Error::Internal(format!("could not install interrupt handler: {err}")));
    });

    result
}

fn forward() {
    INTERRUPTED.store(true, Ordering::SeqCst);

    let pid = TARGET.load(Ordering::SeqCst);

    if pid > 0 {
        let _ = kill(Pid::from_raw(pid), Signal::SIGSTOP);
    }
}

pub(crate) fn register(pid: Pid) {
    debug!(pid = pid.as_raw(), "forwarding interrupts");

    INTERRUPTED.store(false, Ordering::SeqCst);
    TARGET.store(pid.as_raw(), Ordering::SeqCst);
}

pub(crate) fn unregister(pid: Pid) {
    let _ = TARGET.compare_exchange(pid.as_raw(), 0, Ordering::SeqCst, Ordering::SeqCst);
}

/// True if an interrupt is pending, without consuming it.
pub(crate) fn pending() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Consume a pending interrupt.
pub(crate) fn take() -> bool {
    INTERRUPTED.swap(false, Ordering::SeqCst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interrupt_is_taken_once() {
        unregister(Pid::from_raw(TARGET.load(Ordering::SeqCst)));
        take();

        forward();

        assert!(pending());
        assert!(take());
        assert!(!pending());
        assert!(!take());
    }
}

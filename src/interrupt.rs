//! Operator interrupts (SIGINT).
//!
//! Outside a critical section the handler prints the notice and exits with
//! status 0 straight away. Inside one it only records the interrupt; the code
//! holding the section polls [`Interrupt::take_pending`] between steps and
//! unwinds with [`InitError::Interrupted`](crate::error::InitError::Interrupted),
//! so a file write is never cut off between its temp file and the rename.

use crate::exit_codes;
use std::sync::atomic::{AtomicBool, Ordering};

pub const INTERRUPTED_NOTICE: &str = "[Interrupted.]";

/// Interrupt state shared between the signal handler and the main thread.
#[derive(Debug)]
pub struct Interrupt {
    pending: AtomicBool,
    critical: AtomicBool,
}

/// Process-wide state the installed handler reports to.
pub static INTERRUPT: Interrupt = Interrupt::new();

impl Interrupt {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
            critical: AtomicBool::new(false),
        }
    }

    /// Record an interrupt. Returns `true` when it was deferred because a
    /// critical section is open.
    pub fn notify(&self) -> bool {
        self.pending.store(true, Ordering::SeqCst);
        self.critical.load(Ordering::SeqCst)
    }

    /// Open a critical section; it closes when the guard is dropped.
    pub fn enter(&self) -> CriticalSection<'_> {
        self.critical.store(true, Ordering::SeqCst);
        CriticalSection { interrupt: self }
    }

    /// Clear and return the recorded interrupt.
    pub fn take_pending(&self) -> bool {
        self.pending.swap(false, Ordering::SeqCst)
    }
}

impl Default for Interrupt {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard for a section that must not be cut short by the handler.
#[must_use]
pub struct CriticalSection<'a> {
    interrupt: &'a Interrupt,
}

impl CriticalSection<'_> {
    /// Whether an interrupt arrived since the last check.
    pub fn interrupted(&self) -> bool {
        self.interrupt.take_pending()
    }
}

impl Drop for CriticalSection<'_> {
    fn drop(&mut self) {
        self.interrupt.critical.store(false, Ordering::SeqCst);
    }
}

pub fn print_interrupted() {
    println!();
    println!("{}", INTERRUPTED_NOTICE);
}

/// Install the SIGINT handler for [`INTERRUPT`].
pub fn install() -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(|| {
        if !INTERRUPT.notify() {
            print_interrupted();
            std::process::exit(exit_codes::SUCCESS);
        }
    })
}

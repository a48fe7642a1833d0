//! Diagnostic tracing for the passes
//!
//! The resolver, the evaluator and the Rust emitter report what they are
//! doing through [`debug_println!`]: findings as they are recorded, each
//! statement as it executes, the size of the emitted code. Output goes to
//! stderr and is off unless `CALC_DEBUG` is set in the environment or
//! [`enable_debug`] is called.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;

static TRACE: AtomicBool = AtomicBool::new(false);

// `CALC_DEBUG` is read once, on first use
static READ_ENV: Once = Once::new();

fn apply_env() {
    READ_ENV.call_once(|| {
        if std::env::var_os("CALC_DEBUG").is_some() {
            TRACE.store(true, Ordering::Relaxed);
        }
    });
}

/// Turn pass tracing on for the whole process
pub fn enable_debug() {
    apply_env();
    TRACE.store(true, Ordering::Relaxed);
}

/// Turn pass tracing off, even when `CALC_DEBUG` is set
pub fn disable_debug() {
    apply_env();
    TRACE.store(false, Ordering::Relaxed);
}

pub fn is_debug_enabled() -> bool {
    apply_env();
    TRACE.load(Ordering::Relaxed)
}

/// `eprintln!` that only fires while tracing is enabled
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        if $crate::debug::is_debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}

use std::sync::atomic::{AtomicU8, Ordering};

/// Output level for the whole run, set once from the CLI flags before any
/// task is spawned. Quiet wins over verbose when both are given.
const QUIET: u8 = 0;
const NORMAL: u8 = 1;
const VERBOSE: u8 = 2;

static LEVEL: AtomicU8 = AtomicU8::new(NORMAL);

pub fn configure(quiet: bool, verbose: bool) {
    let level = if quiet {
        QUIET
    } else if verbose {
        VERBOSE
    } else {
        NORMAL
    };
    LEVEL.store(level, Ordering::Relaxed);
}

pub fn prints_progress() -> bool {
    LEVEL.load(Ordering::Relaxed) >= NORMAL
}

pub fn prints_transfers() -> bool {
    LEVEL.load(Ordering::Relaxed) >= VERBOSE
}

/// Run-level progress: start line, completion summary.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::logger::prints_progress() {
            println!($($arg)*);
        }
    };
}

/// Per-file upload/download detail, shown only with `--verbose`.
#[macro_export]
macro_rules! transfer {
    ($($arg:tt)*) => {
        if $crate::logger::prints_transfers() {
            println!("📡 {}", format!($($arg)*));
        }
    };
}

/// Failures always reach stderr, even in quiet mode.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format!($($arg)*));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::logger::prints_progress() {
            eprintln!("⚠️  {}", format!($($arg)*));
        }
    };
}

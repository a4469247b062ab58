//! Output control for CLI status messages

/// Output level for harness status messages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output except errors
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with table shapes and counters
    Verbose,
}

impl LogLevel {
    /// Derive the level from the global CLI flags
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }
}

/// Print a message when the current level permits it.
///
/// Status output goes to stderr so CSV piped to stdout stays clean.
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level == LogLevel::Quiet {
        return;
    }
    if required == LogLevel::Normal || level == LogLevel::Verbose {
        eprintln!("{msg}");
    }
}

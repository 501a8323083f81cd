//! Leveled logging for the type-formula workspace.
//!
//! Messages go to stderr, tagged with their level and the module path of the
//! call site. The minimum level is global and can be changed at any time,
//! from code or from the `FORMULA_LOG` environment variable.
//!
//! # Example
//!
//! ```
//! use formula_log::{debug, info, Level};
//!
//! formula_log::set_level(Level::Debug);
//!
//! info!("rendered {} formulas", 3);
//! debug!("parameters: {:?}", ["Int", "Bool"]);
//! ```

use std::fmt;
use std::env::VarError;
use std::fmt::Arguments;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable read by [`init_from_env`].
pub const ENV_VAR: &str = "FORMULA_LOG";

/// Level used when nothing else has been configured.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Severity of a log message, most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Failures the caller has to act on.
    Error = 0,
    /// Suspicious input that was still handled.
    Warn = 1,
    /// High-level progress.
    Info = 2,
    /// Details useful when diagnosing a problem.
    Debug = 3,
    /// Every step, including each built formula.
    Trace = 4,
}

impl Level {
    const fn color_code(self) -> &'static str {
        match self {
            Level::Error => "\x1b[31m",
            Level::Warn => "\x1b[33m",
            Level::Info => "\x1b[32m",
            Level::Debug => "\x1b[36m",
            Level::Trace => "\x1b[35m",
        }
    }

    /// Upper-case tag printed in front of each message.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }

    const fn from_u8(value: u8) -> Level {
        match value {
            0 => Level::Error,
            1 => Level::Warn,
            3 => Level::Debug,
            4 => Level::Trace,
            _ => Level::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid log level: {:?}", self.input)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Case-insensitive, surrounding whitespace ignored.
    ///
    /// ```
    /// use formula_log::Level;
    ///
    /// assert_eq!("debug".parse::<Level>(), Ok(Level::Debug));
    /// assert!("verbose".parse::<Level>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ERROR" => Ok(Level::Error),
            "WARN" | "WARNING" => Ok(Level::Warn),
            "INFO" => Ok(Level::Info),
            "DEBUG" => Ok(Level::Debug),
            "TRACE" => Ok(Level::Trace),
            _ => Err(ParseLevelError {
                input: s.to_owned(),
            }),
        }
    }
}

/// Holds the minimum level that gets printed.
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    const fn new(level: Level) -> Self {
        Logger {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Sets the minimum level that gets printed.
    pub fn set_level(&self, level: Level) {
        self.level.store(level as u8, Ordering::SeqCst);
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        Level::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Whether a message at `level` would be printed.
    pub fn enabled(&self, level: Level) -> bool {
        level as u8 <= self.level.load(Ordering::Relaxed)
    }
}

static LOGGER: Logger = Logger::new(DEFAULT_LEVEL);

/// The process-wide logger. Starts at [`DEFAULT_LEVEL`].
pub fn logger() -> &'static Logger {
    &LOGGER
}

/// Sets the minimum level of the global logger.
pub fn set_level(level: Level) {
    logger().set_level(level);
}

/// Sets the level from its name, e.g. `"trace"`.
pub fn set_level_from_str(s: &str) -> Result<(), ParseLevelError> {
    set_level(s.parse()?);
    Ok(())
}

/// Configures the level from `FORMULA_LOG`.
///
/// An unset variable selects [`DEFAULT_LEVEL`]. A value that is not a level
/// name, or is not valid UTF-8, is an error and leaves the level untouched.
pub fn init_from_env() -> Result<Level, ParseLevelError> {
    let level = match std::env::var(ENV_VAR) {
        Ok(value) => value.parse()?,
        Err(VarError::NotPresent) => DEFAULT_LEVEL,
        Err(VarError::NotUnicode(value)) => {
            return Err(ParseLevelError {
                input: value.to_string_lossy().into_owned(),
            });
        }
    };

    set_level(level);
    Ok(level)
}

#[doc(hidden)]
pub fn __log_with_target(level: Level, target: &str, args: Arguments) {
    const RESET: &str = "\x1b[0m";

    if !logger().enabled(level) {
        return;
    }

    let color = level.color_code();
    eprintln!("{color}[{level}]{RESET} {target}: {args}");
}

/// Logs at an explicit level, tagging the message with the caller's module.
///
/// ```
/// use formula_log::{log, Level};
///
/// log!(level: Level::Warn, "depth {} is unusually large", 4096);
/// ```
#[macro_export]
macro_rules! log {
    (level: $level:expr, $($arg:tt)*) => {
        {
            if $crate::logger().enabled($level) {
                $crate::__log_with_target(
                    $level,
                    module_path!(),
                    format_args!($($arg)*)
                );
            }
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Error, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Warn, $($arg)*)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Info, $($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Debug, $($arg)*)
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        $crate::log!(level: $crate::Level::Trace, $($arg)*)
    };
}

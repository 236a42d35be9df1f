//! Error types
//!
//! Startup errors ([`ConfigError`], [`Error::Hardware`]) are fatal. Everything
//! else is reported to the main loop, which logs it and fades the strip out.

use core::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Configuration could not be loaded
    Config(ConfigError),
    /// The strip driver failed to push a frame or was misconfigured
    Strip(String),
    /// A button could not be read
    Button(String),
    /// Hardware initialisation failed
    Hardware(String),
    /// The animation thread could not be started
    Spawn(io::Error),
    /// The strip was lost together with a task that never came back
    StripUnavailable,
    /// A sequence panicked while driving the strip
    SequencePanicked,
}

#[derive(Debug)]
pub enum ConfigError {
    /// File could not be read
    Read { path: PathBuf, source: io::Error },
    /// File exists but holds no document
    Empty { path: PathBuf },
    /// File is not a valid config document
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    /// Values are out of their allowed range
    Invalid(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "config error: {err}"),
            Self::Strip(msg) => write!(f, "strip error: {msg}"),
            Self::Button(msg) => write!(f, "button error: {msg}"),
            Self::Hardware(msg) => write!(f, "hardware error: {msg}"),
            Self::Spawn(err) => write!(f, "failed to spawn animation thread: {err}"),
            Self::StripUnavailable => f.write_str("strip is not available"),
            Self::SequencePanicked => f.write_str("animation sequence panicked"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Empty { path } => write!(f, "{} is empty", path.display()),
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            Self::Invalid(msg) => write!(f, "invalid value: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Spawn(err) => Some(err),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Empty { .. } | Self::Invalid(_) => None,
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

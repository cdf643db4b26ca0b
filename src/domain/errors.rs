use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a config file was rejected as unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadConfigKind {
    NotFound,
    MissingSection,
    MissingKey(&'static str),
}

impl fmt::Display for BadConfigKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadConfigKind::NotFound => write!(f, "no config file found on the search path"),
            BadConfigKind::MissingSection => write!(f, "missing [okta] section"),
            BadConfigKind::MissingKey(key) => write!(f, "missing '{}' key", key),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Bad configuration file! ({0})")]
    BadConfig(BadConfigKind),

    /// Read or parse failure reported by the INI reader, passed through untouched
    #[error("malformed file {}: {source}", path.display())]
    Ini {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("aws profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("HOME environment variable is not set")]
    HomeNotSet,
}

impl ConfigError {
    pub fn is_bad_config(&self) -> bool {
        matches!(self, ConfigError::BadConfig(_))
    }
}

use std::fmt;
use std::path::{Path, PathBuf};

/// Config file looked up in the current working directory
pub const CWD_CONFIG_FILE: &str = ".okta";
/// Directory under `$HOME` holding the fallback config file
pub const HOME_CONFIG_DIR: &str = ".okta-aws";
pub const HOME_CONFIG_FILE: &str = "config";
/// AWS config, always read from `$HOME/.aws/config`
pub const AWS_CONFIG_DIR: &str = ".aws";
pub const AWS_CONFIG_FILE: &str = "config";

/// Where a candidate config path came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathOrigin {
    Explicit,
    WorkingDir,
    HomeDir,
}

impl fmt::Display for PathOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathOrigin::Explicit => write!(f, "config param file"),
            PathOrigin::WorkingDir => write!(f, "CWD"),
            PathOrigin::HomeDir => write!(f, "home dir"),
        }
    }
}

/// A single place a config file may live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePath {
    pub origin: PathOrigin,
    pub path: PathBuf,
}

impl CandidatePath {
    pub fn new(origin: PathOrigin, path: impl Into<PathBuf>) -> Self {
        Self {
            origin,
            path: path.into(),
        }
    }

    pub fn as_path(&self) -> &Path {
        &self.path
    }
}

/// Ordered list of candidate config paths; earlier entries win
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath(Vec<CandidatePath>);

impl SearchPath {
    pub fn new(candidates: Vec<CandidatePath>) -> Self {
        SearchPath(candidates)
    }

    pub fn candidates(&self) -> &[CandidatePath] {
        &self.0
    }

    /// Returns the first candidate that exists on disk
    ///
    /// Candidates are probed in order and probing stops at the first hit.
    pub fn first_existing(&self) -> Option<&CandidatePath> {
        self.first_matching(|path| path.exists())
    }

    fn first_matching(&self, exists: impl Fn(&Path) -> bool) -> Option<&CandidatePath> {
        self.0.iter().find(|candidate| {
            tracing::debug!(origin = %candidate.origin, "trying to load from {}", candidate.origin);
            exists(candidate.as_path())
        })
    }
}

use crate::application::services::Environment;
use std::path::PathBuf;

/// Environment backed by the running process
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        std::env::var_os("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from)
    }
}

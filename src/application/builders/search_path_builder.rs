use crate::domain::value_objects::{
    CWD_CONFIG_FILE, CandidatePath, HOME_CONFIG_DIR, HOME_CONFIG_FILE, PathOrigin, SearchPath,
};
use std::path::{Path, PathBuf};

/// Assembles the config search path tier by tier
///
/// Tiers that cannot be resolved (no explicit path, unknown cwd, unset
/// `HOME`) are left out instead of failing the build.
pub struct SearchPathBuilder {
    explicit: Option<CandidatePath>,
    working_dir: Option<CandidatePath>,
    home_dir: Option<CandidatePath>,
}

impl SearchPathBuilder {
    pub fn new() -> Self {
        Self {
            explicit: None,
            working_dir: None,
            home_dir: None,
        }
    }

    pub fn explicit(mut self, path: Option<&Path>) -> Self {
        self.explicit = path.map(|p| CandidatePath::new(PathOrigin::Explicit, p));
        self
    }

    pub fn working_dir(mut self, cwd: Option<PathBuf>) -> Self {
        match cwd {
            Some(dir) => {
                self.working_dir = Some(CandidatePath::new(
                    PathOrigin::WorkingDir,
                    dir.join(CWD_CONFIG_FILE),
                ));
            }
            None => tracing::debug!("current working directory unavailable, skipping"),
        }
        self
    }

    pub fn home_dir(mut self, home: Option<PathBuf>) -> Self {
        match home {
            Some(dir) => {
                self.home_dir = Some(CandidatePath::new(
                    PathOrigin::HomeDir,
                    dir.join(HOME_CONFIG_DIR).join(HOME_CONFIG_FILE),
                ));
            }
            None => tracing::debug!("HOME not set, skipping home dir config"),
        }
        self
    }

    pub fn build(self) -> SearchPath {
        SearchPath::new(
            [self.explicit, self.working_dir, self.home_dir]
                .into_iter()
                .flatten()
                .collect(),
        )
    }
}

impl Default for SearchPathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

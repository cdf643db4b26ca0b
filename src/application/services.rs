use crate::application::builders::search_path_builder::SearchPathBuilder;
use crate::domain::entities::{APP_URL_KEY, BASE_URL_KEY, OKTA_SECTION, OktaConfig, ROLE_ARN_KEY};
use crate::domain::errors::{BadConfigKind, ConfigError};
use crate::domain::value_objects::{AWS_CONFIG_DIR, AWS_CONFIG_FILE, CandidatePath};
use crate::infrastructure::config::{has_section, last_value, load_ini};
use ini::Ini;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Process environment the lookups depend on
///
/// Kept behind a trait so the search order can be exercised against
/// temporary directories.
#[cfg_attr(test, mockall::automock)]
pub trait Environment: Send + Sync {
    fn current_dir(&self) -> Option<PathBuf>;
    fn home_dir(&self) -> Option<PathBuf>;
}

/// An INI document together with the candidate it was read from
#[derive(Debug)]
pub struct LoadedConfig {
    pub source: CandidatePath,
    pub ini: Ini,
}

/// Application service for the config and AWS profile lookups
pub struct ConfigService {
    env: Box<dyn Environment>,
}

impl ConfigService {
    pub fn new(env: Box<dyn Environment>) -> Self {
        Self { env }
    }

    /// Loads the Okta settings, searching the explicit path, then
    /// `$CWD/.okta`, then `$HOME/.okta-aws/config`
    pub fn parse_config(&self, explicit: Option<&Path>) -> Result<OktaConfig, ConfigError> {
        let loaded = self.load_config(explicit)?;
        debug!(origin = %loaded.source.origin, "validating [okta] section");
        OktaSectionValidator::extract(&loaded.ini)
    }

    /// Figures out which config file to load and parses it
    ///
    /// The first existing candidate is parsed; a parse failure there is
    /// returned as is and later candidates are not tried.
    pub fn load_config(&self, explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let search_path = SearchPathBuilder::new()
            .explicit(explicit)
            .working_dir(self.env.current_dir())
            .home_dir(self.env.home_dir())
            .build();

        let Some(source) = search_path.first_existing() else {
            debug!(
                candidates = search_path.candidates().len(),
                "no config file found"
            );
            return Err(ConfigError::BadConfig(BadConfigKind::NotFound));
        };

        debug!("loading {}", source.path.display());
        let ini = load_ini(source.as_path())?;
        Ok(LoadedConfig {
            source: source.clone(),
            ini,
        })
    }

    /// Reads the `role_arn` of profile `name` from `$HOME/.aws/config`
    ///
    /// A profile without `role_arn` yields an empty string and no error,
    /// unlike [`ConfigService::parse_config`] which rejects missing keys.
    pub fn read_aws_profile(&self, name: &str) -> Result<String, ConfigError> {
        let ini = self.load_aws_config().inspect_err(|err| {
            debug!("aws profile load err, {}", err);
        })?;

        if !has_section(&ini, name) {
            let err = ConfigError::ProfileNotFound(name.to_string());
            debug!("aws profile read err, {}", err);
            return Err(err);
        }

        match last_value(&ini, name, ROLE_ARN_KEY) {
            Some(arn) => Ok(arn.to_string()),
            None => {
                debug!("aws profile {} missing role_arn key", name);
                Ok(String::new())
            }
        }
    }

    fn load_aws_config(&self) -> Result<Ini, ConfigError> {
        let home = self.env.home_dir().ok_or(ConfigError::HomeNotSet)?;
        load_ini(&home.join(AWS_CONFIG_DIR).join(AWS_CONFIG_FILE))
    }
}

/// Domain rules for the `[okta]` section
pub struct OktaSectionValidator;

impl OktaSectionValidator {
    pub fn extract(ini: &Ini) -> Result<OktaConfig, ConfigError> {
        if !has_section(ini, OKTA_SECTION) {
            return Err(ConfigError::BadConfig(BadConfigKind::MissingSection));
        }

        let required = |key: &'static str| {
            last_value(ini, OKTA_SECTION, key)
                .map(str::to_string)
                .ok_or(ConfigError::BadConfig(BadConfigKind::MissingKey(key)))
        };

        Ok(OktaConfig {
            base_url: required(BASE_URL_KEY)?,
            app_url: required(APP_URL_KEY)?,
        })
    }
}

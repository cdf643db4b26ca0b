use crate::domain::errors::ConfigError;
use ini::{Ini, ParseOption};
use std::path::Path;

/// Reads and parses an INI file
///
/// Backslashes are kept verbatim and `#`/`;` comments after a value are
/// dropped. Open and parse failures are passed through as
/// [`ConfigError::Ini`].
pub fn load_ini(path: &Path) -> Result<Ini, ConfigError> {
    let opt = ParseOption {
        enabled_escape: false,
        ..Default::default()
    };
    Ini::load_from_file_opt(path, opt).map_err(|source| ConfigError::Ini {
        path: path.to_path_buf(),
        source,
    })
}

/// Value of `key` in `section`, where later assignments override earlier
/// ones, including across repeated `[section]` blocks
pub fn last_value<'a>(ini: &'a Ini, section: &str, key: &str) -> Option<&'a str> {
    ini.section_all(Some(section))
        .flat_map(|props| props.get_all(key))
        .last()
}

pub fn has_section(ini: &Ini, section: &str) -> bool {
    ini.section_all(Some(section)).next().is_some()
}

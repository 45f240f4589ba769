use std::fs;
use std::path::PathBuf;

use gateway_oled_core::providers::VersionSource;
use log::debug;

/// Distribution prefix dropped from `VERSION_ID`
const DISTRO_PREFIX: &str = "rakpios-";

/// Version string from an os-release file.
pub struct OsReleaseVersion {
    path: PathBuf,
}

impl OsReleaseVersion {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl VersionSource for OsReleaseVersion {
    fn version(&mut self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_version_id(&text),
            Err(e) => {
                debug!("Cannot read {}: {}", self.path.display(), e);
                None
            }
        }
    }
}

/// Extract `VERSION_ID`, unquoted and without the distribution prefix.
pub fn parse_version_id(os_release: &str) -> Option<String> {
    let value = os_release
        .lines()
        .find_map(|line| line.trim().strip_prefix("VERSION_ID="))?;
    let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
    let value = value.strip_prefix(DISTRO_PREFIX).unwrap_or(value);

    (!value.is_empty()).then(|| value.to_string())
}

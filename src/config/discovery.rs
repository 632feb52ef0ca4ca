//! Config discovery for logscope.
//!
//! Walks parent directories to find `logscope.yaml` and checks for global config
//! at `<config_dir>/logscope/config.yaml`.

use std::path::{Path, PathBuf};

/// Project config filename to search for in parent directories.
pub const PROJECT_CONFIG_NAME: &str = "logscope.yaml";

/// Global config filename within the logscope config directory.
pub const GLOBAL_CONFIG_NAME: &str = "config.yaml";

/// Directory name under the platform config dir.
pub const APP_DIR_NAME: &str = "logscope";

/// Result of config discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryResult {
    /// Full path to the project config file (`logscope.yaml`).
    pub project_config: Option<PathBuf>,
    /// Full path to the global config file.
    pub global_config: Option<PathBuf>,
}

impl DiscoveryResult {
    /// Returns true if any config was found (project or global).
    pub fn has_config(&self) -> bool {
        self.project_config.is_some() || self.global_config.is_some()
    }

    /// The file config commands operate on: project wins over global.
    pub fn effective_config(&self) -> Option<&Path> {
        self.project_config
            .as_deref()
            .or(self.global_config.as_deref())
    }
}

/// Discover config files starting from the current working directory.
pub fn discover() -> DiscoveryResult {
    discover_verbose().0
}

/// Same as [`discover`] but also returns every directory that was searched.
/// Used for `-v` output.
pub fn discover_verbose() -> (DiscoveryResult, Vec<PathBuf>) {
    let global_dir = dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME));

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.canonicalize().unwrap_or(dir),
        Err(_) => {
            let result = DiscoveryResult {
                project_config: None,
                global_config: find_global(global_dir.as_deref()),
            };
            return (result, Vec::new());
        }
    };

    discover_from(&cwd, global_dir.as_deref())
}

/// Discovery rooted at `start`, with the global config looked up in `global_dir`.
pub fn discover_from(start: &Path, global_dir: Option<&Path>) -> (DiscoveryResult, Vec<PathBuf>) {
    let mut result = DiscoveryResult {
        project_config: None,
        global_config: find_global(global_dir),
    };
    let mut searched_paths = Vec::new();

    for ancestor in start.ancestors() {
        searched_paths.push(ancestor.to_path_buf());

        let config_path = ancestor.join(PROJECT_CONFIG_NAME);
        if is_file(&config_path) {
            result.project_config = Some(config_path);
            break;
        }
    }

    (result, searched_paths)
}

fn find_global(global_dir: Option<&Path>) -> Option<PathBuf> {
    let path = global_dir?.join(GLOBAL_CONFIG_NAME);
    is_file(&path).then_some(path)
}

fn is_file(path: &Path) -> bool {
    path.try_exists().unwrap_or(false) && path.is_file()
}

//! Config-file discovery on disk.
//!
//! For a logical name such as `twtheme` the search order is:
//! 1. `$XDG_CONFIG_HOME/twin/<name>` (or `~/.config/twin/<name>`)
//! 2. `~/.<name>`
//! 3. `/etc/twin/<name>`

use std::path::{Path, PathBuf};

const APP_DIR: &str = "twin";
const SYSTEM_CONFIG_DIR: &str = "/etc/twin";

/// A located config file and its size at lookup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Find the first existing regular file for `name`, or `None` when absent.
pub fn find_config_file(name: &str) -> Option<ConfigFile> {
    find_config_file_with_sources(name, config_root_dir(), dirs::home_dir(), file_size)
}

pub(super) fn find_config_file_with_sources<FSize>(
    name: &str,
    config_root: Option<PathBuf>,
    home: Option<PathBuf>,
    file_size: FSize,
) -> Option<ConfigFile>
where
    FSize: Fn(&Path) -> Option<u64>,
{
    candidate_paths(name, config_root, home)
        .into_iter()
        .find_map(|path| file_size(&path).map(|size| ConfigFile { path, size }))
}

/// Every path searched for `name`, in precedence order.
pub fn candidate_paths(
    name: &str,
    config_root: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);
    if let Some(root) = config_root {
        paths.push(root.join(APP_DIR).join(name));
    }
    if let Some(home) = home {
        paths.push(home.join(format!(".{name}")));
    }
    paths.push(Path::new(SYSTEM_CONFIG_DIR).join(name));
    paths
}

fn file_size(path: &Path) -> Option<u64> {
    std::fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.len())
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    config_root_dir_with(&|name| std::env::var(name).ok())
}

pub(super) fn config_root_dir_with<FEnv>(env_lookup: &FEnv) -> Option<PathBuf>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = env_lookup("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

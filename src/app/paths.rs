// SPDX-License-Identifier: MPL-2.0
//! Where `settings.toml` lives.
//!
//! The first of these that is set wins: an explicit path passed by the
//! caller, `--config-dir`, `INSTAFILTER_CONFIG_DIR`, then the platform config
//! directory from `dirs` with an `Instafilter` subfolder.

use std::path::PathBuf;
use std::sync::OnceLock;

pub const APP_NAME: &str = "Instafilter";

pub const ENV_CONFIG_DIR: &str = "INSTAFILTER_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument. Later calls are ignored.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        tracing::warn!("config dir override was already recorded");
    }
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

fn env_config_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_CONFIG_DIR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Resolves the config directory; `None` when nothing is set and the
/// platform has no config directory.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    override_path
        .or_else(cli_config_dir)
        .or_else(env_config_dir)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch the process environment.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn with_env<T>(value: Option<&str>, body: impl FnOnce() -> T) -> T {
        let _lock = ENV_MUTEX.lock().unwrap();
        match value {
            Some(value) => std::env::set_var(ENV_CONFIG_DIR, value),
            None => std::env::remove_var(ENV_CONFIG_DIR),
        }
        let result = body();
        std::env::remove_var(ENV_CONFIG_DIR);
        result
    }

    fn resolved() -> Option<PathBuf> {
        get_app_config_dir_with_override(None)
    }

    #[test]
    fn platform_dir_ends_with_app_name() {
        let dir = with_env(None, resolved);
        if let Some(dir) = dir {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn env_var_replaces_platform_dir() {
        let dir = with_env(Some("/srv/instafilter"), resolved);
        assert_eq!(dir, Some(PathBuf::from("/srv/instafilter")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let dir = with_env(Some(""), resolved);
        if let Some(dir) = dir {
            assert!(dir.ends_with(APP_NAME));
        }
    }

    #[test]
    fn explicit_path_beats_env_var() {
        let explicit = PathBuf::from("/tmp/explicit");
        let dir = with_env(Some("/srv/instafilter"), || {
            get_app_config_dir_with_override(Some(explicit.clone()))
        });
        assert_eq!(dir, Some(explicit));
    }
}

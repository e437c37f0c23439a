//! # Configuration Loader / 配置加载器
//!
//! Reads a TOML file and maps it onto [`AppConfig`]. Interpreting values is
//! left to wiring.
//!
//! ## Responsibilities / 职责
//!
//! - Resolve which file to read / 确定读取哪个配置文件
//! - Read and parse TOML with context on failure / 读取并解析 TOML，失败时附带上下文
//!
//! > **仅加载数据，不做业务判断。**

use anyhow::Context;
use std::path::PathBuf;
use sr_core::config::AppConfig;
use tracing::{debug, info};

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "SMARTREADS_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// Picks the config file: explicit path, then `SMARTREADS_CONFIG`, then
/// `<config dir>/smartreads/config.toml` when it exists.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }
    if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("smartreads").join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}

/// Loads the resolved config file, or the built-in defaults when there is
/// none. An explicitly named file that fails to load is an error.
pub fn load_or_default(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    match resolve_config_path(explicit) {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            load_config(path)
        }
        None => {
            debug!("no config file; using defaults");
            Ok(AppConfig::default())
        }
    }
}

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

/// 未显式指定 `--config` 时尝试读取的文件（不存在则跳过）。
pub const DEFAULT_CONFIG_FILE: &str = "menu.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// None 表示使用随包附带的 `asset/menu.tsv`
    pub catalog_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_filter: "warn".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    catalog: Option<PathBuf>,
    log: Option<String>,
}

/// 默认值 < 配置文件 < 环境变量（`MENU_CATALOG`、`MENU_LOG`）；命令行参数由调用方最后覆盖。
pub fn load_settings(config_path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_with(config_path, |key| std::env::var(key).ok())
}

fn load_settings_with(
    config_path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let (path, required) = match config_path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };
    match fs::read_to_string(&path) {
        Ok(raw) => apply_file(&mut settings, &raw)
            .with_context(|| format!("invalid config file '{}'", path.display()))?,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {}
        Err(e) => {
            return Err(e).with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env(&mut settings, lookup);
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileConfig = toml::from_str(raw)?;
    if let Some(v) = file_cfg.catalog {
        settings.catalog_path = Some(v);
    }
    if let Some(v) = file_cfg.log {
        settings.log_filter = v;
    }
    Ok(())
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("MENU_CATALOG").filter(|v| !v.is_empty()) {
        settings.catalog_path = Some(PathBuf::from(v));
    }
    if let Some(v) = lookup("MENU_LOG").filter(|v| !v.is_empty()) {
        settings.log_filter = v;
    }
}

/// 命令行参数优先级最高。
pub fn apply_args(settings: &mut Settings, catalog: Option<PathBuf>, log: Option<String>) {
    if let Some(p) = catalog {
        settings.catalog_path = Some(p);
    }
    if let Some(f) = log {
        settings.log_filter = f;
    }
}

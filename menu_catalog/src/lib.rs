//! `menu_catalog`：从文件加载静态菜品目录。
//!
//! 支持两种格式，加载结果都经过 `Catalog::new` 校验（id 唯一、不占用哨兵分类）。

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use menu_core::{
    catalog::Catalog,
    error::CatalogError,
    model::{Dish, DishId},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalog '{}'", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("TSV line {line}: {reason}")]
    Parse { line: usize, reason: String },
    #[error("invalid TOML catalog")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// 按扩展名选择解析器：`.toml` 走 TOML，其余按 TSV 处理。
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => from_toml_str(&s)?,
        _ => from_tsv_str(&s)?,
    };
    info!(path = %path.display(), dishes = catalog.len(), "loaded catalog");
    Ok(catalog)
}

/// TSV 格式（简化版）：
///
/// - `id<TAB>name<TAB>pinyin<TAB>category<TAB>price<TAB>image<TAB>description`
/// - price/image/description 可省略，price 默认 0；description 可以包含 TAB
/// - 允许 `#` 开头注释行与空行
pub fn from_tsv_str(s: &str) -> Result<Catalog, LoadError> {
    let mut dishes: Vec<Dish> = Vec::new();

    for (idx, raw) in s.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim_end_matches('\r');
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }
        // description 是最后一列，保留其中的 TAB
        let mut it = line.splitn(7, '\t').map(str::trim);
        let mut required = |field: &str| -> Result<String, LoadError> {
            match it.next() {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(LoadError::Parse {
                    line: line_no,
                    reason: format!("missing {field}"),
                }),
            }
        };
        let id = required("id")?;
        let name = required("name")?;
        let pinyin_name = required("pinyin")?;
        let category = required("category")?;

        let id = id.parse::<u32>().map_err(|_| LoadError::Parse {
            line: line_no,
            reason: format!("invalid id '{id}'"),
        })?;
        let price = match it.next().filter(|x| !x.is_empty()) {
            Some(p) => p.parse::<u32>().map_err(|_| LoadError::Parse {
                line: line_no,
                reason: format!("invalid price '{p}'"),
            })?,
            None => 0,
        };
        let image = it.next().unwrap_or("").to_string();
        let description = it.next().unwrap_or("").to_string();

        dishes.push(Dish {
            id: DishId(id),
            name,
            pinyin_name,
            category,
            description,
            price,
            image,
        });
    }

    Ok(Catalog::new(dishes)?)
}

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    dish: Vec<Dish>,
}

/// TOML 格式：若干 `[[dish]]` 表，字段与 `Dish` 一致。
pub fn from_toml_str(s: &str) -> Result<Catalog, LoadError> {
    let parsed: TomlCatalog = toml::from_str(s)?;
    Ok(Catalog::new(parsed.dish)?)
}

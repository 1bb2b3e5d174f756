//! 配置路径管理
//!
//! - 持久化配置（bindings.json）保存在 ~/.moltenv/
//! - 日志文件保存在系统临时目录 /tmp/.moltenv/

use crate::common::constants::files;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// 配置文件路径集合
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// 持久化配置目录（~/.moltenv/）
    pub config_dir: PathBuf,
    /// 默认 bindings 文件
    pub bindings_file: PathBuf,
    /// 日志文件（保存在运行时目录）
    pub log_file: PathBuf,
}

impl ConfigPaths {
    /// 基于 $HOME 创建配置路径
    pub fn new() -> Result<Self> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?;
        Ok(Self::with_home(&home_dir))
    }

    /// 基于指定目录创建配置路径（测试用）
    pub fn with_home(home_dir: &Path) -> Self {
        let config_dir = home_dir.join(files::CONFIG_DIRECTORY);
        let runtime_dir = std::env::temp_dir().join(files::CONFIG_DIRECTORY);

        Self {
            bindings_file: config_dir.join(files::BINDINGS_JSON),
            log_file: runtime_dir.join(files::LOG_FILE),
            config_dir,
        }
    }

    /// Pick the bindings file to load.
    ///
    /// An explicit path always wins; otherwise the default file is used when it exists.
    pub fn resolve_bindings_file(&self, explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None if self.bindings_file.is_file() => Some(self.bindings_file.clone()),
            None => None,
        }
    }
}

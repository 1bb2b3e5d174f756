//! 工具模块
//!
//! 配置路径与日志

pub mod config_paths;
pub mod logger;

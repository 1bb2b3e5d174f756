//! CLI 命令行参数解析
//!
//! 使用 clap 定义命令行接口

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// moltenv - build the bot container environment from gateway bindings
#[derive(Parser, Debug)]
#[command(name = "moltenv", version, about, long_about = None)]
pub struct Cli {
    /// 日志级别或 EnvFilter 指令（默认读取 RUST_LOG）
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// 同时写入日志文件 (/tmp/.moltenv/moltenv.log)
    #[arg(long, global = true)]
    pub log_to_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the bindings come from
#[derive(Args, Debug, Clone, Default)]
pub struct BindingsSource {
    /// Bindings file (.json or .toml); defaults to ~/.moltenv/bindings.json when present
    #[arg(long, short = 'b', value_name = "FILE")]
    pub bindings: Option<PathBuf>,

    /// Ignore bindings found in the current process environment
    #[arg(long)]
    pub no_process_env: bool,
}

/// Output format for `print`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// KEY=value lines
    #[default]
    Env,
    /// export KEY='value' lines, safe to eval in a POSIX shell
    Shell,
    /// Pretty JSON object
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the environment that would be injected
    Print {
        #[command(flatten)]
        source: BindingsSource,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Env)]
        format: OutputFormat,
    },

    /// Launch a program with the environment injected
    Run {
        #[command(flatten)]
        source: BindingsSource,

        /// Do not inherit the current environment
        #[arg(long)]
        clear_env: bool,

        /// Working directory for the program
        #[arg(long, value_name = "DIR")]
        cwd: Option<PathBuf>,

        /// Program to launch
        #[arg(required = true)]
        program: String,

        /// Arguments passed through to the program
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List every binding and the variable it becomes
    Keys,
}

impl Cli {
    pub fn parse_command() -> Self {
        Self::parse()
    }
}

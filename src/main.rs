use moltenv::commands::{self, Cli};
use moltenv::utils::config_paths::ConfigPaths;
use moltenv::utils::logger::init_logger;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse_command();

    // 初始化日志系统
    let log_file = if cli.log_to_file {
        ConfigPaths::new().ok().map(|paths| paths.log_file)
    } else {
        None
    };
    if let Err(err) = init_logger(cli.log_level.as_deref(), log_file) {
        eprintln!("Failed to initialize logging: {}", err);
        return ExitCode::from(1);
    }

    match commands::execute(cli.command).await {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(category = %err.category(), "{}", err);
            eprintln!("{}", err.user_message());
            ExitCode::from(1)
        }
    }
}

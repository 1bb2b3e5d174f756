//! Command handlers

pub mod parser;
pub mod print;

pub use parser::{BindingsSource, Cli, Commands, OutputFormat};

use crate::error::MoltenvResult;
use crate::launcher::{self, LaunchOptions};
use crate::provider::{build_env_vars, GatewayBindings};
use crate::utils::config_paths::ConfigPaths;
use std::process::ExitCode;
use tracing::{debug, info};

/// Load bindings: file first, process environment layered on top
pub fn load_bindings(
    source: &BindingsSource,
    paths: Option<&ConfigPaths>,
) -> MoltenvResult<GatewayBindings> {
    let file = match paths {
        Some(paths) => paths.resolve_bindings_file(source.bindings.as_deref()),
        None => source.bindings.clone(),
    };

    let mut bindings = match &file {
        Some(path) => {
            let loaded = GatewayBindings::from_file(path)?;
            debug!(path = %path.display(), keys = ?loaded.present_names(), "Loaded bindings file");
            loaded
        }
        None => GatewayBindings::default(),
    };

    if !source.no_process_env {
        let from_env = GatewayBindings::from_process_env();
        debug!(keys = ?from_env.present_names(), "Read bindings from process environment");
        bindings = bindings.merge(from_env);
    }

    Ok(bindings)
}

fn default_paths() -> Option<ConfigPaths> {
    match ConfigPaths::new() {
        Ok(paths) => Some(paths),
        Err(err) => {
            debug!("No default bindings location: {}", err);
            None
        }
    }
}

/// Dispatch a parsed command
pub async fn execute(command: Commands) -> MoltenvResult<ExitCode> {
    match command {
        Commands::Print { source, format } => {
            let bindings = load_bindings(&source, default_paths().as_ref())?;
            let env_vars = build_env_vars(&bindings);
            info!(count = env_vars.len(), "Built container environment");
            print!("{}", print::render_env(&env_vars, format));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run {
            source,
            clear_env,
            cwd,
            program,
            args,
        } => {
            let bindings = load_bindings(&source, default_paths().as_ref())?;
            let env_vars = build_env_vars(&bindings);
            info!(count = env_vars.len(), "Built container environment");

            let options = LaunchOptions {
                program,
                args,
                cwd,
                clear_env,
            };
            let status = launcher::launch(&options, &env_vars).await?;
            let code = launcher::exit_code(&status);
            Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
        }
        Commands::Keys => {
            print!("{}", print::render_keys());
            Ok(ExitCode::SUCCESS)
        }
    }
}

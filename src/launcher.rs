//! Launch the bot process with the built environment injected

use crate::error::{MoltenvError, MoltenvResult};
use crate::provider::{EnvInjector, EnvVars};
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{debug, info};

/// How to launch the child process
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Program to execute
    pub program: String,
    /// Arguments passed through verbatim
    pub args: Vec<String>,
    /// Working directory for the child
    pub cwd: Option<PathBuf>,
    /// Start from an empty environment instead of inheriting ours.
    ///
    /// When false the child still inherits our environment, minus every known
    /// binding or container variable that the built environment does not set.
    pub clear_env: bool,
}

impl LaunchOptions {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            ..Default::default()
        }
    }
}

fn build_command(options: &LaunchOptions, env_vars: &EnvVars) -> Command {
    let mut command = Command::new(&options.program);
    command.args(&options.args);
    command.stdin(Stdio::inherit());
    command.stdout(Stdio::inherit());
    command.stderr(Stdio::inherit());
    command.kill_on_drop(true);

    if let Some(cwd) = &options.cwd {
        command.current_dir(cwd);
    }

    if options.clear_env {
        command.env_clear();
    } else {
        EnvInjector::remove_stale_tokio(&mut command, env_vars);
    }

    // Inject environment variables
    EnvInjector::inject_tokio(&mut command, env_vars);
    command
}

/// Spawn the program with `env_vars` injected and wait for it to exit
pub async fn launch(options: &LaunchOptions, env_vars: &EnvVars) -> MoltenvResult<ExitStatus> {
    let mut command = build_command(options, env_vars);

    debug!(
        program = %options.program,
        keys = ?EnvInjector::key_names(env_vars),
        clear_env = options.clear_env,
        "Injecting container environment"
    );

    let mut child = command
        .spawn()
        .map_err(|e| MoltenvError::process("Failed to launch", &options.program, e))?;

    if let Some(pid) = child.id() {
        info!(pid, program = %options.program, "Started process");
    }

    let status = child
        .wait()
        .await
        .map_err(|e| MoltenvError::process("Failed to wait for", &options.program, e))?;

    info!(code = exit_code(&status), "Process exited");
    Ok(status)
}

/// Convert an exit status into a shell-style exit code
pub fn exit_code(status: &ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

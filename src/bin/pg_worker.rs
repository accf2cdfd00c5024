//! Runs embedded `PostgreSQL` bootstrap operations in a separate process.
//!
//! Usage:
//!
//! ```text
//! pg_worker <operation> <config-path>
//! ```
//!
//! The `operation` is one of `setup`, `start`, or `stop`. The file at
//! `config-path` holds a JSON [`WorkerPayload`] with `PostgreSQL` settings
//! and environment overrides.
//!
//! Test runners executing as root cannot start `PostgreSQL` directly (the
//! server refuses to run as uid 0), so the harness delegates lifecycle
//! calls to this binary, which re-executes itself as `nobody` before
//! touching the cluster.

#[cfg(unix)]
use camino::{Utf8Path, Utf8PathBuf};
#[cfg(unix)]
use nix::unistd::{Uid, User, initgroups, setgid, setuid};
#[cfg(unix)]
use pg_embedded_setup_unpriv::ambient_dir_and_path;
#[cfg(unix)]
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
#[cfg(unix)]
use postgresql_embedded::{PostgreSQL, Status};
#[cfg(unix)]
use std::env;
#[cfg(unix)]
use std::ffi::CString;
#[cfg(unix)]
use std::io;
#[cfg(unix)]
use std::io::Read;
#[cfg(unix)]
use std::process::Command;
#[cfg(unix)]
use taskboard::worker::shell_escape;
#[cfg(unix)]
use thiserror::Error;
#[cfg(unix)]
use tokio::runtime::Builder;

#[cfg(unix)]
const WORKER_REEXEC_ENV: &str = "PG_WORKER_REEXEC";
#[cfg(unix)]
const TRUSTED_PATH: &str = "/usr/sbin:/usr/bin:/sbin:/bin";

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure modes of a worker invocation.
#[cfg(unix)]
#[derive(Debug, Error)]
enum WorkerError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("failed to read worker config: {0}")]
    ConfigRead(#[source] BoxError),
    #[error("failed to parse worker config: {0}")]
    ConfigParse(#[source] serde_json::Error),
    #[error("settings conversion failed: {0}")]
    SettingsConversion(String),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] std::io::Error),
    #[error("failed to drop privileges: {0}")]
    PrivilegeDrop(String),
    #[error("postgres operation failed: {0}")]
    PostgresOperation(String),
}

#[cfg(unix)]
#[derive(Debug)]
enum Operation {
    Setup,
    Start,
    Stop,
}

#[cfg(unix)]
impl Operation {
    fn parse(arg: &Utf8Path) -> Result<Self, WorkerError> {
        match arg.as_str() {
            "setup" => Ok(Self::Setup),
            "start" => Ok(Self::Start),
            "stop" => Ok(Self::Stop),
            other => Err(WorkerError::InvalidArgs(format!(
                "unknown operation '{other}'; expected setup, start, or stop"
            ))),
        }
    }
}

#[cfg(unix)]
fn main() -> Result<(), BoxError> {
    let args = collect_args()?;
    maybe_reexec_as_nobody(&args)?;
    run_worker(args.into_iter()).map_err(Into::into)
}

#[cfg(unix)]
fn collect_args() -> Result<Vec<Utf8PathBuf>, WorkerError> {
    env::args_os()
        .map(|arg_os| {
            let arg = arg_os
                .into_string()
                .map_err(|_| WorkerError::InvalidArgs("argument is not valid UTF-8".into()))?;
            Ok(Utf8PathBuf::from(arg))
        })
        .collect()
}

#[cfg(unix)]
fn run_worker(args: impl Iterator<Item = Utf8PathBuf>) -> Result<(), WorkerError> {
    let (operation, config_path) = parse_args(args)?;
    let payload = load_payload(&config_path)?;
    drop_privileges_if_root("nobody")?;
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| WorkerError::SettingsConversion(err.to_string()))?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(WorkerError::RuntimeInit)?;
    apply_worker_environment(&payload.environment);
    let mut pg = Some(PostgreSQL::new(settings));
    runtime.block_on(async {
        match operation {
            Operation::Setup => {
                let handle = pg.as_mut().ok_or_else(|| {
                    WorkerError::PostgresOperation("pg handle missing during setup".into())
                })?;
                handle
                    .setup()
                    .await
                    .map_err(|err| WorkerError::PostgresOperation(err.to_string()))?;
                ensure_started(handle).await
            }
            Operation::Start => {
                let handle = pg.as_mut().ok_or_else(|| {
                    WorkerError::PostgresOperation("pg handle missing during start".into())
                })?;
                ensure_started(handle).await?;

                if let Some(instance) = pg.take() {
                    // Intentionally leaked so PostgreSQL outlives this process.
                    let _running = std::mem::ManuallyDrop::new(instance);
                }
                Ok(())
            }
            Operation::Stop => {
                let instance = pg.take().ok_or_else(|| {
                    WorkerError::PostgresOperation("pg handle missing during stop".into())
                })?;
                instance
                    .stop()
                    .await
                    .map_err(|err| WorkerError::PostgresOperation(err.to_string()))
            }
        }
    })?;
    Ok(())
}

#[cfg(unix)]
async fn ensure_started(postgres: &mut PostgreSQL) -> Result<(), WorkerError> {
    if matches!(postgres.status(), Status::Started) {
        return Ok(());
    }

    postgres
        .start()
        .await
        .map_err(|err| WorkerError::PostgresOperation(err.to_string()))
}

#[cfg(unix)]
fn maybe_reexec_as_nobody(args: &[Utf8PathBuf]) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() || env::var_os(WORKER_REEXEC_ENV).is_some() {
        return Ok(());
    }

    let exe_path = env::current_exe().map_err(WorkerError::RuntimeInit)?;
    let exe = exe_path
        .into_os_string()
        .into_string()
        .map(Utf8PathBuf::from)
        .map_err(|_| {
            WorkerError::RuntimeInit(std::io::Error::other("executable path is not valid UTF-8"))
        })?;
    let status = match Command::new("runuser")
        .arg("-u")
        .arg("nobody")
        .arg("--")
        .arg(exe.as_std_path())
        .args(args.iter().skip(1).map(|arg| arg.as_std_path()))
        .env(WORKER_REEXEC_ENV, "1")
        .env("PATH", TRUSTED_PATH)
        .status()
    {
        Ok(status) => status,
        Err(err) if err.kind() == io::ErrorKind::NotFound => run_via_su(&exe, args)?,
        Err(err) => return Err(WorkerError::PrivilegeDrop(err.to_string())),
    };

    std::process::exit(status.code().unwrap_or(1));
}

#[cfg(unix)]
fn run_via_su(
    exe: &Utf8Path,
    args: &[Utf8PathBuf],
) -> Result<std::process::ExitStatus, WorkerError> {
    let mut command = format!("{WORKER_REEXEC_ENV}=1 exec {}", shell_escape(exe.as_str()));
    for arg in args.iter().skip(1) {
        command.push(' ');
        command.push_str(&shell_escape(arg.as_str()));
    }

    Command::new("/bin/su")
        .arg("-s")
        .arg("/bin/sh")
        .arg("nobody")
        .arg("-c")
        .arg(command)
        .env("PATH", TRUSTED_PATH)
        .status()
        .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))
}

#[cfg(unix)]
fn parse_args(
    mut args: impl Iterator<Item = Utf8PathBuf>,
) -> Result<(Operation, Utf8PathBuf), WorkerError> {
    let _program = args.next();
    let operation = args
        .next()
        .ok_or_else(|| WorkerError::InvalidArgs("missing operation argument".into()))
        .and_then(|arg| Operation::parse(&arg))?;
    let config_path = args
        .next()
        .ok_or_else(|| WorkerError::InvalidArgs("missing config path argument".into()))?;
    if let Some(extra) = args.next() {
        let extra_arg = extra.as_str();
        return Err(WorkerError::InvalidArgs(format!(
            "unexpected extra argument: {extra_arg}"
        )));
    }
    Ok((operation, config_path))
}

#[cfg(unix)]
fn load_payload(config_path: &Utf8Path) -> Result<WorkerPayload, WorkerError> {
    let config_bytes = read_config_file(config_path).map_err(WorkerError::ConfigRead)?;
    serde_json::from_slice(&config_bytes).map_err(WorkerError::ConfigParse)
}

#[cfg(unix)]
fn read_config_file(path: &Utf8Path) -> Result<Vec<u8>, BoxError> {
    let (dir, relative) = ambient_dir_and_path(path)?;
    let mut file = dir.open(relative.as_std_path())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(unix)]
fn drop_privileges_if_root(username: &str) -> Result<(), WorkerError> {
    if !Uid::effective().is_root() {
        return Ok(());
    }

    let user = User::from_name(username)
        .map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?
        .ok_or_else(|| WorkerError::PrivilegeDrop(format!("user '{username}' not found")))?;

    let user_cstr = CString::new(user.name.clone()).map_err(|err| {
        WorkerError::PrivilegeDrop(format!("invalid user name for initgroups: {err}"))
    })?;
    initgroups(&user_cstr, user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
    setgid(user.gid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;
    setuid(user.uid).map_err(|err| WorkerError::PrivilegeDrop(err.to_string()))?;

    // SAFETY: the worker executes single-threaded and owns env var changes.
    unsafe {
        env::set_var("HOME", user.dir);
        env::set_var("USER", user.name.clone());
        env::set_var("LOGNAME", user.name);
    }

    Ok(())
}

#[cfg(unix)]
fn apply_worker_environment(environment: &[(String, Option<PlainSecret>)]) {
    for (key, value) in environment {
        match value {
            Some(plain) => {
                // SAFETY: the worker runs single-threaded and owns its
                // lifecycle, so nothing else mutates the environment here.
                unsafe {
                    env::set_var(key, plain.expose());
                }
            }
            None => {
                // SAFETY: as above; single-threaded environment mutation.
                unsafe {
                    env::remove_var(key);
                }
            }
        }
    }
}

#[cfg(not(unix))]
fn main() -> Result<(), BoxError> {
    Err("pg_worker is not supported on non-Unix platforms".into())
}

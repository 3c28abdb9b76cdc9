use crate::error::{FikaError, Result};
use crate::runner::CommandRunner;

/// Fails with `NotElevated` when the process lacks admin rights.
pub fn ensure_elevated(runner: &dyn CommandRunner) -> Result<()> {
    if is_elevated(runner) {
        Ok(())
    } else {
        Err(FikaError::NotElevated)
    }
}

/// On Windows there is no direct check in std, but `net session` only
/// succeeds in an elevated console, so probe with that through the
/// command runner.
#[cfg(windows)]
fn is_elevated(runner: &dyn CommandRunner) -> bool {
    runner
        .run("net", &["session".to_string()])
        .map(|code| code == 0)
        .unwrap_or(false)
}

#[cfg(unix)]
fn is_elevated(_runner: &dyn CommandRunner) -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(any(unix, windows)))]
fn is_elevated(_runner: &dyn CommandRunner) -> bool {
    true
}

use std::process::{Command, Stdio};

use crate::error::Result;

/// External process seam. Rule additions and the removal script both go
/// through this so tests can swap in a recording fake.
pub trait CommandRunner {
    /// Runs `program` with `args` to completion and returns its exit code.
    /// All standard streams are suppressed; output is never inspected.
    fn run(&self, program: &str, args: &[String]) -> Result<i32>;
}

pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<i32> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            // CREATE_NO_WINDOW, keeps powershell from flashing a console.
            cmd.creation_flags(0x0800_0000);
        }

        let status = cmd.status()?;
        Ok(status.code().unwrap_or(-1))
    }
}

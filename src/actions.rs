use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::assets::{AssetProvider, TempScript, POWERSHELL};
use crate::console::{Console, Key};
use crate::error::{FikaError, Result};
use crate::rules::{self, RULES};
use crate::runner::CommandRunner;

/// Runtime switches. `strict` replaces the original build-time release
/// gate: it enables the admin check and the companion-executable checks.
pub struct Settings {
    pub strict: bool,
    /// Overrides execution-directory resolution; used by tests. `None`
    /// resolves the directory of the running executable.
    pub base_dir: Option<PathBuf>,
}

impl Settings {
    pub fn new(strict: bool) -> Self {
        Self {
            strict,
            base_dir: None,
        }
    }
}

pub struct Actions<'a> {
    console: &'a dyn Console,
    runner: &'a dyn CommandRunner,
    assets: &'a dyn AssetProvider,
    settings: &'a Settings,
}

impl<'a> Actions<'a> {
    pub fn new(
        console: &'a dyn Console,
        runner: &'a dyn CommandRunner,
        assets: &'a dyn AssetProvider,
        settings: &'a Settings,
    ) -> Self {
        Self {
            console,
            runner,
            assets,
            settings,
        }
    }

    /// Adds the fixed rule set, one netsh invocation per rule, strictly
    /// sequential. Failures do not stop the sequence; every rule is
    /// attempted.
    pub fn add_rules(&self) -> Result<()> {
        self.console.header("Setting up Firewall Rules");

        let dir = match self.exec_dir() {
            Ok(dir) => dir,
            Err(_) => {
                return self.abort(
                    "Unable to find running path! Make sure you are running the executable with admin rights!",
                );
            }
        };

        if self.settings.strict {
            if let Err(FikaError::MissingCompanion(path)) = self.check_companions(&dir) {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                return self.abort(&format!(
                    "Unable to find '{name}', make sure you extracted the executable to your SPT installation folder!"
                ));
            }
        }

        for rule in &RULES {
            let args = rule.netsh_args(&dir);
            self.console
                .line(&format!("Running command: netsh {}", args.join(" ")));
            match self.runner.run(rules::NETSH, &args) {
                Ok(0) => info!(rule = rule.name, "rule added"),
                Ok(code) => {
                    warn!(rule = rule.name, code, "netsh exited non-zero");
                    self.console
                        .warning(&format!("netsh exited with code {code} for '{}'", rule.name));
                }
                Err(e) => {
                    warn!(rule = rule.name, error = %e, "failed to invoke netsh");
                    self.console
                        .warning(&format!("failed to run netsh for '{}': {e}", rule.name));
                }
            }
        }

        self.done()
    }

    /// Confirms, then extracts and runs the bundled removal script. The
    /// script file is deleted whether or not the interpreter succeeds.
    pub fn remove_rules(&self) -> Result<()> {
        self.console.warning(
            "WARNING: This will delete all TCP rules for 6969 and UDP rules for 25565 and all Fika specific rules.\nAre you sure? Y/N",
        );
        loop {
            match self.console.read_key()? {
                Key::Yes => break,
                Key::No => {
                    self.console.clear();
                    return Ok(());
                }
                _ => self.console.error("Incorrect key!"),
            }
        }

        let dir = match self.exec_dir() {
            Ok(dir) => dir,
            Err(_) => {
                return self.abort(
                    "Unable to find running path! Make sure you are running the executable with admin rights!",
                );
            }
        };

        self.console.header("Removing old Firewall Rules");

        {
            let script = match TempScript::materialize(&dir, self.assets.removal_script()) {
                Ok(script) => script,
                Err(e) => return self.abort(&format!("Unable to write removal script: {e}")),
            };

            let args = vec![
                "-ExecutionPolicy".to_string(),
                "Bypass".to_string(),
                "-File".to_string(),
                script.path().display().to_string(),
            ];
            match self.runner.run(POWERSHELL, &args) {
                Ok(0) => info!("removal script completed"),
                Ok(code) => warn!(code, "removal script exited non-zero"),
                Err(e) => {
                    warn!(error = %e, "failed to invoke powershell");
                    self.console
                        .warning(&format!("failed to run the removal script: {e}"));
                }
            }
            // script deleted here, success or not
        }

        self.done()
    }

    fn exec_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.settings.base_dir {
            return Ok(dir.clone());
        }
        let exe = std::env::current_exe().map_err(|_| FikaError::ExecDirUnavailable)?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or(FikaError::ExecDirUnavailable)
    }

    fn check_companions(&self, dir: &Path) -> Result<()> {
        for exe in rules::REQUIRED_COMPANIONS {
            let path = dir.join(exe);
            if !path.exists() {
                return Err(FikaError::MissingCompanion(path));
            }
        }
        Ok(())
    }

    fn abort(&self, message: &str) -> Result<()> {
        self.console.error(message);
        self.pause_and_clear("Press any key to go back...")
    }

    fn done(&self) -> Result<()> {
        self.console.line("");
        self.pause_and_clear("Done! Press any key to go back...")
    }

    fn pause_and_clear(&self, prompt: &str) -> Result<()> {
        self.console.line(prompt);
        self.console.read_key()?;
        self.console.clear();
        Ok(())
    }
}

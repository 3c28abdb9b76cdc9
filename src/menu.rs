use crate::actions::Actions;
use crate::console::{Console, Key};
use crate::error::Result;

pub fn print_tasks(console: &dyn Console) {
    console.line("Select a task:");
    console.line("1 - Add Firewall Rules");
    console.line("2 - Remove Firewall Rules");
    console.line("");
    console.line("Press a key to continue...");
}

/// Single-keypress dispatch loop. Only Escape leaves it.
pub fn run(console: &dyn Console, actions: &Actions<'_>) -> Result<()> {
    print_tasks(console);
    loop {
        match console.read_key()? {
            Key::Digit1 => {
                actions.add_rules()?;
                print_tasks(console);
            }
            Key::Digit2 => {
                actions.remove_rules()?;
                print_tasks(console);
            }
            Key::Escape => return Ok(()),
            _ => console.error("Incorrect key!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Settings;
    use crate::assets::AssetProvider;
    use crate::console::fake::ScriptedConsole;
    use crate::rules::RULES;
    use crate::runner::fake::RecordingRunner;

    struct FixedScript;

    impl AssetProvider for FixedScript {
        fn removal_script(&self) -> &[u8] {
            b"Remove-NetFirewallRule -DisplayName '#FIKA*'"
        }
    }

    #[test]
    fn drives_add_then_remove_prompt_then_exits() {
        let dir = tempfile::tempdir().unwrap();
        // "1" runs the add action (its epilogue eats one key), "2" opens
        // the removal prompt which is declined, Escape quits.
        let console = ScriptedConsole::new(&[
            Key::Digit1,
            Key::Other, // dismisses "Done! Press any key to go back..."
            Key::Digit2,
            Key::No,
            Key::Escape,
        ]);
        let runner = RecordingRunner::new();
        let settings = Settings {
            strict: false,
            base_dir: Some(dir.path().to_path_buf()),
        };
        let actions = Actions::new(&console, &runner, &FixedScript, &settings);

        run(&console, &actions).unwrap();

        // one full add sequence, nothing from the declined removal
        assert_eq!(runner.call_count(), RULES.len());
        assert!(console.printed("WARNING: This will delete all TCP rules"));
    }

    #[test]
    fn unknown_key_reports_error_and_keeps_looping() {
        let dir = tempfile::tempdir().unwrap();
        let console = ScriptedConsole::new(&[Key::Other, Key::Yes, Key::Escape]);
        let runner = RecordingRunner::new();
        let settings = Settings {
            strict: false,
            base_dir: Some(dir.path().to_path_buf()),
        };
        let actions = Actions::new(&console, &runner, &FixedScript, &settings);

        run(&console, &actions).unwrap();

        assert_eq!(runner.call_count(), 0);
        assert_eq!(
            console
                .output
                .borrow()
                .iter()
                .filter(|l| l.contains("Incorrect key!"))
                .count(),
            2
        );
        // menu is reprinted once at entry only; errors do not clear it
        assert_eq!(
            console
                .output
                .borrow()
                .iter()
                .filter(|l| l.as_str() == "Select a task:")
                .count(),
            1
        );
    }
}

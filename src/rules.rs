use std::path::Path;

pub const NETSH: &str = "netsh.exe";

pub const SERVER_EXE: &str = "SPT.Server.exe";
pub const CLIENT_EXE: &str = "EscapeFromTarkov.exe";
pub const LAUNCHER_EXE: &str = "SPT.Launcher.exe";

/// Executables that must be present next to this tool before rules are
/// added (strict mode only). The launcher rule is created regardless; its
/// absence is not an error.
pub const REQUIRED_COMPANIONS: [&str; 2] = [SERVER_EXE, CLIENT_EXE];

pub const SERVER_TCP_PORT: u16 = 6969;
pub const NAT_UDP_PORT: u16 = 25565;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::In => "in",
            Direction::Out => "out",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Target {
    /// Port rule for a single protocol.
    Port { protocol: &'static str, port: u16 },
    /// Program rule; `exe` is resolved against the execution directory.
    Program { exe: &'static str },
}

/// One fixed firewall rule. All rules allow traffic, are enabled, and
/// apply to the public and private profiles.
#[derive(Debug, Clone, Copy)]
pub struct RuleDescriptor {
    pub name: &'static str,
    pub direction: Direction,
    pub target: Target,
}

const fn port_rule(
    name: &'static str,
    direction: Direction,
    protocol: &'static str,
    port: u16,
) -> RuleDescriptor {
    RuleDescriptor {
        name,
        direction,
        target: Target::Port { protocol, port },
    }
}

const fn program_rule(name: &'static str, direction: Direction, exe: &'static str) -> RuleDescriptor {
    RuleDescriptor {
        name,
        direction,
        target: Target::Program { exe },
    }
}

pub const RULES: [RuleDescriptor; 10] = [
    port_rule("#FIKA TCP 6969 IN", Direction::In, "TCP", SERVER_TCP_PORT),
    port_rule("#FIKA TCP 6969 OUT", Direction::Out, "TCP", SERVER_TCP_PORT),
    port_rule("#FIKA UDP 25565 IN", Direction::In, "UDP", NAT_UDP_PORT),
    port_rule("#FIKA UDP 25565 OUT", Direction::Out, "UDP", NAT_UDP_PORT),
    program_rule("#FIKA Tarkov IN", Direction::In, CLIENT_EXE),
    program_rule("#FIKA Tarkov OUT", Direction::Out, CLIENT_EXE),
    program_rule("#FIKA SPT.SERVER IN", Direction::In, SERVER_EXE),
    program_rule("#FIKA SPT.SERVER OUT", Direction::Out, SERVER_EXE),
    program_rule("#FIKA SPT.LAUNCHER IN", Direction::In, LAUNCHER_EXE),
    program_rule("#FIKA SPT.LAUNCHER OUT", Direction::Out, LAUNCHER_EXE),
];

impl RuleDescriptor {
    /// Renders the `netsh advfirewall firewall add rule` argument vector.
    /// Arguments with spaces (rule names, program paths) are single argv
    /// entries; quoting is the OS's problem, not ours.
    pub fn netsh_args(&self, base_dir: &Path) -> Vec<String> {
        let mut args = vec![
            "advfirewall".to_string(),
            "firewall".to_string(),
            "add".to_string(),
            "rule".to_string(),
            format!("name={}", self.name),
            format!("dir={}", self.direction.as_str()),
            "action=allow".to_string(),
        ];

        match self.target {
            Target::Port { protocol, port } => {
                args.push(format!("protocol={protocol}"));
                args.push(format!("localport={port}"));
            }
            Target::Program { exe } => {
                args.push(format!("program={}", base_dir.join(exe).display()));
            }
        }

        args.push("enable=yes".to_string());
        args.push("profile=public,private".to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn covers_both_directions_for_every_name() {
        let names: Vec<&str> = RULES.iter().map(|r| r.name).collect();
        for stem in [
            "#FIKA TCP 6969",
            "#FIKA UDP 25565",
            "#FIKA Tarkov",
            "#FIKA SPT.SERVER",
            "#FIKA SPT.LAUNCHER",
        ] {
            assert!(names.contains(&format!("{stem} IN").as_str()));
            assert!(names.contains(&format!("{stem} OUT").as_str()));
        }
        assert_eq!(RULES.len(), 10);
    }

    #[test]
    fn port_rule_args_match_template() {
        let rule = &RULES[0];
        let args = rule.netsh_args(Path::new("C:\\SPT"));
        assert_eq!(
            args,
            vec![
                "advfirewall",
                "firewall",
                "add",
                "rule",
                "name=#FIKA TCP 6969 IN",
                "dir=in",
                "action=allow",
                "protocol=TCP",
                "localport=6969",
                "enable=yes",
                "profile=public,private",
            ]
        );
    }

    #[test]
    fn program_rule_args_match_template() {
        let rule = RULES
            .iter()
            .find(|r| r.name == "#FIKA SPT.SERVER OUT")
            .unwrap();
        let base = PathBuf::from("/opt/spt");
        let args = rule.netsh_args(&base);
        assert_eq!(args[4], "name=#FIKA SPT.SERVER OUT");
        assert_eq!(args[5], "dir=out");
        assert_eq!(args[6], "action=allow");
        assert_eq!(
            args[7],
            format!("program={}", base.join(SERVER_EXE).display())
        );
        assert_eq!(args[8], "enable=yes");
        assert_eq!(args[9], "profile=public,private");
    }

    #[test]
    fn every_rule_allows_on_public_and_private() {
        for rule in &RULES {
            let args = rule.netsh_args(Path::new("."));
            assert!(args.contains(&"action=allow".to_string()), "{}", rule.name);
            assert!(args.contains(&"enable=yes".to_string()), "{}", rule.name);
            assert_eq!(args.last().unwrap(), "profile=public,private");
        }
    }
}

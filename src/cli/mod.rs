use clap::Parser;

/// Command-line surface: every value is settable by long flag, short flag, or
/// by position (`<mode> <target> <backup-file>`).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Specify the operation mode: 'backup' or 'restore'.
    #[arg(long, short = 'm')]
    pub mode: Option<String>,

    /// Specify the target directory for permissions backup or restore.
    #[arg(long, short = 't')]
    pub target: Option<String>,

    /// Specify the record file to write during backup or read during restore.
    #[arg(long = "backup-file", short = 'b')]
    pub backup_file: Option<String>,

    /// Positional fallback, consulted only when no flags were given.
    #[arg(value_name = "MODE TARGET BACKUP-FILE")]
    pub positional: Vec<String>,
}

/// The two operations permsnap can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Backup,
    Restore,
}

impl Mode {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "backup" => Ok(Mode::Backup),
            "restore" => Ok(Mode::Restore),
            other => Err(format!("invalid mode '{other}': use 'backup' or 'restore'")),
        }
    }
}

/// A fully-resolved invocation: the mode plus the two required paths.
#[derive(Debug)]
pub struct Invocation {
    pub mode: Mode,
    pub target: String,
    pub backup_file: String,
}

impl Args {
    /// Folds flags and the positional fallback into one invocation.
    ///
    /// Flags take precedence; positionals are consulted only when none of the
    /// three flags was given and at least three positional arguments are
    /// present.
    pub fn into_invocation(self) -> Result<Invocation, String> {
        let Args {
            mut mode,
            mut target,
            mut backup_file,
            positional,
        } = self;

        if mode.is_none() && target.is_none() && backup_file.is_none() && positional.len() >= 3 {
            let mut values = positional.into_iter();
            mode = values.next();
            target = values.next();
            backup_file = values.next();
        }

        let mode = mode.ok_or_else(|| {
            String::from("'mode' is required: set it with --mode/-m or as the first argument")
        })?;
        let target = target.ok_or_else(|| {
            String::from("'target' is required: set it with --target/-t or as the second argument")
        })?;
        let backup_file = backup_file.ok_or_else(|| {
            String::from(
                "'backup-file' is required: set it with --backup-file/-b or as the third argument",
            )
        })?;

        Ok(Invocation {
            mode: Mode::parse(&mode)?,
            target,
            backup_file,
        })
    }
}

/// Parses the process arguments and resolves them into an [`Invocation`].
///
/// This is the main entry point for the CLI logic.
pub fn run() -> Result<Invocation, Box<dyn std::error::Error>> {
    Args::parse().into_invocation().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation, String> {
        Args::try_parse_from(std::iter::once("permsnap").chain(args.iter().copied()))
            .unwrap()
            .into_invocation()
    }

    #[test]
    fn long_flags_resolve() {
        let inv = parse(&["--mode", "backup", "--target", "/data", "--backup-file", "out.json"])
            .unwrap();
        assert_eq!(inv.mode, Mode::Backup);
        assert_eq!(inv.target, "/data");
        assert_eq!(inv.backup_file, "out.json");
    }

    #[test]
    fn short_flags_resolve() {
        let inv = parse(&["-m", "restore", "-t", "/data", "-b", "out.json"]).unwrap();
        assert_eq!(inv.mode, Mode::Restore);
    }

    #[test]
    fn positional_fallback_resolves() {
        let inv = parse(&["backup", "/data", "out.json"]).unwrap();
        assert_eq!(inv.mode, Mode::Backup);
        assert_eq!(inv.target, "/data");
        assert_eq!(inv.backup_file, "out.json");
    }

    #[test]
    fn flags_win_over_positionals() {
        // once any flag is present the positional fallback is off
        let err = parse(&["-m", "backup", "/data", "out.json"]).unwrap_err();
        assert!(err.contains("'target' is required"));
    }

    #[test]
    fn missing_values_are_reported_in_order() {
        assert!(parse(&[]).unwrap_err().contains("'mode' is required"));
        assert!(parse(&["-m", "backup"])
            .unwrap_err()
            .contains("'target' is required"));
        assert!(parse(&["-m", "backup", "-t", "/data"])
            .unwrap_err()
            .contains("'backup-file' is required"));
    }

    #[test]
    fn unknown_mode_is_rejected() {
        let err = parse(&["-m", "verify", "-t", "/data", "-b", "out.json"]).unwrap_err();
        assert!(err.contains("invalid mode 'verify'"));
    }
}

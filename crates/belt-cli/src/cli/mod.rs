use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::{AddArgs, Commands, WorkArgs};
pub use subcommands::{TaskCommands, UserCommands};

/// Top-level CLI parser for the `belt` binary.
#[derive(Debug, Parser)]
#[command(name = "belt", version, about = "Taskbelt - queue-driven task tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Database path (overrides configuration)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            db: self.db.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::subcommands::{TaskCommands, UserCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "belt", "--format", "json", "--limit", "10", "--verbose", "user", "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["belt", "user", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn format_defaults_to_table() {
        let cli = Cli::try_parse_from(["belt", "work"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["belt", "--format", "xml", "user", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn add_parses_title_and_options() {
        let cli = Cli::try_parse_from([
            "belt",
            "add",
            "Fix the login flow",
            "--description",
            "repro in issue 12",
            "--priority",
            "1",
            "--assignee",
            "2",
        ])
        .expect("cli should parse");

        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.title, "Fix the login flow");
        assert_eq!(args.description.as_deref(), Some("repro in issue 12"));
        assert_eq!(args.priority, Some(1));
        assert_eq!(args.assignee, Some(2));
    }

    #[test]
    fn add_priority_is_optional() {
        let cli = Cli::try_parse_from(["belt", "add", "Just a title"]).expect("cli should parse");
        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        assert_eq!(args.priority, None);
        assert_eq!(args.assignee, None);
    }

    #[test]
    fn work_parses_undo_last() {
        let cli = Cli::try_parse_from(["belt", "work", "--undo-last"]).expect("cli should parse");
        let Commands::Work(args) = cli.command else {
            panic!("expected work command");
        };
        assert!(args.undo_last);

        let cli = Cli::try_parse_from(["belt", "work"]).expect("cli should parse");
        let Commands::Work(args) = cli.command else {
            panic!("expected work command");
        };
        assert!(!args.undo_last);
    }

    #[test]
    fn task_update_parses_id_and_status() {
        let cli = Cli::try_parse_from(["belt", "task", "update", "7", "--status", "in_progress"])
            .expect("cli should parse");

        let Commands::Task {
            action: TaskCommands::Update { id, status },
        } = cli.command
        else {
            panic!("expected task update command");
        };
        assert_eq!(id, 7);
        assert_eq!(status, "in_progress");
    }

    #[test]
    fn task_list_accepts_status_filter() {
        let cli = Cli::try_parse_from(["belt", "task", "list", "--status", "pending"])
            .expect("cli should parse");

        let Commands::Task {
            action: TaskCommands::List { status, limit },
        } = cli.command
        else {
            panic!("expected task list command");
        };
        assert_eq!(status.as_deref(), Some("pending"));
        assert_eq!(limit, None);
    }

    #[test]
    fn user_rm_parses_numeric_id() {
        let cli = Cli::try_parse_from(["belt", "user", "rm", "3"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::Rm { id: 3 }
            }
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["belt", "--db", "/tmp/belt.db", "user", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.db.as_deref(), Some("/tmp/belt.db"));
    }
}

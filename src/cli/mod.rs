//! CLI module for Contact Me
//!
//! Without a subcommand the GUI opens; subcommands run headless.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::OutputFormat;

/// Contact Me - send a message through the contact endpoint
#[derive(Parser, Debug)]
#[command(name = "contact-me")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a message without opening the window
    Send(commands::send::SendArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a CLI subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Send(args) => commands::send::run(args, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_gui() {
        let cli = Cli::try_parse_from(["contact-me"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output.format(), OutputFormat::Text);
    }

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "contact-me",
            "send",
            "--name",
            "Jo",
            "--email",
            "jo@x.com",
            "--subject",
            "Hi",
            "--message",
            "Hello",
            "--server",
            "http://127.0.0.1:9000",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.output.format(), OutputFormat::Json);
        match cli.command {
            Some(Commands::Send(args)) => {
                assert_eq!(args.name, "Jo");
                assert_eq!(args.message, "Hello");
                assert_eq!(args.server.as_deref(), Some("http://127.0.0.1:9000"));
                assert_eq!(args.timeout, None);
            }
            other => panic!("expected send command, got {:?}", other),
        }
    }

    #[test]
    fn test_send_requires_every_field() {
        let result = Cli::try_parse_from(["contact-me", "send", "--name", "Jo"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_config_set() {
        let cli =
            Cli::try_parse_from(["contact-me", "config", "set", "server.endpoint", "/mail"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: commands::config::ConfigCommands::Set { .. }
            })
        ));
    }
}

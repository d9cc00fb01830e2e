use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "courier", about = "Permission-gated SMS dispatch bridge")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Send an SMS through the bridge
    Send {
        /// Destination phone number
        #[arg(long)]
        to: String,

        /// Message body
        #[arg(long)]
        message: String,
    },
    /// Invoke a raw method-channel call and print the result as JSON
    Call {
        /// Operation name (only "sendSMS" is recognized)
        method: String,

        /// Argument bundle as a JSON object
        #[arg(long)]
        args: Option<String>,
    },
    /// Manage the host SMS permission
    Permissions {
        #[command(subcommand)]
        action: PermissionsAction,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PermissionsAction {
    /// Grant the SMS permission (answers a pending request)
    Grant,
    /// Revoke the SMS permission
    Revoke,
    /// Show the current permission state
    Status,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, PermissionsAction};

    #[test]
    fn parses_send_with_destination_and_message() {
        let cli = Cli::parse_from(["courier", "send", "--to", "+15551234567", "--message", "hi"]);

        match cli.command {
            Command::Send { to, message } => {
                assert_eq!(to, "+15551234567");
                assert_eq!(message, "hi");
            }
            other => panic!("expected send command, got {other:?}"),
        }
    }

    #[test]
    fn parses_raw_call_with_args_and_config() {
        let cli = Cli::parse_from([
            "courier",
            "call",
            "sendSMS",
            "--args",
            r#"{"phoneNumber": "+15551234567", "message": "hi"}"#,
            "--config",
            "custom.toml",
        ]);

        match cli.command {
            Command::Call { method, args } => {
                assert_eq!(method, "sendSMS");
                assert!(args.expect("args should parse").contains("phoneNumber"));
            }
            other => panic!("expected call command, got {other:?}"),
        }
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn parses_permission_actions() {
        let cli = Cli::parse_from(["courier", "permissions", "grant"]);

        assert!(matches!(
            cli.command,
            Command::Permissions {
                action: PermissionsAction::Grant
            }
        ));
    }
}
